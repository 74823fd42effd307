//! Accumulator engine
//!
//! A running total, a two-state operator flag and the last applied operand.
//! Every operation takes the state by value and hands back its successor.
//! Nothing in here knows about rendering, locales or themes.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    #[error("invalid operand: {0}")]
    InvalidOperand(f64),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Sign applied to the next operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorMode {
    #[default]
    Add,
    Subtract,
}

impl OperatorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Add => Self::Subtract,
            Self::Subtract => Self::Add,
        }
    }

    /// Display symbol. Subtract uses U+2212, not the ASCII hyphen.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
        }
    }

    fn signed(self, value: f64) -> f64 {
        match self {
            Self::Add => value,
            Self::Subtract => -value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulatorState {
    pub total: f64,
    pub operator_mode: OperatorMode,
    pub last_operand: Option<f64>,
}

impl AccumulatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or subtract `value` depending on the current mode.
    ///
    /// `value` must be finite and strictly positive, and applying it must
    /// keep the total finite. On error the receiver is simply dropped by the
    /// caller, so the previous state stays valid.
    pub fn apply_operand(self, value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EngineError::InvalidOperand(value));
        }
        let total = self.total + self.operator_mode.signed(value);
        if !total.is_finite() {
            return Err(EngineError::InvalidOperand(value));
        }
        Ok(Self {
            total,
            last_operand: Some(value),
            ..self
        })
    }

    pub fn toggle_operator_mode(self) -> Self {
        Self {
            operator_mode: self.operator_mode.toggled(),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = AccumulatorState::new();
        assert_eq!(s.total, 0.0);
        assert_eq!(s.operator_mode, OperatorMode::Add);
        assert_eq!(s.last_operand, None);
    }

    #[test]
    fn test_apply_in_both_modes() {
        let s = AccumulatorState::new().apply_operand(2.0).unwrap();
        assert_eq!(s.total, 2.0);
        assert_eq!(s.last_operand, Some(2.0));

        let s = s.toggle_operator_mode().apply_operand(0.75).unwrap();
        assert_eq!(s.total, 1.25);
        // magnitude, not the signed value
        assert_eq!(s.last_operand, Some(0.75));
        assert_eq!(s.operator_mode, OperatorMode::Subtract);
    }

    #[test]
    fn test_toggle_does_not_resign_history() {
        let s = AccumulatorState::new()
            .apply_operand(5.0)
            .unwrap()
            .toggle_operator_mode();
        assert_eq!(s.total, 5.0);
        let s = s.apply_operand(1.0).unwrap().toggle_operator_mode();
        assert_eq!(s.total, 4.0);
        assert_eq!(s.operator_mode, OperatorMode::Add);
    }

    #[test]
    fn test_total_goes_negative() {
        let s = AccumulatorState::new()
            .toggle_operator_mode()
            .apply_operand(3.0)
            .unwrap();
        assert_eq!(s.total, -3.0);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let s = AccumulatorState::new()
            .apply_operand(0.5)
            .unwrap()
            .apply_operand(4.0)
            .unwrap();
        assert_eq!(s.toggle_operator_mode().toggle_operator_mode(), s);
    }

    #[test]
    fn test_signed_sum_over_sequence() {
        let taps: [(bool, f64); 7] = [
            (false, 0.25),
            (false, 5.0),
            (true, 2.0),
            (false, 0.75),
            (true, 1.0),
            (true, 3.0),
            (false, 0.5),
        ];
        let mut s = AccumulatorState::new();
        let mut expected = 0.0;
        let mut subtracting = false;
        for (toggle_first, value) in taps {
            if toggle_first {
                s = s.toggle_operator_mode();
                subtracting = !subtracting;
            }
            s = s.apply_operand(value).unwrap();
            expected += if subtracting { -value } else { value };
        }
        assert_eq!(s.total, expected);
        assert_eq!(s.last_operand, Some(0.5));
    }

    #[test]
    fn test_reset_from_any_state() {
        let s = AccumulatorState::new()
            .apply_operand(4.0)
            .unwrap()
            .toggle_operator_mode()
            .apply_operand(0.25)
            .unwrap();
        assert_ne!(s, AccumulatorState::new());
        let r = s.reset();
        assert_eq!(r, AccumulatorState::new());
        assert_eq!(r.reset(), r);
    }

    #[test]
    fn test_rejects_invalid_operands() {
        let s = AccumulatorState::new().apply_operand(1.0).unwrap();
        for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(s.apply_operand(bad), Err(EngineError::InvalidOperand(_))),
                "accepted {bad}"
            );
        }
        // the original state is still usable
        assert_eq!(s.total, 1.0);
    }

    #[test]
    fn test_rejects_overflowing_total() {
        let s = AccumulatorState::new().apply_operand(f64::MAX).unwrap();
        assert_eq!(
            s.apply_operand(f64::MAX),
            Err(EngineError::InvalidOperand(f64::MAX))
        );
    }

    #[test]
    fn test_mode_symbol() {
        assert_eq!(OperatorMode::Add.symbol(), "+");
        assert_eq!(OperatorMode::Subtract.symbol(), "\u{2212}");
        assert_eq!(OperatorMode::Add.toggled(), OperatorMode::Subtract);
    }
}
