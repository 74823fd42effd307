//! The fixed set of tappable operand magnitudes

use crate::format::{format_label, LocaleProfile};

pub const DEFAULT_PRESETS: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 2.0, 3.0, 4.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub value: f64,
}

impl Preset {
    pub fn label(&self, profile: LocaleProfile) -> String {
        format_label(self.value, profile)
    }

    /// Presets must be usable as engine operands.
    pub fn is_valid(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }
}

pub fn default_presets() -> Vec<Preset> {
    DEFAULT_PRESETS.iter().map(|&value| Preset { value }).collect()
}

/// Keep the valid entries of `values`; fall back to the defaults if none
/// survive. Returns the presets and the rejected values.
pub fn sanitize(values: &[f64]) -> (Vec<Preset>, Vec<f64>) {
    let (good, bad): (Vec<f64>, Vec<f64>) = values.iter().partition(|&&v| Preset::is_valid(v));
    if good.is_empty() {
        return (default_presets(), bad);
    }
    (good.into_iter().map(|value| Preset { value }).collect(), bad)
}
