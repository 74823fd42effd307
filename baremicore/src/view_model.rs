//! Render-ready description of one frame
//!
//! Everything the renderer needs is derived here from the engine state and
//! the `(language, theme)` pair, so drawing code never branches on either.

use crate::engine::{AccumulatorState, OperatorMode};
use crate::format::format;
use crate::locale::{FontRoles, Language, TextDirection};
use crate::palette::{Gradient, Palette, ThemeMode};
use crate::presets::Preset;

/// Preset buttons per grid row.
pub const PRESETS_PER_ROW: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct PresetButton {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub title: &'static str,
    pub total: String,
    /// Prefix and formatted operand; `None` until something is applied.
    pub last_input: Option<(&'static str, String)>,
    pub clear_label: &'static str,
    pub language_toggle_label: &'static str,
    pub theme_toggle_label: &'static str,
    pub operator_mode: OperatorMode,
    pub operator_symbol: &'static str,
    /// Preset grid rows, each in visual order left to right on screen.
    /// Under RTL every row is mirrored, so reading starts at the right.
    pub rows: Vec<Vec<PresetButton>>,
    pub direction: TextDirection,
    pub fonts: FontRoles,
    pub palette: Palette,
    pub gradient: Gradient,
}

impl ViewModel {
    pub fn build(
        state: &AccumulatorState,
        language: Language,
        theme: ThemeMode,
        presets: &[Preset],
    ) -> Self {
        let profile = language.profile();
        let strings = language.strings();
        let direction = language.direction();

        let rows = presets
            .chunks(PRESETS_PER_ROW)
            .map(|chunk| {
                let mut row: Vec<PresetButton> = chunk
                    .iter()
                    .map(|p| PresetButton {
                        value: p.value,
                        label: p.label(profile),
                    })
                    .collect();
                if direction == TextDirection::RightToLeft {
                    row.reverse();
                }
                row
            })
            .collect();

        Self {
            title: strings.title,
            total: format(state.total, profile),
            last_input: state
                .last_operand
                .map(|v| (strings.last_input, format(v, profile))),
            clear_label: strings.clear,
            language_toggle_label: strings.toggle_language,
            theme_toggle_label: theme.toggle_label(),
            operator_mode: state.operator_mode,
            operator_symbol: state.operator_mode.symbol(),
            rows,
            direction,
            fonts: language.fonts(),
            palette: theme.palette(),
            gradient: theme.gradient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{default_presets, sanitize};

    fn row_values(vm: &ViewModel) -> Vec<Vec<f64>> {
        vm.rows
            .iter()
            .map(|row| row.iter().map(|b| b.value).collect())
            .collect()
    }

    #[test]
    fn test_english_light() {
        let state = AccumulatorState::new().apply_operand(0.25).unwrap();
        let vm = ViewModel::build(&state, Language::En, ThemeMode::Light, &default_presets());
        assert_eq!(vm.title, "Baremi");
        assert_eq!(vm.total, "0.25");
        assert_eq!(vm.last_input, Some(("Last input: ", "0.25".to_string())));
        assert_eq!(vm.language_toggle_label, "فا");
        assert_eq!(vm.theme_toggle_label, "🌙");
        assert_eq!(
            row_values(&vm),
            vec![vec![0.25, 0.5, 0.75, 1.0], vec![2.0, 3.0, 4.0, 5.0]]
        );
        assert_eq!(vm.rows[0][1].label, "0.50");
        assert_eq!(vm.direction, TextDirection::LeftToRight);
        assert_eq!(vm.palette, Palette::light());
    }

    #[test]
    fn test_persian_mirrors_each_row() {
        let vm = ViewModel::build(
            &AccumulatorState::new(),
            Language::Fa,
            ThemeMode::Dark,
            &default_presets(),
        );
        assert_eq!(vm.total, "۰");
        assert_eq!(vm.last_input, None);
        // smallest preset at the top right, rows keep their order
        assert_eq!(
            row_values(&vm),
            vec![vec![1.0, 0.75, 0.5, 0.25], vec![5.0, 4.0, 3.0, 2.0]]
        );
        assert_eq!(vm.rows[0][3].label, "۰٫۲۵");
        assert_eq!(vm.rows[0][2].label, "۰٫۵");
        assert_eq!(vm.clear_label, "پاک");
        assert_eq!(vm.fonts.operator, "ShabnamBold");
        assert_eq!(vm.theme_toggle_label, "☀");
    }

    #[test]
    fn test_operator_symbol_follows_mode() {
        let state = AccumulatorState::new().toggle_operator_mode();
        let vm = ViewModel::build(&state, Language::En, ThemeMode::Light, &[]);
        assert_eq!(vm.operator_mode, OperatorMode::Subtract);
        assert_eq!(vm.operator_symbol, "\u{2212}");
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_partial_last_row() {
        let (presets, _) = sanitize(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let en = ViewModel::build(&AccumulatorState::new(), Language::En, ThemeMode::Light, &presets);
        assert_eq!(row_values(&en), vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0]]);
        let fa = ViewModel::build(&AccumulatorState::new(), Language::Fa, ThemeMode::Light, &presets);
        assert_eq!(row_values(&fa), vec![vec![4.0, 3.0, 2.0, 1.0], vec![6.0, 5.0]]);
    }
}
