use baremicore::presets::default_presets;
use baremicore::{format, AccumulatorState, Language, LocaleProfile, OperatorMode, ThemeMode, ViewModel};

#[test]
fn add_add_toggle_subtract_reset() {
    let s = AccumulatorState::new();

    let s = s.apply_operand(2.0).unwrap();
    assert_eq!(s.total, 2.0);

    let s = s.apply_operand(3.0).unwrap();
    assert_eq!(s.total, 5.0);

    let s = s.toggle_operator_mode();
    assert_eq!(s.operator_mode, OperatorMode::Subtract);

    let s = s.apply_operand(1.0).unwrap();
    assert_eq!(s.total, 4.0);
    assert_eq!(s.last_operand, Some(1.0));

    let s = s.reset();
    assert_eq!(s.total, 0.0);
    assert_eq!(s.operator_mode, OperatorMode::Add);
    assert_eq!(s.last_operand, None);
}

#[test]
fn formatting_examples() {
    assert_eq!(format(5.0, LocaleProfile::Default), "5");
    assert_eq!(format(0.25, LocaleProfile::Default), "0.25");
    assert_eq!(format(5.0, LocaleProfile::Persian), "۵");
    assert_eq!(format(0.25, LocaleProfile::Persian), "۰٫۲۵");
}

#[test]
fn tapping_every_preset_in_both_languages() {
    let presets = default_presets();
    let mut s = AccumulatorState::new();
    for p in &presets {
        s = s.apply_operand(p.value).unwrap();
    }
    // 0.25 + 0.5 + 0.75 + 1 + 2 + 3 + 4 + 5
    assert_eq!(s.total, 16.5);

    let en = ViewModel::build(&s, Language::En, ThemeMode::Light, &presets);
    assert_eq!(en.total, "16.50");
    assert_eq!(en.last_input, Some(("Last input: ", "5".to_string())));

    let fa = ViewModel::build(&s, Language::Fa, ThemeMode::Dark, &presets);
    assert_eq!(fa.total, "۱۶٫۵۰");
    assert_eq!(fa.last_input, Some(("آخرین ورودی: ", "۵".to_string())));

    let cleared = ViewModel::build(&s.reset(), Language::Fa, ThemeMode::Dark, &presets);
    assert_eq!(cleared.last_input, None);
    assert_eq!(cleared.total, "۰");
}

#[test]
fn rejected_tap_keeps_previous_state() {
    let before = AccumulatorState::new().apply_operand(3.0).unwrap();
    let after = before.apply_operand(-1.0).unwrap_or(before);
    assert_eq!(after, before);
}
