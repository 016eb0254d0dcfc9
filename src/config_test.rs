use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = CompilerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, CompilerConfig::default());
    assert_eq!(cfg.extract_mode, ExtractMode::Compat);
    assert_eq!(cfg.escapes, EscapeMode::Decode);
    assert_eq!(cfg.layout.columns, 5);
    assert!((cfg.layout.start_x - 50.0).abs() < f64::EPSILON);
    assert!((cfg.layout.spacing_y - 450.0).abs() < f64::EPSILON);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = CompilerConfig::from_lookup(lookup_from(&[
        ("KARD_EXTRACT_MODE", "balanced"),
        ("KARD_ESCAPES", "raw"),
        ("KARD_LAYOUT_COLUMNS", "3"),
        ("KARD_LAYOUT_START_X", "0"),
        ("KARD_LAYOUT_START_Y", " 10.5 "),
        ("KARD_LAYOUT_SPACING_X", "100"),
        ("KARD_LAYOUT_SPACING_Y", "200"),
    ]))
    .unwrap();
    assert_eq!(cfg.extract_mode, ExtractMode::Balanced);
    assert_eq!(cfg.escapes, EscapeMode::Raw);
    assert_eq!(
        cfg.layout,
        LayoutConfig { start_x: 0.0, start_y: 10.5, spacing_x: 100.0, spacing_y: 200.0, columns: 3 }
    );
}

#[test]
fn from_lookup_unknown_extract_mode_errors() {
    let err = CompilerConfig::from_lookup(lookup_from(&[("KARD_EXTRACT_MODE", "regex")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("unsupported extract mode 'regex'"));
}

#[test]
fn from_lookup_unknown_escape_mode_errors() {
    let err = CompilerConfig::from_lookup(lookup_from(&[("KARD_ESCAPES", "none")])).unwrap_err();
    assert!(matches!(err, KardError::Config(_)));
}

#[test]
fn from_lookup_rejects_zero_columns() {
    let err = CompilerConfig::from_lookup(lookup_from(&[("KARD_LAYOUT_COLUMNS", "0")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("at least 1"));
}

#[test]
fn from_lookup_rejects_unparsable_number() {
    let err = CompilerConfig::from_lookup(lookup_from(&[("KARD_LAYOUT_SPACING_X", "wide")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("KARD_LAYOUT_SPACING_X"));
    assert!(err.contains("wide"));
}
