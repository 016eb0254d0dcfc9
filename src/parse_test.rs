use super::*;

fn string(props: &PropertyMap, key: &str) -> Option<String> {
    props.get(key).and_then(PropertyValue::as_str).map(ToOwned::to_owned)
}

#[test]
fn parse_quoted_and_numeric_fields() {
    let props = parse_properties(r#"front : "Hello!", back : "World!", fontSize_front: 12.5"#);
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["front", "back", "fontSize_front"]);
    assert_eq!(string(&props, "front").as_deref(), Some("Hello!"));
    assert_eq!(props.get("fontSize_front"), Some(&PropertyValue::Number(12.5)));
}

#[test]
fn parse_number_is_not_a_string() {
    let props = parse_properties("x : 12.5");
    assert_eq!(props.get("x").and_then(PropertyValue::as_number), Some(12.5));
    assert!(props.get("x").and_then(PropertyValue::as_str).is_none());
}

#[test]
fn parse_backtick_normalizes_lines() {
    let props = parse_properties("front : `Line one\n\n      Line two   \n`");
    assert_eq!(string(&props, "front").as_deref(), Some("Line one\nLine two"));
}

#[test]
fn parse_backtick_keeps_quotes_and_braces() {
    let props = parse_properties(r#"code: `let s = "{x}";`"#);
    assert_eq!(string(&props, "code").as_deref(), Some(r#"let s = "{x}";"#));
}

#[test]
fn parse_empty_backtick_is_empty_string() {
    let props = parse_properties("front: ``");
    assert_eq!(string(&props, "front").as_deref(), Some(""));
}

#[test]
fn parse_quoted_decodes_escapes() {
    let props = parse_properties(r#"front: "say \"hi\"\tnow", back: "a\\b", code: "é 😀""#);
    assert_eq!(string(&props, "front").as_deref(), Some("say \"hi\"\tnow"));
    assert_eq!(string(&props, "back").as_deref(), Some("a\\b"));
    assert_eq!(string(&props, "code").as_deref(), Some("é 😀"));
}

#[test]
fn parse_quoted_raw_mode_keeps_backslashes() {
    let props = parse_properties_with(r#"equationFront: "\frac{a}{b}""#, EscapeMode::Raw);
    assert_eq!(string(&props, "equationFront").as_deref(), Some(r"\frac{a}{b}"));
}

#[test]
fn parse_quoted_multiline_is_normalized() {
    let props = parse_properties("back: \"  first\n\n   second  \"");
    assert_eq!(string(&props, "back").as_deref(), Some("first\nsecond"));
}

#[test]
fn parse_escaped_newline_survives_line_normalization() {
    let props = parse_properties(r#"front: "a\nb""#);
    assert_eq!(string(&props, "front").as_deref(), Some("a\nb"));
}

#[test]
fn parse_separators_are_free_form() {
    let props = parse_properties("front:\"a\"\n back:\"b\" ;; x:1 y :2");
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["front", "back", "x", "y"]);
}

#[test]
fn parse_duplicate_key_last_wins() {
    let props = parse_properties(r#"front: "first", back: "b", front: "second""#);
    assert_eq!(string(&props, "front").as_deref(), Some("second"));
    assert_eq!(props.len(), 2);
}

#[test]
fn parse_skips_malformed_fragments() {
    let props = parse_properties("front: 'single', bad: , back: \"ok\", flag: true");
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["back"]);
}

#[test]
fn parse_matches_keys_inside_unrecognised_text() {
    // Single-quoted text is not a literal, so the scan walks into it.
    let props = parse_properties("note: 'see x: 5'");
    assert_eq!(props.get("x"), Some(&PropertyValue::Number(5.0)));
}

#[test]
fn parse_malformed_numeral_is_nan() {
    let props = parse_properties("x: 1.2.3, y: .");
    assert!(props.get("x").and_then(PropertyValue::as_number).is_some_and(f64::is_nan));
    assert!(props.get("y").and_then(PropertyValue::as_number).is_some_and(f64::is_nan));
}

#[test]
fn parse_number_edge_forms() {
    assert!((parse_number("5.") - 5.0).abs() < f64::EPSILON);
    assert!((parse_number(".5") - 0.5).abs() < f64::EPSILON);
    assert!((parse_number("007") - 7.0).abs() < f64::EPSILON);
}

#[test]
fn parse_empty_body() {
    assert!(parse_properties("").is_empty());
    assert!(parse_properties("   \n ").is_empty());
}

#[test]
fn decode_escapes_unknown_and_trailing() {
    assert_eq!(decode_escapes(r"\q"), "q");
    assert_eq!(decode_escapes("end\\"), "end\\");
    assert_eq!(decode_escapes(r"\uZZZZ"), "uZZZZ");
    assert_eq!(decode_escapes(r"\ud800"), "\u{fffd}");
}

#[test]
fn decode_escapes_hex_pairs() {
    assert_eq!(decode_escapes(r"\x41\x62"), "Ab");
    assert_eq!(decode_escapes(r"\x4"), "x4");
    assert_eq!(decode_escapes(r"\xZZ"), "xZZ");
}

#[test]
fn parse_next_line_char_is_not_whitespace() {
    assert!(parse_properties("front\u{85}: \"a\"").is_empty());
    let props = parse_properties("front: `\u{85}a\u{85}`");
    assert_eq!(string(&props, "front").as_deref(), Some("\u{85}a\u{85}"));
}
