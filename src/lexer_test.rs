use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenize_simple_block() {
    let src = r#"flash({ front : "Hi", back: 2 })"#;
    assert_eq!(
        kinds(src),
        vec![
            TokenKind::CallKeyword,
            TokenKind::LParen,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Str,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Number,
            TokenKind::RBrace,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn tokenize_spans_cover_source_text() {
    let src = "front: `a\nb` x: 12.5";
    let tokens = tokenize(src);
    let texts: Vec<&str> = tokens.iter().map(|t| t.span.slice(src)).collect();
    assert_eq!(texts, vec!["front", ":", "`a\nb`", "x", ":", "12.5"]);
}

#[test]
fn tokenize_braces_inside_literals_are_hidden() {
    let src = r#"{ "}" `{` }"#;
    assert_eq!(
        kinds(src),
        vec![TokenKind::LBrace, TokenKind::Str, TokenKind::Backtick, TokenKind::RBrace]
    );
}

#[test]
fn tokenize_flash_prefix_is_plain_ident() {
    assert_eq!(kinds("myflash flash flashy"), vec![TokenKind::Ident, TokenKind::CallKeyword, TokenKind::Ident]);
}

#[test]
fn tokenize_unterminated_quote_is_punct() {
    let src = r#"a "b"#;
    assert_eq!(kinds(src), vec![TokenKind::Ident, TokenKind::Punct('"'), TokenKind::Ident]);
}

#[test]
fn tokenize_empty_source() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \n\t ").is_empty());
}

#[test]
fn scanner_quoted_handles_escaped_quote() {
    let src = r#""say \"hi\"" rest"#;
    let mut sc = Scanner::new(src);
    let span = sc.quoted().unwrap();
    assert_eq!(span.slice(src), r#"say \"hi\""#);
    assert_eq!(sc.rest(), " rest");
}

#[test]
fn scanner_quoted_rejects_escaped_newline() {
    let src = "\"a\\\nb\"";
    let mut sc = Scanner::new(src);
    assert!(sc.quoted().is_none());
    assert_eq!(sc.pos(), 0);
}

#[test]
fn scanner_quoted_allows_raw_newline() {
    let src = "\"a\nb\"";
    let mut sc = Scanner::new(src);
    assert_eq!(sc.quoted().unwrap().slice(src), "a\nb");
}

#[test]
fn scanner_backtick_is_lazy() {
    let src = "`one` `two`";
    let mut sc = Scanner::new(src);
    assert_eq!(sc.backtick().unwrap().slice(src), "one");
    assert_eq!(sc.rest(), " `two`");
}

#[test]
fn scanner_backtick_unterminated_restores_position() {
    let mut sc = Scanner::new("`never closed");
    assert!(sc.backtick().is_none());
    assert_eq!(sc.pos(), 0);
}

#[test]
fn scanner_number_takes_digits_and_dots() {
    let src = "1.2.3abc";
    let mut sc = Scanner::new(src);
    assert_eq!(sc.number().unwrap().slice(src), "1.2.3");
    assert!(sc.number().is_none());
}

#[test]
fn scanner_skip_space_handles_unicode_whitespace() {
    let mut sc = Scanner::new("\u{a0}\u{feff}\t x");
    sc.skip_space();
    assert_eq!(sc.peek(), Some('x'));
}

#[test]
fn scanner_bump_steps_over_multibyte_chars() {
    let mut sc = Scanner::new("éa");
    assert_eq!(sc.bump(), Some('é'));
    assert_eq!(sc.pos(), 2);
    assert_eq!(sc.bump(), Some('a'));
    assert!(sc.is_eof());
}

#[test]
fn next_line_char_is_not_space() {
    assert!(!is_space('\u{85}'));
    let mut sc = Scanner::new("\u{85}x");
    sc.skip_space();
    assert_eq!(sc.pos(), 0);
}
