//! Property parser: turns one block body into an ordered [`PropertyMap`].
//!
//! At every offset the parser tries `key : value` with the value forms in a
//! fixed priority: backtick literal, then double-quoted literal, then numeral. Text
//! that matches none of them is skipped one character at a time, so
//! separators are free-form and malformed fragments simply vanish.

use crate::card::{PropertyMap, PropertyValue};
use crate::config::EscapeMode;
use crate::lexer::{Scanner, is_space};

/// Parse a body with [`EscapeMode::Decode`].
#[must_use]
pub fn parse_properties(body: &str) -> PropertyMap {
    parse_properties_with(body, EscapeMode::Decode)
}

/// Parse a body into properties. Later duplicates overwrite earlier ones.
#[must_use]
pub fn parse_properties_with(body: &str, escapes: EscapeMode) -> PropertyMap {
    let mut props = PropertyMap::new();
    let mut sc = Scanner::new(body);

    while !sc.is_eof() {
        let start = sc.pos();
        if let Some((key, value)) = property_at(&mut sc, escapes) {
            props.insert(key, value);
        } else {
            sc.set_pos(start);
            sc.bump();
        }
    }

    props
}

/// Try one `key : value` match at the scanner position.
fn property_at<'a>(sc: &mut Scanner<'a>, escapes: EscapeMode) -> Option<(&'a str, PropertyValue)> {
    let src = sc.source();
    let key = sc.word()?.slice(src);
    sc.skip_space();
    if !sc.eat(':') {
        return None;
    }
    sc.skip_space();

    if let Some(span) = sc.backtick() {
        return Some((key, PropertyValue::String(normalize_lines(span.slice(src)))));
    }
    if let Some(span) = sc.quoted() {
        let text = normalize_lines(span.slice(src));
        let text = match escapes {
            EscapeMode::Decode => decode_escapes(&text),
            EscapeMode::Raw => text,
        };
        return Some((key, PropertyValue::String(text)));
    }
    if let Some(span) = sc.number() {
        return Some((key, PropertyValue::Number(parse_number(span.slice(src)))));
    }

    tracing::trace!(key, "skipping property without a recognised value");
    None
}

/// Trim every line, drop blank ones and rejoin with `\n`.
#[must_use]
pub fn normalize_lines(raw: &str) -> String {
    raw.split('\n')
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numeral text (digits and dots) to a number; malformed runs such as `1.2.3`
/// become NaN.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(f64::NAN)
}

/// Decode backslash escapes. Unknown escapes decode to the escaped character.
#[must_use]
pub fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => match take_hex(&mut chars, 2).and_then(char::from_u32) {
                Some(decoded) => out.push(decoded),
                None => out.push('x'),
            },
            Some('u') => match take_hex(&mut chars, 4) {
                Some(unit) => out.push(decode_utf16_unit(unit, &mut chars)),
                None => out.push('u'),
            },
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Consume `len` hex digits, or nothing if they are not all present.
fn take_hex(chars: &mut std::str::Chars<'_>, len: usize) -> Option<u32> {
    let digits = chars.as_str().get(..len)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let Ok(unit) = u32::from_str_radix(digits, 16) else {
        return None;
    };
    *chars = chars.as_str().get(len..).unwrap_or_default().chars();
    Some(unit)
}

/// Resolve a UTF-16 code unit, pairing a high surrogate with a following
/// `\uXXXX` low surrogate. Lone surrogates become U+FFFD.
fn decode_utf16_unit(unit: u32, chars: &mut std::str::Chars<'_>) -> char {
    if (0xD800..0xDC00).contains(&unit) {
        let rest = chars.as_str();
        if let Some(hex) = rest.strip_prefix("\\u") {
            let mut lookahead = hex.chars();
            if let Some(low) = take_hex(&mut lookahead, 4) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = lookahead;
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
                }
            }
        }
    }
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
