//! Call-block extraction: finds `flash({ ... })` invocations and returns
//! their property bodies in source order.

use crate::config::ExtractMode;
use crate::lexer::{CALL_KEYWORD, Scanner, Token, TokenKind, is_space, tokenize};

/// Extract block bodies using [`ExtractMode::Compat`].
#[must_use]
pub fn extract_call_blocks(script: &str) -> Vec<&str> {
    extract_call_blocks_with(script, ExtractMode::Compat)
}

/// Extract the body of every `flash({ ... })` block, left to right.
///
/// Bodies are trimmed of surrounding whitespace. A script with no complete
/// block yields an empty list.
#[must_use]
pub fn extract_call_blocks_with(script: &str, mode: ExtractMode) -> Vec<&str> {
    let blocks = match mode {
        ExtractMode::Compat => extract_compat(script),
        ExtractMode::Balanced => extract_balanced(script),
    };
    tracing::debug!(?mode, blocks = blocks.len(), "extracted flash blocks");
    blocks
}

/// `flash` is matched as plain text and the body runs to the first `}` that
/// is followed by `)`, regardless of nesting or quoting.
fn extract_compat(script: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(offset) = script.get(from..).and_then(|rest| rest.find(CALL_KEYWORD)) {
        let start = from + offset;
        match compat_block_at(script, start) {
            Some((body, end)) => {
                blocks.push(body);
                from = end;
            }
            // `f` is one byte, so this stays on a char boundary.
            None => from = start + 1,
        }
    }

    blocks
}

/// Match one block whose keyword starts at `start`. Returns the body and the
/// offset just past the closing `)`.
fn compat_block_at(script: &str, start: usize) -> Option<(&str, usize)> {
    let mut sc = Scanner::at(script, start + CALL_KEYWORD.len());
    sc.skip_space();
    if !sc.eat('(') {
        return None;
    }
    sc.skip_space();
    if !sc.eat('{') {
        return None;
    }
    sc.skip_space();
    let body_start = sc.pos();

    let mut search = body_start;
    while let Some(offset) = script.get(search..).and_then(|rest| rest.find('}')) {
        let close = search + offset;
        let mut after = Scanner::at(script, close + 1);
        after.skip_space();
        if after.eat(')') {
            let body = script.get(body_start..close).unwrap_or_default().trim_end_matches(is_space);
            return Some((body, after.pos()));
        }
        search = close + 1;
    }

    None
}

/// Walk the token stream, matching braces by depth. Braces inside string and
/// backtick literals never affect the depth.
fn extract_balanced(script: &str) -> Vec<&str> {
    let tokens = tokenize(script);
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match balanced_block_at(script, &tokens, i) {
            Some((body, next)) => {
                blocks.push(body);
                i = next;
            }
            None => i += 1,
        }
    }

    blocks
}

/// Match `flash ( { ... } )` starting at token `i`. Returns the body and the
/// index of the first token after the closing `)`.
fn balanced_block_at<'a>(script: &'a str, tokens: &[Token], i: usize) -> Option<(&'a str, usize)> {
    let [call, open_paren, open_brace] = tokens.get(i..i + 3)? else {
        return None;
    };
    if call.kind != TokenKind::CallKeyword || open_paren.kind != TokenKind::LParen || open_brace.kind != TokenKind::LBrace {
        return None;
    }

    let mut depth = 0usize;
    for (j, tok) in tokens.iter().enumerate().skip(i + 2) {
        match tok.kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    if tokens.get(j + 1).map(|t| t.kind) != Some(TokenKind::RParen) {
                        tracing::trace!(offset = tok.span.start, "flash block closed without `)`");
                        return None;
                    }
                    let body = script
                        .get(open_brace.span.end..tok.span.start)
                        .unwrap_or_default()
                        .trim_matches(is_space);
                    return Some((body, j + 2));
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
