//! Card assembly: parse each block body and keep the complete ones.

use crate::card::CardRecord;
use crate::config::EscapeMode;
use crate::parse::parse_properties_with;

/// Assemble cards with [`EscapeMode::Decode`].
#[must_use]
pub fn assemble_cards<S: AsRef<str>>(bodies: &[S]) -> Vec<CardRecord> {
    assemble_cards_with(bodies, EscapeMode::Decode)
}

/// Parse every body and keep those with truthy `front` and `back`, in order.
/// Incomplete blocks are dropped without error.
#[must_use]
pub fn assemble_cards_with<S: AsRef<str>>(bodies: &[S], escapes: EscapeMode) -> Vec<CardRecord> {
    let mut cards = Vec::with_capacity(bodies.len());

    for (block, body) in bodies.iter().enumerate() {
        let props = parse_properties_with(body.as_ref(), escapes);
        match CardRecord::from_properties(props) {
            Ok(card) => cards.push(card),
            Err(field) => tracing::debug!(block, field, "dropping flash block without mandatory field"),
        }
    }

    tracing::debug!(blocks = bodies.len(), cards = cards.len(), "assembled cards");
    cards
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
