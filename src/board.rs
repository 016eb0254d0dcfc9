//! Board state: positioned cards owned by the caller, moved by drag deltas.
//!
//! The host UI reports gestures as `(dx, dy)` deltas against a card's
//! position in [`Board::cards`]. Each board is an ordinary value; there is no
//! process-wide store of positions.

use crate::Compiler;
use crate::card::PositionedCard;
use crate::config::CompilerConfig;
use crate::error::KardError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cards: Vec<PositionedCard>,
}

impl Board {
    #[must_use]
    pub fn new(cards: Vec<PositionedCard>) -> Self {
        Self { cards }
    }

    /// Compile and lay out `script` into a fresh board.
    #[must_use]
    pub fn from_script(script: &str, config: &CompilerConfig) -> Self {
        Self::new(Compiler::new(*config).board(script))
    }

    #[must_use]
    pub fn cards(&self) -> &[PositionedCard] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<PositionedCard> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PositionedCard> {
        self.cards.get(index)
    }

    /// Move the card at `index` by `(dx, dy)` and return its new position.
    ///
    /// # Errors
    ///
    /// Returns [`KardError::NoSuchCard`] if `index` is out of range.
    pub fn drag(&mut self, index: usize, dx: f64, dy: f64) -> Result<(f64, f64), KardError> {
        let len = self.cards.len();
        let card = self.cards.get_mut(index).ok_or(KardError::NoSuchCard { index, len })?;
        card.x += dx;
        card.y += dy;
        tracing::trace!(index, x = card.x, y = card.y, "card dragged");
        Ok((card.x, card.y))
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
