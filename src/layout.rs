//! Layout engine: assigns board coordinates to assembled cards.
//!
//! Cards that carry both `x` and `y` keep them. Every other card gets the next
//! slot of a fixed grid, filled row by row. The output lists the manually
//! placed cards first and the grid-placed cards after them, each group in its
//! input order. When both groups are present this is not the declaration order
//! of the script.

use crate::card::{CardRecord, Placement, PositionedCard};
use crate::config::LayoutConfig;

/// Lay out cards on the default grid.
#[must_use]
pub fn layout(cards: Vec<CardRecord>) -> Vec<PositionedCard> {
    layout_with(cards, &LayoutConfig::default())
}

/// Lay out cards on the grid described by `config`.
#[must_use]
pub fn layout_with(cards: Vec<CardRecord>, config: &LayoutConfig) -> Vec<PositionedCard> {
    let mut manual = Vec::new();
    let mut auto = Vec::new();

    for (index, card) in cards.into_iter().enumerate() {
        let explicit = card.position().map(|(x, y)| (x.to_number(), y.to_number()));
        match explicit {
            Some((x, y)) => manual.push(PositionedCard { card, x, y, index, placement: Placement::Manual }),
            None => auto.push((index, card)),
        }
    }

    tracing::debug!(manual = manual.len(), auto = auto.len(), "laying out cards");

    let placed = auto.into_iter().enumerate().map(|(slot, (index, card))| {
        let (x, y) = grid_slot(slot, config);
        PositionedCard { card, x, y, index, placement: Placement::Auto }
    });

    manual.extend(placed);
    manual
}

/// Coordinates of the `slot`-th grid cell (0-based, row-major).
#[must_use]
pub fn grid_slot(slot: usize, config: &LayoutConfig) -> (f64, f64) {
    let columns = config.columns.max(1);
    let row = slot / columns;
    let col = slot % columns;

    #[allow(clippy::cast_precision_loss)]
    let (row, col) = (row as f64, col as f64);
    (config.start_x + col * config.spacing_x, config.start_y + row * config.spacing_y)
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
