//! Card style as the rendering layer sees it: script fields merged over the
//! default card look.

use crate::card::{CardRecord, PropertyValue};
use crate::consts::{
    DEFAULT_BG_COLOR, DEFAULT_FONT_SIZE_BACK, DEFAULT_FONT_SIZE_FRONT, FIELD_BG_COLOR, FIELD_FONT_SIZE_BACK,
    FIELD_FONT_SIZE_FRONT,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// CSS color string.
    pub bg_color: String,
    /// Pixels.
    pub font_size_front: f64,
    /// Pixels.
    pub font_size_back: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            bg_color: DEFAULT_BG_COLOR.to_owned(),
            font_size_front: DEFAULT_FONT_SIZE_FRONT,
            font_size_back: DEFAULT_FONT_SIZE_BACK,
        }
    }
}

impl CardStyle {
    /// Merge the card's style fields over the defaults. A `bg_color` must be a
    /// string and a font size must coerce to a finite number, otherwise the
    /// default is used.
    #[must_use]
    pub fn resolve(card: &CardRecord) -> Self {
        let defaults = Self::default();
        Self {
            bg_color: card
                .get(FIELD_BG_COLOR)
                .and_then(PropertyValue::as_str)
                .map_or(defaults.bg_color, ToOwned::to_owned),
            font_size_front: font_size(card.get(FIELD_FONT_SIZE_FRONT), defaults.font_size_front),
            font_size_back: font_size(card.get(FIELD_FONT_SIZE_BACK), defaults.font_size_back),
        }
    }
}

fn font_size(value: Option<&PropertyValue>, default: f64) -> f64 {
    value
        .map(PropertyValue::to_number)
        .filter(|n| n.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "style_test.rs"]
mod tests;
