//! Card data model: property values, ordered property maps, card records and
//! positioned cards.
//!
//! Values are serialized the way the rendering layer expects them: strings as
//! JSON strings, numbers as JSON numbers, and each card as a JSON object whose
//! keys keep script order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::consts::{FIELD_BACK, FIELD_FRONT, FIELD_X, FIELD_Y};
use crate::lexer::is_space;

/// A parsed property value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    /// Unparsable numerals are kept as NaN, which serializes as `null`.
    Number(f64),
}

impl PropertyValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(_) => None,
        }
    }

    /// Empty strings, zero and NaN are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// Numeric coercion with script semantics: strings are trimmed, an empty
    /// string is zero, and anything unparsable is NaN.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::String(s) => coerce_str(s),
        }
    }
}

fn coerce_str(s: &str) -> f64 {
    let t = s.trim_matches(is_space);
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        #[allow(clippy::cast_precision_loss)]
        let n = u64::from_str_radix(t.get(2..).unwrap_or_default(), radix).map_or(f64::NAN, |n| n as f64);
        return n;
    }
    // Rust accepts spellings like `inf` and `nan` that scripts do not.
    if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Insertion-ordered field map. Re-inserting a key replaces its value but
/// keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) -> Option<PropertyValue> {
        let key = key.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, PropertyValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A property map that carries truthy `front` and `back` fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct CardRecord {
    props: PropertyMap,
}

// Fallback for accessors; a constructed record always has both fields.
static EMPTY: PropertyValue = PropertyValue::String(String::new());

impl CardRecord {
    /// Validate a parsed map. On failure returns the first mandatory field
    /// that is missing or falsy.
    ///
    /// # Errors
    ///
    /// Returns `"front"` or `"back"` when that field is absent or falsy.
    pub fn from_properties(props: PropertyMap) -> Result<Self, &'static str> {
        for field in [FIELD_FRONT, FIELD_BACK] {
            if !props.get(field).is_some_and(PropertyValue::is_truthy) {
                return Err(field);
            }
        }
        Ok(Self { props })
    }

    #[must_use]
    pub fn front(&self) -> &PropertyValue {
        self.props.get(FIELD_FRONT).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn back(&self) -> &PropertyValue {
        self.props.get(FIELD_BACK).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.props.get(key)
    }

    /// The explicit `x`/`y` pair, when the script supplies both.
    #[must_use]
    pub fn position(&self) -> Option<(&PropertyValue, &PropertyValue)> {
        Some((self.props.get(FIELD_X)?, self.props.get(FIELD_Y)?))
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.props
    }

    #[must_use]
    pub fn into_properties(self) -> PropertyMap {
        self.props
    }
}

/// How a positioned card got its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Taken from the script's `x` and `y`.
    Manual,
    /// Assigned a grid slot by the layout engine.
    Auto,
}

/// A card with resolved board coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCard {
    pub card: CardRecord,
    pub x: f64,
    pub y: f64,
    /// Position of the card in the layout input.
    pub index: usize,
    pub placement: Placement,
}

/// Serializes as the card's fields with `x`/`y` replaced in place, or
/// appended when the script did not set them.
impl Serialize for PositionedCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let props = self.card.properties();
        let extra = [FIELD_X, FIELD_Y].into_iter().filter(|k| !props.contains_key(k)).count();
        let mut map = serializer.serialize_map(Some(props.len() + extra))?;
        for (k, v) in props.iter() {
            match k {
                FIELD_X => map.serialize_entry(k, &self.x)?,
                FIELD_Y => map.serialize_entry(k, &self.y)?,
                _ => map.serialize_entry(k, v)?,
            }
        }
        if !props.contains_key(FIELD_X) {
            map.serialize_entry(FIELD_X, &self.x)?;
        }
        if !props.contains_key(FIELD_Y) {
            map.serialize_entry(FIELD_Y, &self.y)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;
