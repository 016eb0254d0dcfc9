//! Compiler configuration parsed from environment variables.

use crate::consts::{GRID_COLUMNS, GRID_SPACING_X, GRID_SPACING_Y, START_X, START_Y};
use crate::error::KardError;

/// How `flash({ ... })` blocks are located in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Body ends at the first `}` followed by `)`, wherever it appears.
    #[default]
    Compat,
    /// Tokenize first; braces are matched by depth and ignored inside literals.
    Balanced,
}

/// How backslash escapes in double-quoted values are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Decode `\n`, `\"`, `\uXXXX` and friends.
    #[default]
    Decode,
    /// Keep the quoted text exactly as written.
    Raw,
}

/// Grid used for cards without explicit coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub start_x: f64,
    pub start_y: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    /// Always at least 1.
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { start_x: START_X, start_y: START_Y, spacing_x: GRID_SPACING_X, spacing_y: GRID_SPACING_Y, columns: GRID_COLUMNS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompilerConfig {
    pub extract_mode: ExtractMode,
    pub escapes: EscapeMode,
    pub layout: LayoutConfig,
}

impl CompilerConfig {
    /// Build typed compiler config from environment variables.
    ///
    /// Optional:
    /// - `KARD_EXTRACT_MODE`: `compat` (default) or `balanced`
    /// - `KARD_ESCAPES`: `decode` (default) or `raw`
    /// - `KARD_LAYOUT_COLUMNS`: default 5, must be at least 1
    /// - `KARD_LAYOUT_START_X` / `KARD_LAYOUT_START_Y`: default 50
    /// - `KARD_LAYOUT_SPACING_X` / `KARD_LAYOUT_SPACING_Y`: default 350 / 450
    ///
    /// # Errors
    ///
    /// Returns [`KardError::Config`] for unknown mode names or unparsable numbers.
    pub fn from_env() -> Result<Self, KardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CompilerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`CompilerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, KardError> {
        let extract_mode = parse_extract_mode(lookup("KARD_EXTRACT_MODE").as_deref())?;
        let escapes = parse_escape_mode(lookup("KARD_ESCAPES").as_deref())?;

        let columns = parse_or("KARD_LAYOUT_COLUMNS", lookup("KARD_LAYOUT_COLUMNS"), GRID_COLUMNS)?;
        if columns == 0 {
            return Err(KardError::Config("KARD_LAYOUT_COLUMNS must be at least 1".into()));
        }
        let layout = LayoutConfig {
            start_x: parse_or("KARD_LAYOUT_START_X", lookup("KARD_LAYOUT_START_X"), START_X)?,
            start_y: parse_or("KARD_LAYOUT_START_Y", lookup("KARD_LAYOUT_START_Y"), START_Y)?,
            spacing_x: parse_or("KARD_LAYOUT_SPACING_X", lookup("KARD_LAYOUT_SPACING_X"), GRID_SPACING_X)?,
            spacing_y: parse_or("KARD_LAYOUT_SPACING_Y", lookup("KARD_LAYOUT_SPACING_Y"), GRID_SPACING_Y)?,
            columns,
        };

        Ok(Self { extract_mode, escapes, layout })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, KardError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| KardError::Config(format!("{key}: cannot parse '{value}'"))),
    }
}

/// Parse an extraction mode name; `None` selects the default.
///
/// # Errors
///
/// Returns [`KardError::Config`] for anything but `compat` or `balanced`.
pub fn parse_extract_mode(raw: Option<&str>) -> Result<ExtractMode, KardError> {
    match raw.unwrap_or("compat") {
        "compat" => Ok(ExtractMode::Compat),
        "balanced" => Ok(ExtractMode::Balanced),
        other => Err(KardError::Config(format!(
            "unsupported extract mode '{other}' (expected 'compat' or 'balanced')"
        ))),
    }
}

/// Parse an escape mode name; `None` selects the default.
///
/// # Errors
///
/// Returns [`KardError::Config`] for anything but `decode` or `raw`.
pub fn parse_escape_mode(raw: Option<&str>) -> Result<EscapeMode, KardError> {
    match raw.unwrap_or("decode") {
        "decode" => Ok(EscapeMode::Decode),
        "raw" => Ok(EscapeMode::Raw),
        other => Err(KardError::Config(format!("unsupported escape mode '{other}' (expected 'decode' or 'raw')"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
