//! Compiler for KardScript, the `flash({ ... })` flashcard syntax.
//!
//! The crate turns raw script text into an ordered list of [`CardRecord`]s and
//! assigns board coordinates to the cards the author did not place. It does no
//! I/O of its own beyond the [`compile_file`] convenience; rendering, drag
//! gestures and the editor live in the host application, which consumes the
//! card list and feeds back drag deltas through [`board::Board`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`lexer`] | Tokens, spans and the literal scanners |
//! | [`extract`] | Finds `flash({ ... })` blocks and isolates their bodies |
//! | [`parse`] | Parses one body into an ordered [`PropertyMap`] |
//! | [`card`] | Property values, card records and positioned cards |
//! | [`assemble`] | Keeps bodies that carry both `front` and `back` |
//! | [`layout`] | Grid placement for unpositioned cards |
//! | [`board`] | Owned board state that applies drag deltas |
//! | [`style`] | Consumer-side style defaults |
//! | [`config`] | Typed configuration loaded from the environment |
//! | [`consts`] | Layout and style defaults |
//! | [`error`] | Crate error type |

pub mod assemble;
pub mod board;
pub mod card;
pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod layout;
pub mod lexer;
pub mod parse;
pub mod style;

use std::path::Path;

pub use card::{CardRecord, PositionedCard, PropertyMap, PropertyValue};
pub use config::{CompilerConfig, EscapeMode, ExtractMode, LayoutConfig};
pub use error::KardError;

/// Runs the full pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    #[must_use]
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile script text into card records, in declaration order.
    #[must_use]
    pub fn cards(&self, script: &str) -> Vec<CardRecord> {
        let bodies = extract::extract_call_blocks_with(script, self.config.extract_mode);
        assemble::assemble_cards_with(&bodies, self.config.escapes)
    }

    /// Compile script text and lay the cards out on the board.
    #[must_use]
    pub fn board(&self, script: &str) -> Vec<PositionedCard> {
        layout::layout_with(self.cards(script), &self.config.layout)
    }

    /// Compile raw bytes, rejecting input that is not UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`KardError::Encoding`] when `bytes` is not valid UTF-8.
    pub fn cards_from_bytes(&self, bytes: &[u8]) -> Result<Vec<CardRecord>, KardError> {
        let script = std::str::from_utf8(bytes)?;
        Ok(self.cards(script))
    }

    /// Read and compile a `.kard` file.
    ///
    /// # Errors
    ///
    /// Returns [`KardError::Read`] if the file cannot be read and
    /// [`KardError::Encoding`] if it is not UTF-8.
    pub fn cards_from_file(&self, path: &Path) -> Result<Vec<CardRecord>, KardError> {
        let bytes = std::fs::read(path).map_err(|source| KardError::Read { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read kard script");
        self.cards_from_bytes(&bytes)
    }
}

/// Compile script text into card records with the default configuration.
#[must_use]
pub fn compile(script: &str) -> Vec<CardRecord> {
    Compiler::default().cards(script)
}

/// Compile script text into positioned cards with the default configuration.
#[must_use]
pub fn compile_board(script: &str) -> Vec<PositionedCard> {
    Compiler::default().board(script)
}

/// Compile raw bytes with the default configuration.
///
/// # Errors
///
/// Returns [`KardError::Encoding`] when `bytes` is not valid UTF-8.
pub fn compile_bytes(bytes: &[u8]) -> Result<Vec<CardRecord>, KardError> {
    Compiler::default().cards_from_bytes(bytes)
}

/// Read and compile a script file with the default configuration.
///
/// # Errors
///
/// See [`Compiler::cards_from_file`].
pub fn compile_file(path: impl AsRef<Path>) -> Result<Vec<CardRecord>, KardError> {
    Compiler::default().cards_from_file(path.as_ref())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
