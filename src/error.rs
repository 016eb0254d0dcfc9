//! Error type for the fallible edges of the compiler.
//!
//! Compiling a `&str` never fails: malformed blocks and properties are
//! skipped. Errors only arise when reading input, decoding bytes, loading
//! configuration, or addressing a card on a [`crate::board::Board`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KardError {
    /// The script file could not be read.
    #[error("failed to read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The script bytes are not valid UTF-8.
    #[error("script is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    /// An environment setting could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A board operation referenced a card position that does not exist.
    #[error("no card at position {index} (board has {len})")]
    NoSuchCard { index: usize, len: usize },
}
