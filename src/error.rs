use std::io;

use thiserror::Error;

/// Errors raised by the I/O-facing parts of the crate.
///
/// The analysis operations themselves are total and never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus bytes are not valid UTF-8; `offset` is the length of the valid prefix.
    #[error("corpus is not valid UTF-8 (valid up to byte {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
