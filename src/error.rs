//! Error types for sl2 decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Sl2Error {
    #[error("file header too short: expected at least 10 bytes, got {actual}")]
    HeaderTooShort { actual: usize },

    #[error("zero-length block at offset {offset}")]
    ZeroLengthBlock { offset: usize },

    #[error("truncated stream: block at offset {offset} needs {needed} bytes, only {actual} in stream")]
    TruncatedBlock {
        offset: usize,
        needed: usize,
        actual: usize,
    },

    #[error("no records survived filtering")]
    NoRecords,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Sl2Error>;
