//! Error types shared by the index library and the cluster utilities

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while comparing labelings or handling cluster data
#[derive(Debug, Error)]
pub enum Error {
    /// The two labelings cover a different number of items
    #[error("labelings have different lengths: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first labeling
        left: usize,
        /// Length of the second labeling
        right: usize,
    },

    /// A labeling (or other required collection) was empty
    #[error("empty input provided")]
    EmptyInput,

    /// The named index has a vanishing denominator for this input
    #[error("{index} is undefined for this input (zero denominator)")]
    DivisionByZero {
        /// Name of the index that could not be computed
        index: &'static str,
    },

    /// Malformed cluster or adjacency text
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number (0 when the input is not line-oriented)
        line: usize,
        /// What went wrong
        message: String,
    },

    /// A configuration value is out of range
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// Reading or writing a file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
