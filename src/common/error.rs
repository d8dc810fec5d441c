//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The replacement policies themselves never fail. Every variant here is
/// raised at the input boundary, before a simulation starts.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame count was negative.
    #[error("Invalid frame count: {0} (must be >= 0)")]
    InvalidFrameCount(i64),

    /// A numeric field could not be parsed.
    #[error("Invalid {field}: {value:?} is not a number")]
    Parse {
        /// Which input was being read (e.g. "frame count").
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Policy name did not match any known policy.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
