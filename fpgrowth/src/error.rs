//! Error types for fpgrowth.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
///
/// Mining itself cannot fail; these variants cover threshold resolution and
/// the loading/reporting layer around the miner.
#[derive(Debug, Error)]
pub enum FpError {
    /// A relative minimum support was NaN, infinite or outside `[0, 1]`.
    #[error("invalid minimum support fraction {0}: expected a value within [0, 1]")]
    InvalidSupportFraction(f64),

    /// A minimum support argument could not be parsed.
    #[error("invalid minimum support `{0}`: expected a count or a fraction")]
    InvalidSupportArg(String),

    /// Reading a transaction file failed.
    #[error("failed to read transactions from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending a report failed.
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for fpgrowth operations.
pub type Result<T> = std::result::Result<T, FpError>;
