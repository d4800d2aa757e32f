//! Catalog error types.

use thiserror::Error;

/// Catalog errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The catalog content breaks a table rule.
    #[error("invalid catalog: {0}")]
    Invalid(String),

    /// Failed to parse a catalog file.
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// An I/O error occurred while reading the catalog.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
