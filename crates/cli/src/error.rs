//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// `planner.toml` could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] catalog::Error),

    /// Tool input on the command line was not valid JSON.
    #[error("invalid JSON input: {0}")]
    Input(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
