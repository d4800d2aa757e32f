//! Trip plan documents and the renderers that write them.
//!
//! [`TripDocument`] lays out a trip snapshot as a flat list of blocks. A
//! [`DocumentRenderer`] turns those blocks into an output file; the crate
//! ships [`TextRenderer`], which writes paginated plain text.

mod document;
mod text;

use std::path::PathBuf;

use thiserror::Error;

pub use document::{Block, TripDocument};
pub use text::{DEFAULT_LINES_PER_PAGE, TextRenderer};

/// Errors raised by a document renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid file name '{0}'")]
    InvalidFilename(String),

    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes a trip document to a named output.
pub trait DocumentRenderer: Send + Sync {
    /// Render the document and return where it was written.
    fn render(&self, document: &TripDocument, filename: &str) -> Result<PathBuf, RenderError>;
}
