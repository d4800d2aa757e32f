use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a planning tool reports back to the caller.
///
/// The message is written for the end user; the variant tells the caller
/// what kind of failure it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ToolError {
    /// An argument was out of range or could not be decoded.
    #[error("{0}")]
    InvalidArgument(String),
    /// A lookup key was not in the reference tables, or the tool is unknown.
    #[error("{0}")]
    NotFound(String),
    /// Nothing fits the stored budget.
    #[error("{0}")]
    BudgetExceeded(String),
    /// The trip state is missing something the tool needs.
    #[error("{0}")]
    PreconditionFailed(String),
    /// A collaborator such as the document renderer failed.
    #[error("{0}")]
    External(String),
}

impl ToolError {
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::InvalidArgument(_) => "invalid_argument",
            ToolError::NotFound(_) => "not_found",
            ToolError::BudgetExceeded(_) => "budget_exceeded",
            ToolError::PreconditionFailed(_) => "precondition_failed",
            ToolError::External(_) => "external",
        }
    }
}

impl From<trip::Error> for ToolError {
    fn from(err: trip::Error) -> Self {
        ToolError::InvalidArgument(err.to_string())
    }
}
