//! Tool boundary: call/result types, errors, and the host trait.

pub mod errors;
mod host;
mod types;

pub use errors::ToolError;
pub use host::ToolHost;
pub use types::{Report, ToolCall, ToolOutcome, ToolResult, ToolSpec};
