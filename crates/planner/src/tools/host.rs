//! Tool host trait.

use std::future::Future;

use super::{ToolCall, ToolResult, ToolSpec};

/// Trait for tool execution hosts.
///
/// Implementations provide tool specifications and execute tool calls.
/// This is the boundary between the caller's model loop and the trip state.
pub trait ToolHost: Send + Sync {
    /// Get available tool specifications.
    fn specs(&self) -> &[ToolSpec];

    /// Execute a tool call. Failures are reported in the result, never raised.
    fn execute(&self, call: &ToolCall) -> impl Future<Output = ToolResult> + Send;
}
