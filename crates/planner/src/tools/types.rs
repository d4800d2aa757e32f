//! Tool-related types.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::ToolError;

/// A tool call requested by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

/// The human-readable result of a successful tool, plus any extra fields
/// the caller may want (e.g. the file an export wrote).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub text: String,
    pub extra: Map<String, Value>,
}

impl Report {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Outcome of a tool execution.
///
/// Serializes as `{"status": "success", "report": ..., <extra>}` or
/// `{"status": "error", "error_message": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success(Report),
    Error(ToolError),
}

impl ToolOutcome {
    /// Whether this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The report text, if successful.
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::Success(report) => Some(&report.text),
            Self::Error(_) => None,
        }
    }

    /// The error, if failed.
    pub fn error(&self) -> Option<&ToolError> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// The wire form as a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl From<Result<Report, ToolError>> for ToolOutcome {
    fn from(result: Result<Report, ToolError>) -> Self {
        match result {
            Ok(report) => Self::Success(report),
            Err(err) => Self::Error(err),
        }
    }
}

impl Serialize for ToolOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(report) => {
                let mut map = serializer.serialize_map(Some(2 + report.extra.len()))?;
                map.serialize_entry("status", "success")?;
                map.serialize_entry("report", &report.text)?;
                for (key, value) in &report.extra {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Error(err) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("status", "error")?;
                map.serialize_entry("error_message", &err.to_string())?;
                map.end()
            }
        }
    }
}

/// The result returned after a tool call, paired with the call ID.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub outcome: ToolOutcome,
}

/// A tool definition exposed to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub schema: Value,
}
