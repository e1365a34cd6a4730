//! Uniform tool result
//!
//! Every tool resolves to a [`ToolOutcome`]. Failures never surface as
//! protocol errors; the host always receives a JSON object, either the API's
//! body or `{"error": "..."}`.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData;
use serde_json::{json, Value};

use scrapegraph_client::ScrapeGraphError;

/// Message returned by every tool when no API key was configured
pub const NOT_INITIALIZED: &str = "ScapeGraph client not initialized. Please provide an API key.";

/// Result of a single tool call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The API body, passed through unchanged
    Success(Value),
    /// A human-readable failure message
    Failure(String),
}

impl ToolOutcome {
    /// Outcome for calls made while the client is unconfigured
    #[must_use]
    pub fn not_initialized() -> Self {
        Self::Failure(NOT_INITIALIZED.to_string())
    }

    /// The JSON object handed back to the host
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::Failure(message) => json!({ "error": message }),
        }
    }

    /// Convert into an MCP tool result
    ///
    /// Failures are flagged with `is_error` so hosts can tell them apart
    /// without inspecting the payload.
    ///
    /// # Errors
    /// Only if the payload cannot be serialized, which a `Value` always can
    pub fn into_call_result(self) -> Result<CallToolResult, ErrorData> {
        let content = vec![Content::json(self.payload())?];
        Ok(match self {
            Self::Success(_) => CallToolResult::success(content),
            Self::Failure(_) => CallToolResult::error(content),
        })
    }
}

impl From<Result<Value, ScrapeGraphError>> for ToolOutcome {
    fn from(result: Result<Value, ScrapeGraphError>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}
