//! Error handling utilities for MCP server

use compass_core::CompassError;
use rmcp::ErrorData;

/// Helper to convert core errors to MCP errors.
///
/// Caller mistakes (blank owner, unknown owner) become invalid-params errors
/// so the assistant can correct the call. Everything else is internal.
pub fn to_mcp_error(message: &str, error: &CompassError) -> ErrorData {
    match error {
        CompassError::InvalidInput { .. } | CompassError::PlanNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

/// Helper for failures talking to the conversation session task.
pub fn session_error(error: anyhow::Error) -> ErrorData {
    ErrorData::internal_error(format!("{error:#}"), None)
}
