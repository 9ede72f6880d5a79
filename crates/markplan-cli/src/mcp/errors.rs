//! Error handling utilities for the MCP server

use markplan_core::PlannerError;
use rmcp::ErrorData;

/// Convert a planner error to an MCP error.
///
/// Bad arguments become `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        PlannerError::InvalidInput { .. } => ErrorData::invalid_params(error.to_string(), None),
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
