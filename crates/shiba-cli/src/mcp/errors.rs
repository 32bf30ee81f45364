//! Error handling utilities for MCP server

use rmcp::ErrorData;
use shiba_core::CatalogError;

/// Helper to convert catalog errors to MCP errors
///
/// Missing exercises and substitutions become `resource_not_found` so a
/// client can tell a bad ID apart from a server fault.
pub fn to_mcp_error(message: &str, error: &CatalogError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        CatalogError::NotFound(_) => ErrorData::resource_not_found(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
