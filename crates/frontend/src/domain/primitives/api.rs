use contracts::domain::primitives::GenerationRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::asset_url;

/// Mock endpoint returning the canned generated-atom payload
const GENERATION_ENDPOINT: &str = "https://mocki.io/v1/2ea1a0df-b603-462f-82a0-29317592a631";

/// Placeholder shown when an item's content resource cannot be loaded
pub const CONTENT_ERROR_TEXT: &str = "Error loading content";

/// Fixed message shown when a generation attempt fails
pub const GENERATION_ERROR_TEXT: &str = "Error generating atom. Please try again.";

/// Load the raw text content of a catalog item
pub async fn load_primitive_content(path: &str) -> Result<String, String> {
    let response = Request::get(&asset_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Content load failed: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {}", e))
}

/// Request a generated atom from the mock endpoint.
///
/// The endpoint returns a canned payload regardless of the selection, so
/// the request itself only feeds the log and the result metadata.
pub async fn generate_atom(request: &GenerationRequest) -> Result<serde_json::Value, String> {
    log::info!(
        "generating atom {} for {}.{} ({} tables)",
        request.id,
        request.database,
        request.schema,
        request.tables.len()
    );

    let response = Request::get(GENERATION_ENDPOINT)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Generation failed: {}", response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Pretty-print the generated payload with two-space indentation
pub fn format_atom_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_uses_two_space_indent() {
        let value = json!({"name": "atom-z", "tables": ["a", "b"]});
        let formatted = format_atom_json(&value);
        assert_eq!(
            formatted,
            "{\n  \"name\": \"atom-z\",\n  \"tables\": [\n    \"a\",\n    \"b\"\n  ]\n}"
        );
    }

    #[test]
    fn test_format_scalar_payload() {
        assert_eq!(format_atom_json(&json!(42)), "42");
    }
}
