use serde::de::DeserializeOwned;

/// Decodes a structured column, obstacle masks and enums are stored as JSON text.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
