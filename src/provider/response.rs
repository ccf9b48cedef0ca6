//! Parsed provider responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Embed data as parsed by the transport.
///
/// The registry never looks inside; it hands the value back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedResponse {
    fields: Map<String, Value>,
}

impl EmbedResponse {
    /// Wrap a parsed field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Get a single field (e.g. `"type"`, `"html"`, `"title"`).
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the response, returning its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for EmbedResponse {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
