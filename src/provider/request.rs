//! Requests handed to the transport.

use crate::error::{OEmbedError, Result};
use crate::provider::Format;
use url::Url;

/// A fully resolved request against a provider endpoint.
///
/// The endpoint already has its `{format}` placeholder substituted; the query
/// holds `url` followed by caller options, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    /// Endpoint URL without query string.
    pub endpoint: String,
    /// Query parameters, in the order they will be sent.
    pub query: Vec<(String, String)>,
    /// Format the response is expected in.
    pub format: Format,
}

impl EmbedRequest {
    /// Look up a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render the endpoint and query into a single URL.
    ///
    /// Query values are percent-encoded. Any query already present on the
    /// endpoint is kept, new pairs are appended after it.
    pub fn to_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| OEmbedError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}
