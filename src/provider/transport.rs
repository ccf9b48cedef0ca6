//! The transport seam.
//!
//! The crate does not talk to the network itself. A [`Transport`] performs
//! the HTTP request for a resolved [`EmbedRequest`] and, for `fetch_parsed`,
//! turns the body into an [`EmbedResponse`].
//!
//! Implementations should report failures using the embed taxonomy
//! (`NotFound`, `UnknownFormat`, `UnknownResponse`, `Transport`,
//! `MalformedResponse`) so that the registry can fall through to the next
//! fallback provider. [`OEmbedError::from_status`] maps HTTP statuses.
//!
//! [`OEmbedError::from_status`]: crate::OEmbedError::from_status

use crate::error::Result;
use crate::provider::{EmbedRequest, EmbedResponse};

/// Performs provider requests.
pub trait Transport: Send + Sync {
    /// Fetch the raw response body.
    fn fetch_raw(&self, request: &EmbedRequest) -> Result<Vec<u8>>;

    /// Fetch and parse the response body.
    fn fetch_parsed(&self, request: &EmbedRequest) -> Result<EmbedResponse>;
}
