//! Error types for oEmbed operations.
//!
//! This module defines [`OEmbedError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Errors fall into two groups:
//!
//! - The embed taxonomy ([`OEmbedError::is_embed_error`]): failures that come
//!   out of a provider call. The registry swallows these while scanning
//!   fallback providers.
//! - Everything else (bad patterns, bad endpoints, catalog problems, wrapped
//!   `anyhow` errors). These always propagate, fallback scan or not.

use crate::provider::Format;
use thiserror::Error;

/// Core error type for oEmbed operations.
#[derive(Debug, Error)]
pub enum OEmbedError {
    /// No provider could serve the URL.
    #[error("No embeddable content found for {url}")]
    NotFound { url: String },

    /// The provider does not serve the requested response format.
    #[error("Unknown response format: {format}")]
    UnknownFormat { format: String },

    /// The provider answered with an unexpected status.
    #[error("Unknown response from provider (status {status})")]
    UnknownResponse { status: u16 },

    /// The request never produced a response.
    #[error("Transport failure: {message}")]
    Transport { message: String },

    /// The response body could not be parsed.
    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },

    /// A URL pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A provider endpoint template is not a valid URL.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// The provider catalog could not be loaded.
    #[error("Invalid provider catalog: {message}")]
    Catalog { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OEmbedError {
    /// Whether this error belongs to the embed taxonomy.
    ///
    /// Only these errors are skipped over when the registry walks its
    /// fallback providers.
    pub fn is_embed_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::UnknownFormat { .. }
                | Self::UnknownResponse { .. }
                | Self::Transport { .. }
                | Self::MalformedResponse { .. }
        )
    }

    /// Map an HTTP status from a provider endpoint to an error.
    ///
    /// Returns `None` for success statuses. Intended for [`Transport`]
    /// implementations so that every transport reports failures the same way.
    ///
    /// [`Transport`]: crate::provider::Transport
    pub fn from_status(status: u16, url: &str, format: Format) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(Self::NotFound {
                url: url.to_string(),
            }),
            501 => Some(Self::UnknownFormat {
                format: format.to_string(),
            }),
            status => Some(Self::UnknownResponse { status }),
        }
    }
}

/// Result type alias for oEmbed operations.
pub type Result<T> = std::result::Result<T, OEmbedError>;
