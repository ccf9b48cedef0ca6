//! oEmbed provider registry.
//!
//! Resolves a media URL to the content provider that can embed it and fetches
//! the provider's oEmbed data, falling back to catch-all providers when no
//! registered pattern matches.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`pattern`] - Glob and regex URL patterns
//! - [`provider`] - Providers, requests, responses and the transport seam
//! - [`registry`] - Pattern-to-provider registry and the built-in catalog
//!
//! The crate does not perform HTTP itself: callers plug in a
//! [`Transport`].
//!
//! # Example
//!
//! ```
//! use oembed::Pattern;
//!
//! let pattern = Pattern::glob("http://*.flickr.com/*").unwrap();
//! assert!(pattern.matches("http://www.flickr.com/photos/bees/2341623661/"));
//! ```

pub mod error;
pub mod pattern;
pub mod provider;
pub mod registry;

pub use error::{OEmbedError, Result};
pub use pattern::{Pattern, PatternKey, PatternRule};
pub use provider::{EmbedRequest, EmbedResponse, Format, Options, Provider, Transport};
pub use registry::{Catalog, Registry};
