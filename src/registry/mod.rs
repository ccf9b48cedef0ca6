//! Provider registry.
//!
//! The registry maps URL patterns to providers and resolves a URL to embed
//! data:
//!
//! 1. Patterns are tested in registration order; the first match wins.
//! 2. If nothing matches, fallback providers are tried in the order they
//!    were added. Embed errors from a fallback are skipped over.
//! 3. If every fallback fails (or there are none), the lookup fails with
//!    [`OEmbedError::NotFound`](crate::OEmbedError::NotFound).
//!
//! # Example
//!
//! ```no_run
//! use oembed::{Options, Registry, Transport};
//! use std::sync::Arc;
//!
//! # fn demo(transport: Arc<dyn Transport>) -> oembed::Result<()> {
//! let registry = Registry::new();
//! registry.register_all(transport)?;
//!
//! let provider = registry.find("http://www.vimeo.com/757219");
//! assert_eq!(provider.unwrap().name(), Some("Vimeo"));
//!
//! let embed = registry.get("http://www.vimeo.com/757219", &Options::new())?;
//! println!("{:?}", embed.field("html"));
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod resolver;

// Re-exports
pub use builtin::{load_catalog, Catalog, PatternSpec, ProviderSpec};
pub use resolver::Registry;
