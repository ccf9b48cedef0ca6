//! oEmbed providers.
//!
//! A [`Provider`] is an endpoint template plus the URL patterns it claims.
//! Requests are built here and handed to a [`Transport`] for the actual HTTP
//! round trip.
//!
//! # Endpoint templates
//!
//! An endpoint may contain a `{format}` placeholder, e.g.
//! `http://www.vimeo.com/api/oembed.{format}`. When present it is replaced by
//! the response format; otherwise the format is sent as a `format` query
//! parameter.
//!
//! # Example
//!
//! ```no_run
//! use oembed::{Options, Provider, Transport};
//! use std::sync::Arc;
//!
//! # fn demo(transport: Arc<dyn Transport>) -> oembed::Result<()> {
//! let vimeo = Provider::new("http://www.vimeo.com/api/oembed.{format}", transport)?;
//! vimeo.add_pattern("http://*.vimeo.com/*")?;
//!
//! let request = vimeo.build("http://www.vimeo.com/123", &Options::new())?;
//! assert_eq!(request.endpoint, "http://www.vimeo.com/api/oembed.json");
//! # Ok(())
//! # }
//! ```

pub mod format;
pub mod request;
pub mod response;
pub mod transport;

pub use format::Format;
pub use request::EmbedRequest;
pub use response::EmbedResponse;
pub use transport::Transport;

use crate::error::{OEmbedError, Result};
use crate::pattern::{Pattern, PatternRule};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Extra query parameters passed through to the provider (`maxwidth`,
/// `maxheight`, ...). A `format` entry overrides the provider's format.
pub type Options = IndexMap<String, String>;

const FORMAT_PLACEHOLDER: &str = "{format}";

/// A content provider reachable through an oEmbed endpoint.
pub struct Provider {
    name: Option<String>,
    endpoint: String,
    format: Format,
    patterns: RwLock<Vec<Pattern>>,
    transport: Arc<dyn Transport>,
}

impl Provider {
    /// Create a provider that requests JSON.
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_format(endpoint, Format::default(), transport)
    }

    /// Create a provider with an explicit response format.
    ///
    /// # Errors
    ///
    /// Returns [`OEmbedError::InvalidEndpoint`] if the endpoint is not an
    /// absolute URL once the format placeholder is filled in.
    pub fn with_format(
        endpoint: impl Into<String>,
        format: Format,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint.replace(FORMAT_PLACEHOLDER, format.as_str())).map_err(|e| {
            OEmbedError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            name: None,
            endpoint,
            format,
            patterns: RwLock::new(Vec::new()),
            transport,
        })
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name if set, endpoint otherwise. Used in logs.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.endpoint)
    }

    /// Endpoint template as given.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configured response format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Whether the endpoint carries a `{format}` placeholder.
    pub fn format_in_url(&self) -> bool {
        self.endpoint.contains(FORMAT_PLACEHOLDER)
    }

    /// Compile a rule and append it to this provider's patterns.
    ///
    /// Patterns added after the provider was registered are not seen by the
    /// registry until it is registered again.
    pub fn add_pattern(&self, rule: impl Into<PatternRule>) -> Result<()> {
        let pattern = Pattern::compile(rule)?;
        self.patterns.write().push(pattern);
        Ok(())
    }

    /// Snapshot of this provider's patterns, in insertion order.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.patterns.read().clone()
    }

    /// Whether this provider claims `url`.
    ///
    /// A provider without patterns claims every URL.
    pub fn include(&self, url: &str) -> bool {
        let patterns = self.patterns.read();
        patterns.is_empty() || patterns.iter().any(|p| p.matches(url))
    }

    /// Build the request for `url`.
    ///
    /// # Errors
    ///
    /// - [`OEmbedError::NotFound`] if this provider does not claim `url`
    /// - [`OEmbedError::UnknownFormat`] if a `format` option is not a known format
    pub fn build(&self, url: &str, options: &Options) -> Result<EmbedRequest> {
        if !self.include(url) {
            return Err(OEmbedError::NotFound {
                url: url.to_string(),
            });
        }

        let format = match options.get("format") {
            Some(format) => format.parse()?,
            None => self.format,
        };

        let mut query = vec![("url".to_string(), url.to_string())];
        query.extend(
            options
                .iter()
                .filter(|(key, _)| key.as_str() != "url" && key.as_str() != "format")
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        let endpoint = if self.format_in_url() {
            self.endpoint.replace(FORMAT_PLACEHOLDER, format.as_str())
        } else {
            query.push(("format".to_string(), format.to_string()));
            self.endpoint.clone()
        };

        Ok(EmbedRequest {
            endpoint,
            query,
            format,
        })
    }

    /// Fetch the raw response body for `url`.
    pub fn raw(&self, url: &str, options: &Options) -> Result<Vec<u8>> {
        let request = self.build(url, options)?;
        tracing::trace!("{} raw request for {}", self.label(), url);
        self.transport.fetch_raw(&request)
    }

    /// Fetch and parse the embed data for `url`.
    pub fn get(&self, url: &str, options: &Options) -> Result<EmbedResponse> {
        let request = self.build(url, options)?;
        tracing::trace!("{} request for {}", self.label(), url);
        self.transport.fetch_parsed(&request)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("format", &self.format)
            .field("patterns", &*self.patterns.read())
            .finish_non_exhaustive()
    }
}
