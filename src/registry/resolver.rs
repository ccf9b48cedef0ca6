//! URL resolution against registered providers.
//!
//! Resolution order (first match wins):
//! 1. Registered patterns, in registration order
//! 2. Fallback providers, in registration order
//!
//! All state sits behind one read-write lock. Lookups only hold the read
//! lock while scanning patterns; provider calls run after it is released.

use crate::error::{OEmbedError, Result};
use crate::pattern::{Pattern, PatternKey};
use crate::provider::{EmbedResponse, Options, Provider, Transport};
use crate::registry::builtin::load_catalog;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// A registered pattern and the provider that owns it.
#[derive(Debug, Clone)]
struct Route {
    pattern: Pattern,
    provider: Arc<Provider>,
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Keyed by pattern identity. Iteration follows first insertion.
    routes: IndexMap<PatternKey, Route>,
    fallback: Vec<Arc<Provider>>,
}

impl RegistryState {
    fn find(&self, url: &str) -> Option<Arc<Provider>> {
        self.routes
            .values()
            .find(|route| route.pattern.matches(url))
            .map(|route| {
                tracing::trace!("{} matched {}", route.pattern, url);
                route.provider.clone()
            })
    }
}

/// Where a lookup should go, decided under the lock.
enum Resolution {
    Direct(Arc<Provider>),
    Fallback(Vec<Arc<Provider>>),
}

/// Maps URL patterns to providers.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    ///
    /// Starts empty. Tests that use it should call [`Registry::reset`] first.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Remove every route and fallback provider.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.routes.clear();
        state.fallback.clear();
        debug!("Registry reset");
    }

    /// Register providers under each of their current patterns.
    ///
    /// A pattern that is already registered is reassigned to the new
    /// provider but keeps its original position. The whole batch becomes
    /// visible at once.
    pub fn register(&self, providers: &[Arc<Provider>]) {
        let batch: Vec<(Pattern, &Arc<Provider>)> = providers
            .iter()
            .flat_map(|provider| {
                provider
                    .patterns()
                    .into_iter()
                    .map(move |pattern| (pattern, provider))
            })
            .collect();

        let mut state = self.state.write();
        for (pattern, provider) in batch {
            state.routes.insert(
                pattern.key(),
                Route {
                    pattern,
                    provider: provider.clone(),
                },
            );
        }
        debug!(
            "Registered {} provider(s), {} route(s) total",
            providers.len(),
            state.routes.len()
        );
    }

    /// Remove the routes for each provider's current patterns.
    ///
    /// A route is only removed while it still points at the provider being
    /// unregistered; routes since claimed by another provider stay.
    pub fn unregister(&self, providers: &[Arc<Provider>]) {
        let batch: Vec<(PatternKey, &Arc<Provider>)> = providers
            .iter()
            .flat_map(|provider| {
                provider
                    .patterns()
                    .into_iter()
                    .map(move |pattern| (pattern.key(), provider))
            })
            .collect();

        let mut state = self.state.write();
        for (key, provider) in batch {
            let owned = state
                .routes
                .get(&key)
                .is_some_and(|route| Arc::ptr_eq(&route.provider, provider));
            if owned {
                state.routes.shift_remove(&key);
            } else if state.routes.contains_key(&key) {
                debug!(
                    "Not removing {} for {}: route belongs to another provider",
                    key,
                    provider.label()
                );
            }
        }
        debug!(
            "Unregistered {} provider(s), {} route(s) left",
            providers.len(),
            state.routes.len()
        );
    }

    /// Append fallback providers. Duplicates are kept.
    pub fn register_fallback(&self, providers: &[Arc<Provider>]) {
        let mut state = self.state.write();
        state.fallback.extend(providers.iter().cloned());
        debug!("{} fallback provider(s) registered", state.fallback.len());
    }

    /// Register the built-in default providers.
    ///
    /// Returns the providers so they can be unregistered later.
    pub fn register_all(&self, transport: Arc<dyn Transport>) -> Result<Vec<Arc<Provider>>> {
        let providers = load_catalog()?.build_defaults(transport)?;
        self.register(&providers);
        Ok(providers)
    }

    /// Find the provider for the first registered pattern matching `url`.
    pub fn find(&self, url: &str) -> Option<Arc<Provider>> {
        self.state.read().find(url)
    }

    /// Fetch the raw response body for `url`.
    ///
    /// # Errors
    ///
    /// - Any error from a directly matched provider, unchanged
    /// - Any non-embed error from a fallback provider
    /// - [`OEmbedError::NotFound`] if no provider could serve `url`
    pub fn raw(&self, url: &str, options: &Options) -> Result<Vec<u8>> {
        self.resolve(url, |provider| provider.raw(url, options))
    }

    /// Fetch the parsed embed data for `url`. Fails like [`Registry::raw`].
    pub fn get(&self, url: &str, options: &Options) -> Result<EmbedResponse> {
        self.resolve(url, |provider| provider.get(url, options))
    }

    /// Registered patterns and their providers, in match order.
    pub fn routes(&self) -> Vec<(Pattern, Arc<Provider>)> {
        self.state
            .read()
            .routes
            .values()
            .map(|route| (route.pattern.clone(), route.provider.clone()))
            .collect()
    }

    /// Fallback providers, in the order they are tried.
    pub fn fallback(&self) -> Vec<Arc<Provider>> {
        self.state.read().fallback.clone()
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.state.read().routes.len()
    }

    /// Whether no pattern is registered.
    pub fn is_empty(&self) -> bool {
        self.state.read().routes.is_empty()
    }

    fn resolution(&self, url: &str) -> Resolution {
        let state = self.state.read();
        match state.find(url) {
            Some(provider) => Resolution::Direct(provider),
            None => Resolution::Fallback(state.fallback.clone()),
        }
    }

    fn resolve<T>(&self, url: &str, call: impl Fn(&Provider) -> Result<T>) -> Result<T> {
        let fallback = match self.resolution(url) {
            Resolution::Direct(provider) => return call(provider.as_ref()),
            Resolution::Fallback(fallback) => fallback,
        };

        for provider in &fallback {
            match call(provider.as_ref()) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_embed_error() => {
                    debug!("Fallback {} failed for {}: {}", provider.label(), url, e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(OEmbedError::NotFound {
            url: url.to_string(),
        })
    }
}
