//! Built-in provider catalog embedded at compile time.
//!
//! The catalog is static seed data: provider names, endpoints and patterns.
//! Turning it into live [`Provider`]s needs a [`Transport`], which the caller
//! supplies.

use crate::error::{OEmbedError, Result};
use crate::pattern::PatternRule;
use crate::provider::{Format, Provider, Transport};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/providers");

const CATALOG_FILE: &str = "catalog.yml";

/// Load the built-in provider catalog.
pub fn load_catalog() -> Result<Catalog> {
    let file = CATALOG_DIR
        .get_file(CATALOG_FILE)
        .ok_or_else(|| OEmbedError::Catalog {
            message: format!("providers/{} is missing", CATALOG_FILE),
        })?;

    let content = file.contents_utf8().ok_or_else(|| OEmbedError::Catalog {
        message: format!("providers/{} is not valid UTF-8", CATALOG_FILE),
    })?;

    Catalog::from_yaml_str(content)
}

/// A set of provider definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog version.
    #[serde(default = "default_catalog_version")]
    pub version: u32,

    /// Providers registered by default, in registration order.
    #[serde(default)]
    pub defaults: Vec<String>,

    /// All known providers.
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
}

fn default_catalog_version() -> u32 {
    1
}

/// One provider definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSpec {
    /// Provider name, unique within a catalog.
    pub name: String,

    /// Endpoint template, may contain `{format}`.
    pub endpoint: String,

    /// Response format.
    #[serde(default)]
    pub format: Format,

    /// URL patterns, in order.
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

/// A pattern entry: a bare string is a glob, `{ regex: ... }` is a regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Glob(String),
    Regex { regex: String },
}

impl From<&PatternSpec> for PatternRule {
    fn from(spec: &PatternSpec) -> Self {
        match spec {
            PatternSpec::Glob(glob) => PatternRule::Glob(glob.clone()),
            PatternSpec::Regex { regex } => PatternRule::Regex(regex.clone()),
        }
    }
}

impl ProviderSpec {
    /// Build a live provider from this definition.
    pub fn build(&self, transport: Arc<dyn Transport>) -> Result<Provider> {
        let provider = Provider::with_format(self.endpoint.as_str(), self.format, transport)?
            .with_name(self.name.as_str());
        for pattern in &self.patterns {
            provider.add_pattern(pattern)?;
        }
        Ok(provider)
    }
}

impl Catalog {
    /// Parse a catalog from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| OEmbedError::Catalog {
            message: e.to_string(),
        })
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| OEmbedError::Catalog {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Look up a provider definition by name.
    pub fn get(&self, name: &str) -> Option<&ProviderSpec> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// All provider names, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }

    /// Build every provider in the catalog, in catalog order.
    pub fn build(&self, transport: Arc<dyn Transport>) -> Result<Vec<Arc<Provider>>> {
        self.providers
            .iter()
            .map(|spec| spec.build(transport.clone()).map(Arc::new))
            .collect()
    }

    /// Build the default providers, in `defaults` order.
    ///
    /// # Errors
    ///
    /// Returns [`OEmbedError::Catalog`] if `defaults` names an unknown provider.
    pub fn build_defaults(&self, transport: Arc<dyn Transport>) -> Result<Vec<Arc<Provider>>> {
        self.defaults
            .iter()
            .map(|name| {
                let spec = self.get(name).ok_or_else(|| OEmbedError::Catalog {
                    message: format!("default provider '{}' is not defined", name),
                })?;
                spec.build(transport.clone()).map(Arc::new)
            })
            .collect()
    }
}
