//! Response formats.

use crate::error::OEmbedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Response format requested from a provider endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = OEmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            other => Err(OEmbedError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_json() {
        assert_eq!(Format::default(), Format::Json);
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("xml".parse::<Format>().unwrap(), Format::Xml);
    }

    #[test]
    fn unknown_format_is_an_embed_error() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(matches!(err, OEmbedError::UnknownFormat { ref format } if format == "yaml"));
        assert!(err.is_embed_error());
    }

    #[test]
    fn deserializes_lowercase() {
        let format: Format = serde_yaml::from_str("xml").unwrap();
        assert_eq!(format, Format::Xml);
    }
}
