//! URL patterns.
//!
//! A provider advertises the URLs it can embed as a list of patterns. A
//! pattern is written either as a glob, where `*` stands for any run of
//! characters (slashes included), or as a regular expression. Both are
//! compiled to a [`Regex`] once, when the pattern is created.
//!
//! # Example
//!
//! ```
//! use oembed::Pattern;
//!
//! let pattern = Pattern::glob("http://*.vimeo.com/*").unwrap();
//! assert!(pattern.matches("http://www.vimeo.com/12345"));
//! assert!(!pattern.matches("https://www.vimeo.com/12345"));
//! ```

use crate::error::{OEmbedError, Result};
use regex::Regex;
use std::fmt;

/// A URL pattern as written by the user, before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternRule {
    /// Glob with `*` wildcards, anchored at both ends.
    Glob(String),
    /// Regular expression, used verbatim (no anchoring added).
    Regex(String),
}

impl From<&str> for PatternRule {
    fn from(glob: &str) -> Self {
        Self::Glob(glob.to_string())
    }
}

impl From<String> for PatternRule {
    fn from(glob: String) -> Self {
        Self::Glob(glob)
    }
}

impl From<Regex> for PatternRule {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex.as_str().to_string())
    }
}

impl From<&Regex> for PatternRule {
    fn from(regex: &Regex) -> Self {
        Self::Regex(regex.as_str().to_string())
    }
}

/// Identity of a pattern inside the registry.
///
/// Two patterns with the same key are the same route: registering the second
/// one replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey(String);

impl PatternKey {
    /// The compiled expression this key was derived from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A compiled URL pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Compiled from a glob. Keeps the glob for display.
    Glob { glob: String, matcher: Regex },
    /// A caller-supplied regular expression.
    Regex(Regex),
}

impl Pattern {
    /// Compile a rule into a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`OEmbedError::InvalidPattern`] if the regex is invalid.
    pub fn compile(rule: impl Into<PatternRule>) -> Result<Self> {
        match rule.into() {
            PatternRule::Glob(glob) => {
                let matcher = build_regex(&glob, &glob_to_regex(&glob))?;
                Ok(Self::Glob { glob, matcher })
            }
            PatternRule::Regex(source) => Ok(Self::Regex(build_regex(&source, &source)?)),
        }
    }

    /// Compile a glob pattern.
    pub fn glob(glob: &str) -> Result<Self> {
        Self::compile(PatternRule::Glob(glob.to_string()))
    }

    /// Compile a regular expression pattern.
    pub fn regex(source: &str) -> Result<Self> {
        Self::compile(PatternRule::Regex(source.to_string()))
    }

    /// Check whether `url` matches this pattern. Case-sensitive.
    pub fn matches(&self, url: &str) -> bool {
        self.matcher().is_match(url)
    }

    /// Registry identity of this pattern.
    pub fn key(&self) -> PatternKey {
        PatternKey(self.matcher().as_str().to_string())
    }

    /// The rule this pattern was compiled from.
    pub fn rule(&self) -> PatternRule {
        match self {
            Self::Glob { glob, .. } => PatternRule::Glob(glob.clone()),
            Self::Regex(regex) => PatternRule::Regex(regex.as_str().to_string()),
        }
    }

    fn matcher(&self) -> &Regex {
        match self {
            Self::Glob { matcher, .. } => matcher,
            Self::Regex(regex) => regex,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob { glob, .. } => f.write_str(glob),
            Self::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Translate a glob into an anchored regular expression.
///
/// Literal segments are escaped, each `*` becomes `.*`.
fn glob_to_regex(glob: &str) -> String {
    let body = glob
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("^{body}$")
}

fn build_regex(pattern: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| OEmbedError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glob_matches_subdomains() {
        let pattern = Pattern::glob("http://*.foo.com/*").unwrap();
        assert!(pattern.matches("http://a.foo.com/x"));
        assert!(pattern.matches("http://sub.sub.foo.com/x/y"));
    }

    #[test]
    fn glob_requires_literal_segments() {
        let pattern = Pattern::glob("http://*.foo.com/*").unwrap();
        assert!(!pattern.matches("http://foo.com/x"));
        assert!(!pattern.matches("https://a.foo.com/x"));
    }

    #[test]
    fn glob_is_anchored() {
        let pattern = Pattern::glob("http://qik.com/*").unwrap();
        assert!(!pattern.matches("see http://qik.com/video/1"));
        let pattern = Pattern::glob("http://movieclips.com/watch/*/*/").unwrap();
        assert!(pattern.matches("http://movieclips.com/watch/a/b/"));
        assert!(!pattern.matches("http://movieclips.com/watch/a/b/c"));
    }

    #[test]
    fn glob_star_matches_empty_run() {
        let pattern = Pattern::glob("http://www.hulu.com/watch*").unwrap();
        assert!(pattern.matches("http://www.hulu.com/watch"));
    }

    #[test]
    fn glob_escapes_metacharacters() {
        let pattern = Pattern::glob("http://video.google.com/videoplay?*").unwrap();
        assert!(pattern.matches("http://video.google.com/videoplay?docid=1"));
        // `?` and `.` are literal
        assert!(!pattern.matches("http://video.google.com/videoplaX"));
        assert!(!pattern.matches("http://videoXgoogle.com/videoplay?docid=1"));

        let pattern = Pattern::glob("http://www.lala.com/#album/*").unwrap();
        assert!(pattern.matches("http://www.lala.com/#album/42"));
    }

    #[test]
    fn glob_is_case_sensitive() {
        let pattern = Pattern::glob("http://*.flickr.com/*").unwrap();
        assert!(!pattern.matches("http://www.FLICKR.com/photos/1"));
    }

    #[test]
    fn regex_is_not_anchored() {
        let pattern = Pattern::regex(r"http://yfrog\.(com|ru)/(.*?)").unwrap();
        assert!(pattern.matches("http://yfrog.com/abc"));
        assert!(pattern.matches("see http://yfrog.ru/abc"));
        assert!(!pattern.matches("http://yfrog.de/abc"));
    }

    #[test]
    fn invalid_regex_returns_error() {
        let err = Pattern::regex("[bad").unwrap_err();
        assert!(matches!(err, OEmbedError::InvalidPattern { ref pattern, .. } if pattern == "[bad"));
    }

    #[test]
    fn rule_conversions() {
        assert_eq!(
            PatternRule::from("http://*.x.com/*"),
            PatternRule::Glob("http://*.x.com/*".into())
        );
        let regex = Regex::new("^http://x").unwrap();
        assert_eq!(PatternRule::from(&regex), PatternRule::Regex("^http://x".into()));
    }

    #[test]
    fn same_glob_has_same_key() {
        let a = Pattern::glob("http://*.x.com/*").unwrap();
        let b = Pattern::compile("http://*.x.com/*").unwrap();
        assert_eq!(a.key(), b.key());
        assert_eq!(a, b);
        assert_ne!(a.key(), Pattern::glob("http://*.y.com/*").unwrap().key());
    }

    #[test]
    fn rule_round_trips_through_pattern() {
        let pattern = Pattern::glob("http://qik.com/*").unwrap();
        assert_eq!(pattern.rule(), PatternRule::Glob("http://qik.com/*".into()));
    }

    #[test]
    fn display() {
        assert_eq!(
            Pattern::glob("http://qik.com/*").unwrap().to_string(),
            "http://qik.com/*"
        );
        assert_eq!(Pattern::regex("^a+$").unwrap().to_string(), "/^a+$/");
    }
}
