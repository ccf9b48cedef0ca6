//! Library integration tests.

use oembed::OEmbedError;

#[test]
fn error_types_are_public() {
    let err = OEmbedError::NotFound {
        url: "http://example.com/1".into(),
    };
    assert!(err.to_string().contains("http://example.com/1"));
    assert!(err.is_embed_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> oembed::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn pattern_types_are_public() {
    use oembed::{Pattern, PatternRule};

    let pattern = Pattern::compile(PatternRule::Regex(r"^http://x\.com/\d+$".into())).unwrap();
    assert!(pattern.matches("http://x.com/12"));
    assert_eq!(pattern.key().as_str(), r"^http://x\.com/\d+$");
}

#[test]
fn builtin_catalog_is_public() {
    let catalog = oembed::registry::load_catalog().unwrap();
    assert!(catalog.names().contains(&"Youtube"));
}
