//! URL and vocabulary resolution helpers shared by the readers.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Resolves a possibly-relative URL reference against a base URL.
///
/// Returns `None` when the base cannot be parsed or the reference cannot be
/// resolved against it; callers decide how to degrade.
pub(crate) fn resolve_url(base: &str, reference: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    base.join(reference).ok().map(String::from)
}

/// Returns the vocabulary identifier for a list of type URLs.
///
/// The identifier is derived from the first type: everything up to and
/// including the first `#` if present, otherwise up to and including the
/// last `/`, otherwise the whole URL with a `/` appended. An empty type
/// list yields the empty string, leaving property names unqualified.
///
/// https://www.w3.org/TR/2018/WD-microdata-20180426/#dfn-vocabulary-identifier
pub(crate) fn vocabulary_identifier(types: &[String]) -> String {
    let first = match types.first() {
        Some(first) => first,
        None => return String::new(),
    };

    if let Some(pos) = first.find('#') {
        return first[..=pos].to_string();
    }

    if let Some(pos) = first.rfind('/') {
        return first[..=pos].to_string();
    }

    format!("{first}/")
}

/// Validates a vocabulary URL from a JSON-LD `@context` string.
///
/// The URL must be absolute and carry a host; parsing normalizes an empty
/// path to `/`, so `http://schema.org` comes back as `http://schema.org/`.
/// Anything else yields `None` and the reader proceeds without a vocabulary.
pub(crate) fn normalize_vocabulary_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    if !parsed.has_host() {
        return None;
    }

    Some(parsed.into())
}

/// Collapses whitespace runs to a single space and trims the ends.
///
/// Element text content carries the artificial whitespace of HTML
/// formatting; property values should not.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_identifier_fragment() {
        let types = vec!["http://example.com/vocab#Thing".to_string()];
        assert_eq!(vocabulary_identifier(&types), "http://example.com/vocab#");
    }

    #[test]
    fn test_vocabulary_identifier_path() {
        let types = vec!["http://schema.org/Product".to_string()];
        assert_eq!(vocabulary_identifier(&types), "http://schema.org/");
    }

    #[test]
    fn test_vocabulary_identifier_last_slash() {
        let types = vec!["http://example.com/novocab".to_string()];
        assert_eq!(vocabulary_identifier(&types), "http://example.com/");
    }

    #[test]
    fn test_vocabulary_identifier_no_separator() {
        let types = vec!["urn:example:vocab".to_string()];
        assert_eq!(vocabulary_identifier(&types), "urn:example:vocab/");
    }

    #[test]
    fn test_vocabulary_identifier_empty() {
        assert_eq!(vocabulary_identifier(&[]), "");
    }

    #[test]
    fn test_normalize_vocabulary_url_adds_path() {
        assert_eq!(
            normalize_vocabulary_url("http://schema.org"),
            Some("http://schema.org/".to_string())
        );
    }

    #[test]
    fn test_normalize_vocabulary_url_rejects_garbage() {
        assert_eq!(normalize_vocabulary_url("not a url"), None);
        assert_eq!(normalize_vocabulary_url("mailto:jane@example.com"), None);
    }

    #[test]
    fn test_resolve_url_relative() {
        assert_eq!(
            resolve_url("https://example.com/path/to/page", "/logo.png"),
            Some("https://example.com/logo.png".to_string())
        );
    }

    #[test]
    fn test_resolve_url_absolute_reference() {
        assert_eq!(
            resolve_url("https://example.com/", "https://other.org/a"),
            Some("https://other.org/a".to_string())
        );
    }

    #[test]
    fn test_resolve_url_bad_base() {
        assert_eq!(resolve_url("not a url", "/logo.png"), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Jane\n\t Doe  "), "Jane Doe");
    }
}
