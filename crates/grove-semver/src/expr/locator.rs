//! Exact-match VCS/HTTP dependency locators

use std::fmt;

use url::Url;

use super::version::Version;
use crate::error::SemverError;

/// A VCS/HTTP dependency locator.
///
/// Matching is exact text equality against the candidate's raw text; a
/// numeric candidate therefore never matches. Ordering a locator is
/// unsupported. The original span is kept verbatim so that rendering
/// reproduces the input exactly, independent of URL normalization.
#[derive(Debug, Clone)]
pub struct UrlExpression {
    text: String,
    uri: Url,
}

impl UrlExpression {
    pub fn new(text: &str) -> Result<Self, SemverError> {
        let uri = Url::parse(text).map_err(|source| SemverError::InvalidUri {
            uri: text.to_string(),
            source,
        })?;
        Ok(UrlExpression {
            text: text.to_string(),
            uri,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &Url {
        &self.uri
    }

    pub fn matches(&self, candidate: &Version) -> bool {
        self.text == candidate.text()
    }
}

impl fmt::Display for UrlExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for UrlExpression {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for UrlExpression {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        let url = UrlExpression::new("git+https://example.com/repo.git").unwrap();
        assert_eq!(url.as_str(), "git+https://example.com/repo.git");
        assert_eq!(url.to_string(), "git+https://example.com/repo.git");
    }

    #[test]
    fn test_invalid_uri_is_rejected() {
        let err = UrlExpression::new("https://example.com:notaport").unwrap_err();
        assert!(matches!(err, SemverError::InvalidUri { .. }));
    }

    #[test]
    fn test_numeric_candidate_never_matches() {
        let url = UrlExpression::new("git://example.com/repo.git").unwrap();
        assert!(!url.matches(&Version::new(1, 0, 0)));
    }
}
