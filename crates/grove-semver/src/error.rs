//! Error taxonomy for parsing and comparison

use thiserror::Error;

/// Errors raised while parsing a constraint expression or comparing
/// expressions.
#[derive(Error, Debug, Clone)]
pub enum SemverError {
    /// The grammar could not derive a result. Reported once, at the first
    /// failure point; there is no multi-error aggregation.
    #[error("malformed version expression at offset {position}: expected {expected}, found {found}")]
    MalformedExpression {
        position: usize,
        expected: String,
        found: String,
    },

    /// A wildcard appeared in the major slot. The major component must
    /// disambiguate compatibility and cannot be elided.
    #[error("wildcard is not allowed for the major version (offset {position})")]
    InvalidMajorWildcard { position: usize },

    #[error("invalid uri \"{uri}\"")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// Ordering is undefined for locator-based dependencies.
    #[error("unsupported comparison for \"{expr}\"")]
    UnsupportedComparison { expr: String },
}

impl SemverError {
    /// Errors that must not be swallowed by grammar backtracking.
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(
            self,
            SemverError::InvalidMajorWildcard { .. } | SemverError::InvalidUri { .. }
        )
    }
}
