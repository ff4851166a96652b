//! The expression tree produced by parsing a constraint string

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub(crate) mod locator;
pub(crate) mod range;
pub(crate) mod relational;
pub(crate) mod version;

pub use locator::UrlExpression;
pub use range::Range;
pub use relational::{Relational, RelationalOp};
pub use version::Version;

use crate::error::SemverError;

/// A parsed version-constraint expression.
///
/// Trees are immutable once constructed; compound variants exclusively own
/// their children, so a tree is `Send + Sync` and safe to evaluate from many
/// threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Semver {
    /// Matches every concrete version (`*` or the empty constraint).
    Any,
    /// The literal keyword `latest`. Matches nothing by comparison; a
    /// resolver maps it to the highest known candidate (see
    /// [`crate::select::max_satisfying`]).
    Latest,
    Version(Version),
    Range(Range),
    Relational(Relational),
    And(Box<Semver>, Box<Semver>),
    Or(Box<Semver>, Box<Semver>),
    Url(UrlExpression),
}

impl Semver {
    /// Parse a constraint expression.
    ///
    /// The empty string parses to [`Semver::Any`] and the literal `latest`
    /// to [`Semver::Latest`]; everything else goes through the grammar.
    pub fn parse(text: &str) -> Result<Self, SemverError> {
        crate::parser::parse(text)
    }

    /// Whether the candidate satisfies this expression.
    pub fn matches(&self, candidate: &Version) -> bool {
        match self {
            Semver::Any => true,
            Semver::Latest => false,
            Semver::Version(version) => version.matches(candidate),
            Semver::Range(range) => range.matches(candidate),
            Semver::Relational(relational) => relational.matches(candidate),
            Semver::And(left, right) => left.matches(candidate) && right.matches(candidate),
            Semver::Or(left, right) => left.matches(candidate) || right.matches(candidate),
            Semver::Url(url) => url.matches(candidate),
        }
    }

    /// Total-order comparison, defined only when both sides are concrete
    /// versions. Anything else, locators in particular, is not orderable.
    pub fn compare(&self, other: &Semver) -> Result<Ordering, SemverError> {
        match (self, other) {
            (Semver::Version(a), Semver::Version(b)) => Ok(a.cmp(b)),
            _ => Err(SemverError::UnsupportedComparison {
                expr: self.to_string(),
            }),
        }
    }

    /// Round-trippable rendering: parsing the returned text yields a
    /// structurally equivalent tree.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semver::Any => f.write_str("*"),
            Semver::Latest => f.write_str("latest"),
            Semver::Version(version) => fmt::Display::fmt(version, f),
            Semver::Range(range) => fmt::Display::fmt(range, f),
            Semver::Relational(relational) => fmt::Display::fmt(relational, f),
            Semver::And(left, right) => write!(f, "{left} {right}"),
            Semver::Or(left, right) => write!(f, "{left} || {right}"),
            Semver::Url(url) => fmt::Display::fmt(url, f),
        }
    }
}

impl FromStr for Semver {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semver::parse(s)
    }
}
