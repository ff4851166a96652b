//! Range expression and the parse-time expansions that produce it

use std::cmp::Ordering;
use std::fmt;

use super::version::Version;

/// Which slot of a partial version carried the wildcard token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wildcard {
    Minor,
    Incremental,
}

/// An interval of acceptable versions with per-bound inclusivity.
///
/// The display text is the span the range was parsed from (or a synthesized
/// rendering for programmatic construction) and takes no part in equality.
#[derive(Debug, Clone)]
pub struct Range {
    lower: Version,
    upper: Version,
    lower_inclusive: bool,
    upper_inclusive: bool,
    text: String,
}

impl Range {
    /// Inclusive interval between two explicit endpoints.
    ///
    /// Endpoints may be given in either order; they are swapped so that
    /// `lower <= upper` always holds.
    pub fn between(a: Version, b: Version) -> Self {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let text = format!("{lower} - {upper}");
        Range {
            lower,
            upper,
            lower_inclusive: true,
            upper_inclusive: true,
            text,
        }
    }

    /// Patch-level freedom: `~1.2.3` accepts everything from 1.2.3 up to,
    /// but not including, 1.3.0. An unspecified minor behaves as zero, so
    /// `~1` is the same constraint as `~1.0`.
    pub fn tilde(version: Version) -> Self {
        let upper = Version::partial(
            version.major(),
            Some(version.minor().unwrap_or(0) + 1),
            Some(0),
        );
        let text = format!("~{}", version.text());
        Range {
            lower: version,
            upper,
            lower_inclusive: true,
            upper_inclusive: false,
            text,
        }
    }

    /// X-range expansion: the wildcard slot and everything after it may take
    /// any value. The version carries zeros in the wildcard slots.
    pub(crate) fn expand_wildcard(version: Version, position: Wildcard) -> Self {
        let (lower, upper) = match position {
            Wildcard::Minor => (
                Version::partial(version.major(), Some(0), Some(0)),
                Version::partial(version.major() + 1, Some(0), Some(0)),
            ),
            Wildcard::Incremental => {
                let minor = version.minor().unwrap_or(0);
                (
                    Version::partial(version.major(), Some(minor), Some(0)),
                    Version::partial(version.major(), Some(minor + 1), Some(0)),
                )
            }
        };
        let text = version.text().to_string();
        Range {
            lower,
            upper,
            lower_inclusive: true,
            upper_inclusive: false,
            text,
        }
    }

    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn upper(&self) -> &Version {
        &self.upper
    }

    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    pub fn matches(&self, candidate: &Version) -> bool {
        let above_lower = match candidate.cmp(&self.lower) {
            Ordering::Greater => true,
            Ordering::Equal => self.lower_inclusive,
            Ordering::Less => false,
        };
        if !above_lower {
            return false;
        }
        match candidate.cmp(&self.upper) {
            Ordering::Less => true,
            Ordering::Equal => self.upper_inclusive,
            Ordering::Greater => false,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower
            && self.upper == other.upper
            && self.lower_inclusive == other.lower_inclusive
            && self.upper_inclusive == other.upper_inclusive
    }
}

impl Eq for Range {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_is_inclusive() {
        let range = Range::between(Version::new(1, 0, 0), Version::new(2, 0, 0));
        assert!(range.matches(&Version::new(1, 0, 0)));
        assert!(range.matches(&Version::new(1, 5, 0)));
        assert!(range.matches(&Version::new(2, 0, 0)));
        assert!(!range.matches(&Version::new(2, 0, 1)));
        assert!(!range.matches(&Version::new(0, 9, 9)));
    }

    #[test]
    fn test_between_swaps_endpoints() {
        let range = Range::between(Version::new(2, 0, 0), Version::new(1, 0, 0));
        assert_eq!(range.lower(), &Version::new(1, 0, 0));
        assert_eq!(range.upper(), &Version::new(2, 0, 0));
        assert!(range.matches(&Version::new(1, 5, 0)));
    }

    #[test]
    fn test_tilde_bounds() {
        let range = Range::tilde(Version::new(1, 2, 3));
        assert!(range.matches(&Version::new(1, 2, 3)));
        assert!(range.matches(&Version::new(1, 2, 9)));
        assert!(!range.matches(&Version::new(1, 3, 0)));
        assert!(!range.matches(&Version::new(1, 2, 2)));

        // ~1 behaves as ~1.0.
        let range = Range::tilde(Version::partial(1, None, None));
        assert!(range.matches(&Version::new(1, 0, 9)));
        assert!(!range.matches(&Version::new(1, 1, 0)));
    }

    #[test]
    fn test_wildcard_expansion() {
        let range = Range::expand_wildcard(Version::partial(1, Some(0), None), Wildcard::Minor);
        assert!(range.matches(&Version::new(1, 0, 0)));
        assert!(range.matches(&Version::new(1, 9, 9)));
        assert!(!range.matches(&Version::new(2, 0, 0)));

        let range =
            Range::expand_wildcard(Version::partial(1, Some(2), Some(0)), Wildcard::Incremental);
        assert!(range.matches(&Version::new(1, 2, 0)));
        assert!(range.matches(&Version::new(1, 2, 999)));
        assert!(!range.matches(&Version::new(1, 3, 0)));
    }
}
