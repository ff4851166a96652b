//! Candidate selection helpers
//!
//! String-level conveniences used by a package resolver: parse a constraint
//! once, then decide which of the available concrete versions are
//! acceptable. Versions that fail to parse as concrete candidates are
//! silently skipped, matching how a resolver treats unknown entries in a
//! registry listing.

use std::str::FromStr;

use crate::expr::{Semver, Version};

/// Whether `version` satisfies `constraint`. Returns false when either side
/// fails to parse.
pub fn satisfies(version: &str, constraint: &str) -> bool {
    let Ok(candidate) = Version::from_str(version) else {
        return false;
    };
    let Ok(expr) = Semver::parse(constraint) else {
        return false;
    };
    expr.matches(&candidate)
}

/// All versions satisfying the constraint, in input order.
pub fn satisfied_by<'a>(versions: &[&'a str], constraint: &str) -> Vec<&'a str> {
    let Ok(expr) = Semver::parse(constraint) else {
        return Vec::new();
    };
    versions
        .iter()
        .copied()
        .filter(|version| {
            Version::from_str(version)
                .map(|candidate| expr.matches(&candidate))
                .unwrap_or(false)
        })
        .collect()
}

/// The highest version satisfying the constraint.
///
/// The `latest` keyword matches nothing by comparison, so it is resolved
/// here: every parseable candidate qualifies and the highest one wins.
pub fn max_satisfying<'a>(versions: &[&'a str], constraint: &str) -> Option<&'a str> {
    let expr = Semver::parse(constraint).ok()?;
    let mut best: Option<(Version, &str)> = None;
    for &raw in versions {
        let Ok(candidate) = Version::from_str(raw) else {
            continue;
        };
        let accepted = match &expr {
            Semver::Latest => true,
            other => other.matches(&candidate),
        };
        if accepted && best.as_ref().map_or(true, |(top, _)| candidate > *top) {
            best = Some((candidate, raw));
        }
    }
    best.map(|(_, raw)| raw)
}

/// Sort versions ascending under the total order.
pub fn sort(versions: &[&str]) -> Vec<String> {
    usort(versions, true)
}

/// Sort versions descending under the total order.
pub fn rsort(versions: &[&str]) -> Vec<String> {
    usort(versions, false)
}

fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
    let mut parsed: Vec<(Version, usize)> = versions
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| Version::from_str(raw).ok().map(|parsed| (parsed, index)))
        .collect();

    parsed.sort_by(|(a, _), (b, _)| {
        let ordering = a.cmp(b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    parsed
        .into_iter()
        .map(|(_, index)| versions[index].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies() {
        assert!(satisfies("1.2.3", "~1.2.1"));
        assert!(satisfies("1.2.3", "*"));
        assert!(satisfies("v1.2.3", "1.2.x"));
        assert!(satisfies("1.9.9", ">=1.0.0 <2.0.0"));

        assert!(!satisfies("2.0.0", ">=1.0.0 <2.0.0"));
        assert!(!satisfies("1.0.0", "latest"));

        // Unparseable input on either side is a clean false.
        assert!(!satisfies("not a version", "*"));
        assert!(!satisfies("1.2.3", ">="));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = ["1.0.0", "1.0.9", "1.1.0", "2.0.0"];
        assert_eq!(satisfied_by(&versions, "~1.0"), vec!["1.0.0", "1.0.9"]);

        let versions = ["1.0", "1.1", "2.9", "3.0", "4.0", "4.1"];
        assert_eq!(
            satisfied_by(&versions, ">1.0 <3.0 || >=4.0"),
            vec!["1.1", "2.9", "4.0", "4.1"]
        );

        // The empty constraint accepts everything.
        assert_eq!(satisfied_by(&versions, ""), versions.to_vec());

        // Unparseable candidates are skipped, bad constraints select nothing.
        assert_eq!(satisfied_by(&["1.0.0", "junk"], "*"), vec!["1.0.0"]);
        assert!(satisfied_by(&versions, ">=").is_empty());
    }

    #[test]
    fn test_max_satisfying() {
        let versions = ["1.0.0", "1.0.9", "1.1.0"];
        assert_eq!(max_satisfying(&versions, "~1.0"), Some("1.0.9"));
        assert_eq!(max_satisfying(&versions, "*"), Some("1.1.0"));
        assert_eq!(max_satisfying(&versions, "2.x"), None);

        // latest resolves to the highest known candidate.
        let versions = ["0.9.0", "1.4.2", "1.2.0"];
        assert_eq!(max_satisfying(&versions, "latest"), Some("1.4.2"));
        assert_eq!(max_satisfying(&[], "latest"), None);
    }

    #[test]
    fn test_sort() {
        let versions = ["1.0", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        assert_eq!(
            sort(&versions),
            vec!["0.1", "1.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );

        // Entries that are not concrete versions are dropped.
        assert_eq!(sort(&["1.0", "junk", "0.5"]), vec!["0.5", "1.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = ["1.0", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        assert_eq!(
            rsort(&versions),
            vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1"]
        );
    }
}
