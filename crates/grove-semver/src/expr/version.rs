//! Version value and total ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SemverError;

/// A concrete, possibly partial, version number.
///
/// Unset trailing components are "unspecified" rather than zero: they act as
/// wildcards when the version is used as a constraint, but order as zero when
/// two versions are compared. The raw text consumed by the parser is kept for
/// display and diagnostics and takes no part in equality.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    incremental: Option<u64>,
    build: Option<u64>,
    tag: Option<String>,
    text: String,
}

impl Version {
    /// A fully specified `major.minor.incremental` version.
    pub fn new(major: u64, minor: u64, incremental: u64) -> Self {
        Self::partial(major, Some(minor), Some(incremental))
    }

    /// A version with unspecified trailing components.
    pub fn partial(major: u64, minor: Option<u64>, incremental: Option<u64>) -> Self {
        VersionBuilder {
            major,
            minor,
            incremental,
            build: None,
            tag: None,
        }
        .finish(None)
    }

    /// Attach a numeric build qualifier (`1.2.3-55`).
    pub fn with_build(mut self, build: u64) -> Self {
        self.build = Some(build);
        self.text = self.render();
        self
    }

    /// Attach a tag qualifier (`1.2.3-beta`).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self.text = self.render();
        self
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn incremental(&self) -> Option<u64> {
        self.incremental
    }

    pub fn build(&self) -> Option<u64> {
        self.build
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The raw input span this version was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Component-wise equality against a candidate. Every component this
    /// version specifies must match; unspecified trailing components and an
    /// unspecified tag accept anything.
    pub fn matches(&self, candidate: &Version) -> bool {
        if self.major != candidate.major {
            return false;
        }
        if let Some(minor) = self.minor {
            if minor != candidate.minor.unwrap_or(0) {
                return false;
            }
        }
        if let Some(incremental) = self.incremental {
            if incremental != candidate.incremental.unwrap_or(0) {
                return false;
            }
        }
        if let Some(build) = self.build {
            if build != candidate.build.unwrap_or(0) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if candidate.tag.as_deref() != Some(tag.as_str()) {
                return false;
            }
        }
        true
    }

    fn render(&self) -> String {
        let mut out = self.major.to_string();
        if let Some(minor) = self.minor {
            out.push('.');
            out.push_str(&minor.to_string());
            if let Some(incremental) = self.incremental {
                out.push('.');
                out.push_str(&incremental.to_string());
            }
        }
        if let Some(build) = self.build {
            out.push('-');
            out.push_str(&build.to_string());
        }
        if let Some(tag) = &self.tag {
            out.push('-');
            out.push_str(tag);
        }
        out
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.unwrap_or(0).cmp(&other.minor.unwrap_or(0)))
            .then_with(|| {
                self.incremental
                    .unwrap_or(0)
                    .cmp(&other.incremental.unwrap_or(0))
            })
            .then_with(|| self.build.unwrap_or(0).cmp(&other.build.unwrap_or(0)))
            .then_with(|| cmp_tags(self.tag.as_deref(), other.tag.as_deref()))
    }
}

// Tag precedence: a tagged version orders before its untagged counterpart
// (1.2.3-beta < 1.2.3); two tags compare lexicographically.
fn cmp_tags(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_candidate(s)
    }
}

/// Parse-time accumulator for version components, converted into an
/// immutable [`Version`] once the production completes.
#[derive(Debug, Default)]
pub(crate) struct VersionBuilder {
    pub(crate) major: u64,
    pub(crate) minor: Option<u64>,
    pub(crate) incremental: Option<u64>,
    pub(crate) build: Option<u64>,
    pub(crate) tag: Option<String>,
}

impl VersionBuilder {
    pub(crate) fn finish(self, raw: Option<&str>) -> Version {
        let mut version = Version {
            major: self.major,
            minor: self.minor,
            incremental: self.incremental,
            build: self.build,
            tag: self.tag,
            text: String::new(),
        };
        version.text = match raw {
            Some(raw) => raw.to_string(),
            None => version.render(),
        };
        version
    }
}
