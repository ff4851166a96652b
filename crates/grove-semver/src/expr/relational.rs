//! Single-sided relational bounds

use std::cmp::Ordering;
use std::fmt;

use super::version::Version;

/// Comparison operators usable as a version prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOp {
    Eq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl RelationalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationalOp::Eq => "=",
            RelationalOp::Gt => ">",
            RelationalOp::GtEq => ">=",
            RelationalOp::Lt => "<",
            RelationalOp::LtEq => "<=",
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            RelationalOp::Eq => ordering == Ordering::Equal,
            RelationalOp::Gt => ordering == Ordering::Greater,
            RelationalOp::GtEq => ordering != Ordering::Less,
            RelationalOp::Lt => ordering == Ordering::Less,
            RelationalOp::LtEq => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator-prefixed version: `>=1.2.0`, `<2`, `=1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relational {
    op: RelationalOp,
    version: Version,
}

impl Relational {
    pub fn new(op: RelationalOp, version: Version) -> Self {
        Relational { op, version }
    }

    pub fn op(&self) -> RelationalOp {
        self.op
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The candidate's position in the total order, checked against the
    /// operator. Note that `=` compares under the total order (unspecified
    /// components ordering as zero), unlike a bare version constraint whose
    /// unspecified components are wildcards.
    pub fn matches(&self, candidate: &Version) -> bool {
        self.op.accepts(candidate.cmp(&self.version))
    }
}

impl fmt::Display for Relational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_acceptance() {
        let candidate = Version::new(1, 2, 3);

        assert!(Relational::new(RelationalOp::Eq, Version::new(1, 2, 3)).matches(&candidate));
        assert!(!Relational::new(RelationalOp::Eq, Version::new(1, 2, 4)).matches(&candidate));

        assert!(Relational::new(RelationalOp::Gt, Version::new(1, 2, 2)).matches(&candidate));
        assert!(!Relational::new(RelationalOp::Gt, Version::new(1, 2, 3)).matches(&candidate));

        assert!(Relational::new(RelationalOp::GtEq, Version::new(1, 2, 3)).matches(&candidate));
        assert!(Relational::new(RelationalOp::LtEq, Version::new(1, 2, 3)).matches(&candidate));

        assert!(Relational::new(RelationalOp::Lt, Version::new(1, 2, 4)).matches(&candidate));
        assert!(!Relational::new(RelationalOp::Lt, Version::new(1, 2, 3)).matches(&candidate));
    }

    #[test]
    fn test_eq_uses_total_order() {
        // =1.2 pins the unspecified components to zero.
        let relational = Relational::new(RelationalOp::Eq, Version::partial(1, Some(2), None));
        assert!(relational.matches(&Version::new(1, 2, 0)));
        assert!(!relational.matches(&Version::new(1, 2, 5)));
    }

    #[test]
    fn test_display() {
        let relational = Relational::new(RelationalOp::GtEq, Version::new(1, 2, 0));
        assert_eq!(relational.to_string(), ">=1.2.0");
    }
}
