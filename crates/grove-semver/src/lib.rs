//! Version constraint parsing and matching for the grove package resolver
//!
//! This crate parses version-range expressions (`>=1.2.0 <2.0.0 || ~1.0`,
//! `1.2.x`, `*`, `latest`, VCS/HTTP locators) into an immutable expression
//! tree and evaluates whether concrete versions satisfy it.

pub mod expr;
mod error;
mod parser;
pub mod select;

pub use error::SemverError;
pub use expr::{Range, Relational, RelationalOp, Semver, UrlExpression, Version};
