//! Recursive-descent parser for version-range expressions
//!
//! Grammar, highest to lowest binding:
//!
//! ```text
//! expression := factor ('||' factor)*
//! factor     := range | term
//! range      := term '-'? term
//! term       := version | uri | '*'
//! version    := operator? 'v'? major ('.' minor ('.' incremental tail?)?)?
//! tail       := ('-' build tag?) | tag
//! ```
//!
//! Ranges bind tighter than `||`. A range whose two sides are both concrete
//! versions becomes an inclusive interval; any other combination degrades to
//! a conjunction of the two sides. Backtracking is explicit: the two
//! ambiguous spots (range continuation, term alternatives) save and restore
//! the cursor position.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SemverError;
use crate::expr::range::Wildcard;
use crate::expr::version::VersionBuilder;
use crate::expr::{Range, Relational, RelationalOp, Semver, UrlExpression, Version};

lazy_static! {
    // Longest protocol alternative first, so git+https is never read as git
    // followed by stray text.
    static ref URI_RE: Regex = Regex::new(
        r"^(?:git\+ssh|git\+https|git\+http|https|http|git)://[0-9A-Za-z+&@/%#?=~_|!:,.;-]+"
    )
    .unwrap();
}

pub(crate) fn parse(text: &str) -> Result<Semver, SemverError> {
    if text.is_empty() {
        return Ok(Semver::Any);
    }
    if text == "latest" {
        return Ok(Semver::Latest);
    }

    let mut cur = Cursor::new(text);
    let mut expr = factor(&mut cur)?;
    loop {
        let mark = cur.pos;
        cur.skip_ws();
        if !cur.eat_str("||") {
            cur.pos = mark;
            break;
        }
        cur.skip_ws();
        let right = factor(&mut cur)?;
        expr = Semver::Or(Box::new(expr), Box::new(right));
    }
    if cur.pos != text.len() {
        return Err(cur.malformed("'||' or end of input"));
    }
    Ok(expr)
}

/// Parse a bare concrete version as used for candidates: no prefix operator,
/// no wildcards, whole input consumed.
pub(crate) fn parse_candidate(text: &str) -> Result<Version, SemverError> {
    let mut cur = Cursor::new(text);
    let parsed = version_core(&mut cur)?;
    if cur.pos != text.len() {
        return Err(cur.malformed("end of version"));
    }
    if parsed.wildcard.is_some() {
        return Err(SemverError::MalformedExpression {
            position: 0,
            expected: "a concrete version without wildcards".to_string(),
            found: format!("\"{text}\""),
        });
    }
    Ok(parsed.version)
}

fn factor(cur: &mut Cursor) -> Result<Semver, SemverError> {
    let start = cur.pos;
    let left = term(cur)?;

    // Range continuation: a second term, with an optional dash between.
    let mark = cur.pos;
    cur.skip_ws();
    cur.eat(b'-');
    cur.skip_ws();
    match term(cur) {
        Ok(right) => {
            let text = cur.slice(start, cur.pos);
            Ok(combine(left, right, text))
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(_) => {
            cur.pos = mark;
            Ok(left)
        }
    }
}

// Two concrete endpoints form a literal interval; any compound side turns
// the pair into a conjunction instead.
fn combine(left: Semver, right: Semver, text: &str) -> Semver {
    match (left, right) {
        (Semver::Version(a), Semver::Version(b)) => {
            Semver::Range(Range::between(a, b).with_text(text))
        }
        (left, right) => Semver::And(Box::new(left), Box::new(right)),
    }
}

fn term(cur: &mut Cursor) -> Result<Semver, SemverError> {
    let mark = cur.pos;
    match version(cur) {
        Ok(parsed) => return Ok(parsed),
        Err(e) if e.is_fatal() => return Err(e),
        Err(_) => cur.pos = mark,
    }
    match uri(cur) {
        Ok(parsed) => return Ok(parsed),
        Err(e) if e.is_fatal() => return Err(e),
        Err(_) => cur.pos = mark,
    }
    if cur.eat(b'*') {
        return Ok(Semver::Any);
    }
    Err(cur.malformed("a version, URI, or '*'"))
}

enum Prefix {
    Rel(RelationalOp),
    Tilde,
}

fn version(cur: &mut Cursor) -> Result<Semver, SemverError> {
    let prefix = operator(cur);
    cur.skip_ws();
    let start = cur.pos;
    let parsed = version_core(cur)?;

    if let Some(position) = parsed.wildcard {
        if prefix.is_some() {
            // An operator needs a single concrete endpoint to act on.
            return Err(SemverError::MalformedExpression {
                position: start,
                expected: "a concrete version after an operator".to_string(),
                found: format!("\"{}\"", parsed.version.text()),
            });
        }
        return Ok(Semver::Range(Range::expand_wildcard(
            parsed.version,
            position,
        )));
    }

    Ok(match prefix {
        None => Semver::Version(parsed.version),
        Some(Prefix::Tilde) => Semver::Range(Range::tilde(parsed.version)),
        Some(Prefix::Rel(op)) => Semver::Relational(Relational::new(op, parsed.version)),
    })
}

struct ParsedVersion {
    version: Version,
    wildcard: Option<Wildcard>,
}

fn version_core(cur: &mut Cursor) -> Result<ParsedVersion, SemverError> {
    let start = cur.pos;
    cur.eat(b'v');
    let mut builder = VersionBuilder::default();
    let mut wildcard = None;

    match number(cur)? {
        Some(Number::Value(major)) => builder.major = major,
        Some(Number::Wildcard) => {
            return Err(SemverError::InvalidMajorWildcard {
                position: cur.pos.saturating_sub(1),
            })
        }
        None => return Err(cur.malformed("a version number")),
    }

    let mark = cur.pos;
    if cur.eat(b'.') {
        match number(cur)? {
            Some(Number::Value(minor)) => builder.minor = Some(minor),
            Some(Number::Wildcard) => {
                builder.minor = Some(0);
                wildcard = Some(Wildcard::Minor);
            }
            // A dangling dot is not part of the version.
            None => {
                cur.pos = mark;
                let text = cur.slice(start, cur.pos);
                return Ok(ParsedVersion {
                    version: builder.finish(Some(text)),
                    wildcard,
                });
            }
        }

        let mark = cur.pos;
        if cur.eat(b'.') {
            match number(cur)? {
                Some(Number::Value(incremental)) => {
                    builder.incremental = Some(incremental);
                    tail(cur, &mut builder);
                }
                Some(Number::Wildcard) => {
                    builder.incremental = Some(0);
                    if wildcard.is_none() {
                        wildcard = Some(Wildcard::Incremental);
                    }
                    tail(cur, &mut builder);
                }
                None => cur.pos = mark,
            }
        }
    }

    let text = cur.slice(start, cur.pos);
    Ok(ParsedVersion {
        version: builder.finish(Some(text)),
        wildcard,
    })
}

enum Number {
    Value(u64),
    Wildcard,
}

fn number(cur: &mut Cursor) -> Result<Option<Number>, SemverError> {
    match cur.peek() {
        Some(b'x') | Some(b'X') => {
            cur.bump();
            Ok(Some(Number::Wildcard))
        }
        Some(b'0'..=b'9') => {
            let start = cur.pos;
            while matches!(cur.peek(), Some(b'0'..=b'9')) {
                cur.bump();
            }
            let digits = cur.slice(start, cur.pos);
            let value = digits
                .parse::<u64>()
                .map_err(|_| SemverError::MalformedExpression {
                    position: start,
                    expected: "a version number that fits in 64 bits".to_string(),
                    found: format!("\"{digits}\""),
                })?;
            Ok(Some(Number::Value(value)))
        }
        _ => Ok(None),
    }
}

fn tail(cur: &mut Cursor, builder: &mut VersionBuilder) {
    let mark = cur.pos;
    if cur.eat(b'-') {
        if let Some(build) = digits(cur) {
            builder.build = Some(build);
            if let Some(tag) = tag(cur) {
                builder.tag = Some(tag);
            }
            return;
        }
        // The dash was the start of a tag, not a build qualifier.
        cur.pos = mark;
    }
    if let Some(tag) = tag(cur) {
        builder.tag = Some(tag);
    }
}

fn digits(cur: &mut Cursor) -> Option<u64> {
    let start = cur.pos;
    while matches!(cur.peek(), Some(b'0'..=b'9')) {
        cur.bump();
    }
    if cur.pos == start {
        return None;
    }
    match cur.slice(start, cur.pos).parse() {
        Ok(value) => Some(value),
        Err(_) => {
            cur.pos = start;
            None
        }
    }
}

fn tag(cur: &mut Cursor) -> Option<String> {
    let start = cur.pos;
    while matches!(
        cur.peek(),
        Some(b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'-')
    ) {
        cur.bump();
    }
    if cur.pos == start {
        return None;
    }
    let raw = cur.slice(start, cur.pos).trim_start_matches(['-', '.']);
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn operator(cur: &mut Cursor) -> Option<Prefix> {
    if cur.eat_str(">=") {
        Some(Prefix::Rel(RelationalOp::GtEq))
    } else if cur.eat(b'>') {
        Some(Prefix::Rel(RelationalOp::Gt))
    } else if cur.eat_str("<=") {
        Some(Prefix::Rel(RelationalOp::LtEq))
    } else if cur.eat(b'<') {
        Some(Prefix::Rel(RelationalOp::Lt))
    } else if cur.eat(b'=') {
        Some(Prefix::Rel(RelationalOp::Eq))
    } else if cur.eat(b'~') {
        Some(Prefix::Tilde)
    } else {
        None
    }
}

fn uri(cur: &mut Cursor) -> Result<Semver, SemverError> {
    match URI_RE.find(cur.rest()) {
        Some(found) => {
            let text = cur.take(found.end());
            Ok(Semver::Url(UrlExpression::new(text)?))
        }
        None => Err(cur.malformed("a URI")),
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    fn take(&mut self, len: usize) -> &'a str {
        let taken = &self.input[self.pos..self.pos + len];
        self.pos += len;
        taken
    }

    fn malformed(&self, expected: &str) -> SemverError {
        SemverError::MalformedExpression {
            position: self.pos,
            expected: expected.to_string(),
            found: match self.rest().chars().next() {
                Some(c) => format!("'{c}'"),
                None => "end of input".to_string(),
            },
        }
    }
}
