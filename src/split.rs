//! Splits the combined package source at the lone `/` line.
//!
//! Text before the first separator is the specification, everything after
//! it is the body. Further `/` lines are left inside the body untouched.
//! That includes the usual trailing `/` terminator after the body, which
//! stays at the end of the body text.

use crate::model::{Section, SectionKind};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^/[ \t\r]*$").unwrap());

#[derive(Debug, PartialEq, Eq)]
pub enum SplitError {
    /// No line consisting solely of `/` was found.
    MissingSeparator,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::MissingSeparator => write!(
                f,
                "no line consisting solely of \"/\" separates the specification from the body"
            ),
        }
    }
}

impl std::error::Error for SplitError {}

/// Split `text` into (specification, body), both trimmed.
pub fn split_package(text: &str) -> Result<(Section, Section), SplitError> {
    let sep = RE_SEPARATOR
        .find(text)
        .ok_or(SplitError::MissingSeparator)?;

    let spec = Section {
        kind: SectionKind::Specification,
        text: text[..sep.start()].trim().to_string(),
    };
    let body = Section {
        kind: SectionKind::Body,
        text: text[sep.end()..].trim().to_string(),
    };
    Ok((spec, body))
}
