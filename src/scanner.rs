//! Declaration scanner — finds PROCEDURE / FUNCTION headers in raw text.
//!
//! Lexical matching only. Parameter lists containing nested parentheses,
//! declarations hidden in comments and similar shapes are not understood;
//! whatever the patterns miss is simply left undocumented.

use crate::model::{Declaration, Parameter};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// A header starts at the beginning of the text or after a line break (plus
// indentation). Optional trailing parts only swallow the whitespace in
// front of them when they are actually present.
static RE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?is)(?P<prefix>\n\s*|^)",
        r"(?P<keyword>function|procedure)\s+(?P<name>\w+)\s*",
        r"\((?P<params>.*?)\)",
        r"(?:\s*(?P<ret>return\s+(?P<rtype>(?:\w\.?)+)))?",
        r"(?:\s*(?P<pipelined>pipelined)\b)?",
        r"(?:\s*(?P<is_as>is|as)\b)?",
    ))
    .unwrap()
});

static RE_PARAMETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(\w+)\s+(\w+[\s\w]*)").unwrap());

/// Source of declaration matches for the annotator.
///
/// Implementations yield non-overlapping matches from left to right, with
/// spans pointing into `text` itself.
pub trait DeclarationScanner {
    fn scan<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item = Declaration<'t>> + 't>;
}

/// Pattern-based scanner.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexScanner;

impl DeclarationScanner for RegexScanner {
    fn scan<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item = Declaration<'t>> + 't> {
        Box::new(RE_DECLARATION.captures_iter(text).map(to_declaration))
    }
}

fn to_declaration<'t>(caps: Captures<'t>) -> Declaration<'t> {
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    Declaration {
        span: caps.get(0).map_or(0..0, |m| m.range()),
        prefix: group("prefix").unwrap_or_default(),
        keyword: group("keyword").unwrap_or_default(),
        name: group("name").unwrap_or_default(),
        params: group("params").unwrap_or_default(),
        return_clause: group("ret"),
        return_type: group("rtype"),
        pipelined: group("pipelined"),
        is_as: group("is_as"),
    }
}

/// Extract (name, type) pairs from a raw parameter list, left to right.
///
/// Default values, comments and `%TYPE` anchors are not recognised and
/// come out however the loose pattern happens to split them.
pub fn parse_parameters(raw: &str) -> Vec<Parameter> {
    RE_PARAMETER
        .captures_iter(raw)
        .map(|caps| Parameter::new(&caps[1], caps[2].trim_end()))
        .collect()
}
