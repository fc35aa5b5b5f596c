//! Data model shared by the pipeline stages — transient, one run only.

use std::ops::Range;

/// Which half of the package a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Specification,
    Body,
}

impl SectionKind {
    /// Output file extension for this half.
    pub fn extension(self) -> &'static str {
        match self {
            SectionKind::Specification => "pks",
            SectionKind::Body => "pkb",
        }
    }

    /// Label used in the confirmation lines.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Specification => "Spec",
            SectionKind::Body => "Body",
        }
    }
}

/// One half of the split package source.
#[derive(Debug)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

/// A procedure or function header found in a section.
///
/// Every `&str` borrows from the scanned text; `span` covers the whole
/// match including the leading prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'t> {
    pub span: Range<usize>,
    /// Line break plus indentation in front of the keyword (empty at start of text)
    pub prefix: &'t str,
    /// `PROCEDURE` / `FUNCTION` exactly as written, in any case
    pub keyword: &'t str,
    pub name: &'t str,
    /// Text between the parentheses, verbatim
    pub params: &'t str,
    /// Whole `RETURN <type>` clause as written
    pub return_clause: Option<&'t str>,
    /// Type part of the RETURN clause, e.g. `NUMBER` or `pkg.t_rows`
    pub return_type: Option<&'t str>,
    pub pipelined: Option<&'t str>,
    /// Trailing `IS` / `AS` keyword
    pub is_as: Option<&'t str>,
}

/// A parameter extracted from a declaration's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// May be several words, e.g. `IN OUT VARCHAR2`
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Content of the comment block synthesized for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
}
