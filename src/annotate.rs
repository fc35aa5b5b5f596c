//! Inserts a documentation block above every declaration in a section.
//!
//! The rewrite is pure: matches are taken from the original text and the
//! result is built as a new string. Everything between matches is copied
//! byte-for-byte. Within a matched header only the leading prefix and the
//! parameter list survive verbatim; the remaining parts are re-joined with
//! single newlines.
//!
//! Running the annotator over its own output documents every declaration a
//! second time — the inserted block never matches as a declaration, so the
//! header below it is found again.

use crate::model::{Declaration, DocBlock, Section};
use crate::scanner::{parse_parameters, DeclarationScanner};

const RULE: &str =
    "------------------------------------------------------------------------------";

/// Build the DocBlock content for a declaration.
pub fn doc_block_for(decl: &Declaration<'_>) -> DocBlock {
    DocBlock {
        name: decl.name.to_string(),
        params: parse_parameters(decl.params),
        return_type: decl.return_type.map(str::to_string),
    }
}

/// Render the comment block; every line ends in `\n`.
pub fn render_doc_block(doc: &DocBlock) -> String {
    let mut out = String::new();
    out.push_str(&format!("/* {}\n", RULE));
    out.push_str(&format!("   * {}\n", doc.name));
    out.push_str(&format!("   * {}\n", RULE));
    for param in &doc.params {
        out.push_str(&format!("   * @param {} {}\n", param.name, param.ty));
    }
    if let Some(ref ret) = doc.return_type {
        out.push_str("   *\n");
        out.push_str(&format!("   * @return {}\n", ret));
    }
    out.push_str(&format!("   * {}\n", RULE));
    out.push_str("   */\n");
    out
}

/// Rebuild the declaration header without its leading prefix.
fn render_header(decl: &Declaration<'_>) -> String {
    let mut out = format!("{} {}({})", decl.keyword, decl.name, decl.params);
    for part in [decl.return_clause, decl.pipelined, decl.is_as]
        .into_iter()
        .flatten()
    {
        out.push('\n');
        out.push_str(part);
    }
    out
}

/// Annotate `text`, calling `on_declaration` once per match in textual order.
pub fn annotate<F>(text: &str, scanner: &dyn DeclarationScanner, mut on_declaration: F) -> String
where
    F: FnMut(&Declaration<'_>, &DocBlock),
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for decl in scanner.scan(text) {
        out.push_str(&text[last..decl.span.start]);

        let doc = doc_block_for(&decl);
        on_declaration(&decl, &doc);

        out.push_str(decl.prefix);
        out.push_str(&render_doc_block(&doc));
        out.push_str(&render_header(&decl));
        last = decl.span.end;
    }

    out.push_str(&text[last..]);
    out
}

/// Replace a section's text with its annotated version.
pub fn annotate_section<F>(section: &mut Section, scanner: &dyn DeclarationScanner, on_declaration: F)
where
    F: FnMut(&Declaration<'_>, &DocBlock),
{
    section.text = annotate(&section.text, scanner, on_declaration);
}
