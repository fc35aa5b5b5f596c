//! Console report: one summary per declaration plus the closing lines.

use crate::model::{Declaration, DocBlock, SectionKind};
use std::io;
use std::path::Path;

/// Summary printed for each declaration, ending with a blank line.
pub fn format_summary(decl: &Declaration<'_>, doc: &DocBlock) -> String {
    let mut out = format!("{} {}\n", decl.keyword, doc.name);
    for param in &doc.params {
        out.push_str(&format!("  Parameter: {} Type: {}\n", param.name, param.ty));
    }
    if let Some(ref ret) = doc.return_type {
        out.push_str(&format!("  Return Type: {}\n", ret));
    }
    out.push('\n');
    out
}

/// Confirmation line for a written section.
pub fn confirmation(kind: SectionKind, path: &Path) -> String {
    format!(
        "Documentation has been added. {} output written to {}",
        kind.label(),
        path.display()
    )
}

/// The operating system's description of an I/O error, without the
/// ` (os error N)` suffix the standard library appends.
pub fn describe_io_error(err: &io::Error) -> String {
    let message = err.to_string();
    match err.raw_os_error() {
        Some(code) => message
            .strip_suffix(&format!(" (os error {})", code))
            .unwrap_or(&message)
            .to_string(),
        None => message,
    }
}
