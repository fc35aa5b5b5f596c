//! Loading the package source and writing the `.pks` / `.pkb` files.

use crate::model::SectionKind;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read the whole input file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Output path for one section.
///
/// Without `output_dir` the input's extension is replaced in place
/// ("src/emp.sql" → "src/emp.pks"); with it, the file stem is placed in
/// that directory.
pub fn output_path(input: &Path, output_dir: Option<&Path>, kind: SectionKind) -> PathBuf {
    match output_dir {
        None => input.with_extension(kind.extension()),
        Some(dir) => {
            let mut name = input
                .file_stem()
                .unwrap_or(input.as_os_str())
                .to_os_string();
            name.push(".");
            name.push(kind.extension());
            dir.join(name)
        }
    }
}

/// Write a section, replacing any existing file.
pub fn write_section(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replaces_extension_next_to_input() {
        let input = Path::new("pkgs/emp_pkg.sql");
        assert_eq!(
            output_path(input, None, SectionKind::Specification),
            PathBuf::from("pkgs/emp_pkg.pks")
        );
        assert_eq!(
            output_path(input, None, SectionKind::Body),
            PathBuf::from("pkgs/emp_pkg.pkb")
        );
    }

    #[test]
    fn only_the_last_extension_is_replaced() {
        assert_eq!(
            output_path(Path::new("emp.pkg.sql"), None, SectionKind::Body),
            PathBuf::from("emp.pkg.pkb")
        );
        assert_eq!(
            output_path(Path::new("emp.pkg.sql"), Some(Path::new("out")), SectionKind::Body),
            PathBuf::from("out/emp.pkg.pkb")
        );
    }

    #[test]
    fn input_without_extension() {
        assert_eq!(
            output_path(Path::new("emp_pkg"), None, SectionKind::Specification),
            PathBuf::from("emp_pkg.pks")
        );
    }

    #[test]
    fn output_dir_takes_the_stem() {
        assert_eq!(
            output_path(Path::new("src/db/emp_pkg.sql"), Some(Path::new("build")), SectionKind::Specification),
            PathBuf::from("build/emp_pkg.pks")
        );
    }

    #[test]
    fn write_overwrites_and_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("k.pks");
        write_section(&path, "old").unwrap();
        write_section(&path, "PACKAGE k AS END k;").unwrap();
        assert_eq!(read_source(&path).unwrap(), "PACKAGE k AS END k;");
    }

    #[test]
    fn read_missing_file_keeps_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_source(&dir.path().join("missing.sql")).unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("k.pkb");
        assert!(write_section(&path, "x").is_err());
    }
}
