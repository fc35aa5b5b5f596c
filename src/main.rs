//! pkgdoc — split a combined PL/SQL package source and document it.
//!
//! Reads one file holding a package specification and its body separated
//! by a line containing only `/`, inserts a comment block above every
//! PROCEDURE / FUNCTION header in both halves, and writes the halves to
//! `<base>.pks` and `<base>.pkb`.
//!
//! ```text
//! pkgdoc emp_pkg.sql            # writes emp_pkg.pks and emp_pkg.pkb
//! pkgdoc -o build emp_pkg.sql   # writes build/emp_pkg.pks and build/emp_pkg.pkb
//! ```

mod annotate;
mod model;
mod output;
mod report;
mod scanner;
mod split;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: pkgdoc [OPTIONS] <INPUT>";

#[derive(Parser)]
#[command(
    name = "pkgdoc",
    version,
    about = "Split a PL/SQL package source into .pks/.pkb files and document every procedure and function"
)]
struct Cli {
    /// Combined package source (specification, a lone "/" line, then the body)
    input: PathBuf,

    /// Directory for the .pks/.pkb files (default: next to the input)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Do not print the per-declaration summary
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

/// Load, split, annotate both halves, then write them (spec first).
fn run(cli: &Cli) -> Result<()> {
    let source = output::read_source(&cli.input)?;
    let (spec, body) = split::split_package(&source)?;

    let scanner = scanner::RegexScanner;
    let mut sections = [spec, body];
    for section in &mut sections {
        annotate::annotate_section(section, &scanner, |decl, doc| {
            if !cli.quiet {
                print!("{}", report::format_summary(decl, doc));
            }
        });
    }

    let mut written = Vec::with_capacity(sections.len());
    for section in &sections {
        let path = output::output_path(&cli.input, cli.output_dir.as_deref(), section.kind);
        output::write_section(&path, &section.text)?;
        written.push((section.kind, path));
    }

    for (kind, path) in &written {
        println!("{}", report::confirmation(*kind, path));
    }
    Ok(())
}

/// I/O failures are reported on stdout and end the run normally; anything
/// else is a hard error.
fn report_failure(err: &anyhow::Error) -> ExitCode {
    match io_cause(err) {
        Some(io_err) => {
            println!("An error occurred: {}", report::describe_io_error(io_err));
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn io_cause(err: &anyhow::Error) -> Option<&io::Error> {
    err.chain().find_map(|cause| cause.downcast_ref::<io::Error>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn cli_accepts_one_input() {
        let cli = Cli::try_parse_from(["pkgdoc", "emp_pkg.sql"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("emp_pkg.sql"));
        assert!(cli.output_dir.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn cli_options() {
        let cli = Cli::try_parse_from(["pkgdoc", "-q", "-o", "build", "emp_pkg.sql"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("build")));
        assert!(cli.quiet);
    }

    #[test]
    fn cli_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["pkgdoc"]).is_err());
        assert!(Cli::try_parse_from(["pkgdoc", "a.sql", "b.sql"]).is_err());
    }

    #[test]
    fn finds_io_error_behind_context() {
        let err = Err::<(), _>(io::Error::from(io::ErrorKind::NotFound))
            .context("failed to read x.sql")
            .unwrap_err();
        assert_eq!(io_cause(&err).map(|e| e.kind()), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn split_error_is_not_an_io_error() {
        let err = anyhow::Error::from(split::SplitError::MissingSeparator);
        assert!(io_cause(&err).is_none());
    }
}
