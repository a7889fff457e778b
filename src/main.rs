//! CLI for bib-usage - Report citation counts for every entry of a BibTeX file.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use bib_usage::{generate_report, read_source, SourceError};

const USAGE: &str = "Usage: bib-usage main.aux refs.bib";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Report how many times each bibliography entry is cited in a LaTeX .aux file
#[derive(Parser)]
#[command(name = "bib-usage")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib-usage build/main.aux refs.bib
  bib-usage main.aux refs.bib | grep '^  0'")]
struct Cli {
    /// Auxiliary file written by LaTeX, followed by the BibTeX database
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    files: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 1 — wrong number of input files
    Usage,
    /// Exit 10 — auxiliary file not found / unreadable / not UTF-8
    AuxFile(String),
    /// Exit 11 — bibliography file not found / unreadable / not UTF-8
    BibFile(String),
    /// Exit 12 — cannot write the report
    Output(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage => 1,
            AppError::AuxFile(_) => 10,
            AppError::BibFile(_) => 11,
            AppError::Output(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Usage => write!(f, "{}", USAGE),
            AppError::AuxFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: pass the .aux file produced by a LaTeX run as the first argument",
                    msg
                )
            }
            AppError::BibFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: pass the BibTeX database as the second argument",
                    msg
                )
            }
            AppError::Output(msg) => write!(f, "{}", msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::Usage => println!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let [aux, bib] = cli.files.as_slice() else {
        return Err(AppError::Usage);
    };

    let report = usage_command(aux, bib)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(report.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(|e| AppError::Output(format!("stdout: {}", e)))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Loads both inputs and renders the full report before anything is printed.
fn usage_command(aux: &Path, bib: &Path) -> Result<String, AppError> {
    // 1. Read the auxiliary file
    let aux_text = read_source(aux).map_err(|e| AppError::AuxFile(describe(aux, &e)))?;

    // 2. Read the bibliography
    let bib_text = read_source(bib).map_err(|e| AppError::BibFile(describe(bib, &e)))?;

    // 3. Count, join and render
    Ok(generate_report(&aux_text, &bib_text))
}

fn describe(path: &Path, e: &SourceError) -> String {
    format!("'{}': {}", path.display(), e)
}
