//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow glean
//! to be used as a library without printing side effects.

use colored::Colorize;

use crate::emit::Artifact;
use crate::pipeline::{ExtractionReport, FileWarning};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_file_warning(warning: &FileWarning) {
    eprintln!(
        "{} {} ({})",
        "warning:".bold().yellow(),
        warning.message,
        warning.path.display()
    );
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print the end-of-run summary: keys, files and the artifacts written.
pub fn print_summary(report: &ExtractionReport, artifacts: &[Artifact]) {
    println!(
        "Extracted {} key(s) from {} file(s)",
        report.flat.len(),
        report.files_processed
    );
    if report.files_forwarded > 0 {
        println!(
            "Forwarded {} empty file(s) without extraction",
            report.files_forwarded
        );
    }
    for artifact in artifacts {
        println!("  {} {}", SUCCESS_MARK.green(), artifact.path.display());
    }
}

/// Printed when the run ends without having processed a single file:
/// no catalogs are written at all in that case.
pub fn print_nothing_extracted(scanned: usize) {
    println!(
        "{} No source files processed ({} candidate(s) scanned); no catalogs written",
        FAILURE_MARK.red(),
        scanned
    );
}
