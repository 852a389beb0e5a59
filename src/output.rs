//! Outcome types and report rendering.
//!
//! Progress lines (`✓ <path>`) are rendered one at a time while files are
//! processed. Failure details and the final verdict are rendered once, from
//! the finished [`ValidationReport`].

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::validate::ValidationError;

/// Output options
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub colored: bool
}

/// A file that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub path:    PathBuf,
    pub message: String
}

impl Failure {
    pub fn new(path: impl Into<PathBuf>, error: &ValidationError) -> Self {
        Self {
            path:    path.into(),
            message: error.to_string()
        }
    }
}

/// Result of validating one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Failure)
}

/// Aggregate of all outcomes in one run, in discovery order
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub valid_count: usize,
    pub failures:    Vec<Failure>
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one outcome
    pub fn record(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Valid => self.valid_count += 1,
            ValidationOutcome::Invalid(failure) => self.failures.push(failure)
        }
    }

    /// Number of files processed
    pub fn total(&self) -> usize {
        self.valid_count + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code: 0 when every file is valid, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

fn pass_mark(opts: &OutputOptions) -> String {
    if opts.colored {
        "✓".green().to_string()
    } else {
        "✓".to_string()
    }
}

fn fail_mark(opts: &OutputOptions) -> String {
    if opts.colored {
        "✗".red().to_string()
    } else {
        "✗".to_string()
    }
}

/// Format the line printed as soon as a file validates
pub fn format_progress(path: &Path, opts: &OutputOptions) -> String {
    format!("{} {}\n", pass_mark(opts), path.display())
}

/// Format the trailing section printed after all files are processed
pub fn format_report(report: &ValidationReport, opts: &OutputOptions) -> String {
    if report.is_success() {
        let summary = format!(
            "{} All {} SQL files validated\n",
            pass_mark(opts),
            report.valid_count
        );
        return summary;
    }

    let mut output = String::from("\n");
    for failure in &report.failures {
        output.push_str(&format!(
            "{} {}: invalid SQL\n  {}\n",
            fail_mark(opts),
            failure.path.display(),
            failure.message
        ));
    }

    let verdict = format!("{} SQL errors found", report.failures.len());
    if opts.colored {
        output.push_str(&format!("\n{} {}\n", fail_mark(opts), verdict.bold()));
    } else {
        output.push_str(&format!("\n{} {}\n", fail_mark(opts), verdict));
    }
    output
}
