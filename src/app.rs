//! Validation orchestration.
//!
//! Files are processed strictly one after another in discovery order. Each
//! file is read once, handed to the run's [`SyntaxValidator`], and its
//! outcome recorded in a [`ValidationReport`]. Successes are written to the
//! output stream immediately; failures are held back for the final report.

use std::{
    fs,
    io::{self, Write},
    path::Path
};

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    discover::discover,
    error::{AppResult, output_error},
    output::{
        Failure, OutputOptions, ValidationOutcome, ValidationReport, format_progress,
        format_report
    },
    validate::{SyntaxValidator, ValidationError}
};

/// Read and validate a single file
pub fn validate_file(path: &Path, validator: &dyn SyntaxValidator) -> ValidationOutcome {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "read failed");
            return ValidationOutcome::Invalid(Failure::new(path, &ValidationError::Read));
        }
    };

    match validator.validate(&content) {
        Ok(()) => ValidationOutcome::Valid,
        Err(e) => ValidationOutcome::Invalid(Failure::new(path, &e))
    }
}

/// Validate every discovered file, streaming progress lines to `out`.
///
/// # Errors
///
/// Returns the first directory walk error, or an error if `out` cannot be
/// written. Per-file problems never abort the run.
pub fn run_validation<W: Write>(
    config: &Config,
    opts: &OutputOptions,
    out: &mut W
) -> AppResult<ValidationReport> {
    info!(root = %config.root.display(), dialect = %config.dialect, "validation started");
    let validator = config.dialect.validator();
    let mut report = ValidationReport::new();

    for path in discover(&config.root) {
        let path = path?;
        let outcome = validate_file(&path, validator.as_ref());
        debug!(path = %path.display(), valid = matches!(outcome, ValidationOutcome::Valid), "validated");

        if outcome == ValidationOutcome::Valid {
            out.write_all(format_progress(&path, opts).as_bytes())
                .and_then(|_| out.flush())
                .map_err(output_error)?;
        }
        report.record(outcome);
    }

    info!(
        valid = report.valid_count,
        invalid = report.failures.len(),
        "validation finished"
    );
    Ok(report)
}

/// Run a full validation and write the complete report to `out`.
///
/// Returns the process exit code.
pub fn execute<W: Write>(config: &Config, opts: &OutputOptions, out: &mut W) -> AppResult<i32> {
    let report = run_validation(config, opts, out)?;
    out.write_all(format_report(&report, opts).as_bytes())
        .and_then(|_| out.flush())
        .map_err(output_error)?;
    Ok(report.exit_code())
}

/// Run against standard output
pub fn execute_stdout(config: &Config, opts: &OutputOptions) -> AppResult<i32> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(config, opts, &mut handle)
}
