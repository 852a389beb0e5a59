pub use masterror::{AppError, AppResult};

/// Create directory walk error
pub fn walk_error(root: &str, source: walkdir::Error) -> AppError {
    let location = source
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| root.to_string());
    AppError::internal(format!(
        "Failed to walk directory '{}': {}",
        location, source
    ))
}

/// Create error for a failed write to the report stream
pub fn output_error(source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write report: {}", source))
}
