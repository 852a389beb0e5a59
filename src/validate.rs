//! Syntax validators.
//!
//! A [`SyntaxValidator`] takes a complete SQL source string and reports
//! whether it is acceptable under one dialect. Two validators exist:
//!
//! - [`PostgresValidator`] - pure syntax check through `sqlparser`'s
//!   PostgreSQL dialect
//! - [`SqliteValidator`] - prepares the SQL against a throwaway in-memory
//!   SQLite database seeded with a small synthetic schema
//!
//! [`Dialect`] selects one of them for the whole run.

mod postgres;
mod sqlite;

use std::fmt;

pub use postgres::PostgresValidator;
pub use sqlite::{SYNTHETIC_SCHEMA, SqliteValidator, needs_synthetic_schema};

/// SQL dialect used for a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    PostgreSql,
    Sqlite
}

impl Dialect {
    /// Build the validator for this dialect
    pub fn validator(self) -> Box<dyn SyntaxValidator> {
        match self {
            Self::PostgreSql => Box::new(PostgresValidator),
            Self::Sqlite => Box::new(SqliteValidator)
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostgreSql => write!(f, "postgresql"),
            Self::Sqlite => write!(f, "sqlite")
        }
    }
}

/// Checks a SQL source string under one dialect
pub trait SyntaxValidator {
    /// Validate `sql`, returning a descriptive error when it is rejected
    fn validate(&self, sql: &str) -> Result<(), ValidationError>;
}

/// Reason a single file failed validation.
///
/// The `Display` output is exactly the message shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// File could not be read
    Read,
    /// Parser rejected the SQL; carries the parser's full message
    Syntax(String),
    /// In-memory SQLite database could not be opened
    Open(String),
    /// Synthetic schema could not be created
    Setup(String),
    /// SQLite refused to prepare the statement
    Prepare(String)
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "failed to read"),
            Self::Syntax(msg) => write!(f, "{}", msg),
            Self::Open(msg) => write!(f, "cannot open sqlite: {}", msg),
            Self::Setup(msg) => write!(f, "setup error: {}", msg),
            Self::Prepare(msg) => write!(f, "SQL error: {}", msg)
        }
    }
}

impl std::error::Error for ValidationError {}
