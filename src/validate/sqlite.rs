use rusqlite::{Batch, Connection, fallible_iterator::FallibleIterator};
use tracing::trace;

use super::{SyntaxValidator, ValidationError};

/// Tables created before preparing non-DDL statements, so that ordinary
/// queries against them do not fail with "no such table".
pub const SYNTHETIC_SCHEMA: [&str; 2] = [
    "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT, active INTEGER)",
    "CREATE TABLE posts (id INTEGER PRIMARY KEY, user_id INTEGER, title TEXT)"
];

const SCHEMA_KEYWORDS: [&str; 3] = ["CREATE", "ALTER", "DROP"];

/// Validation through SQLite's own statement compiler.
///
/// SQLite has no syntax-only mode: preparing a statement also resolves the
/// tables it references. Each call therefore gets a fresh in-memory database
/// and, unless the SQL starts with a schema keyword, the
/// [`SYNTHETIC_SCHEMA`] tables. Only the first statement is prepared, and it
/// is never executed; any text after it is not compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteValidator;

impl SyntaxValidator for SqliteValidator {
    fn validate(&self, sql: &str) -> Result<(), ValidationError> {
        let conn =
            Connection::open_in_memory().map_err(|e| ValidationError::Open(e.to_string()))?;

        if needs_synthetic_schema(sql) {
            for ddl in SYNTHETIC_SCHEMA {
                conn.execute(ddl, [])
                    .map_err(|e| ValidationError::Setup(e.to_string()))?;
            }
            trace!("synthetic schema created");
        }

        let mut batch = Batch::new(&conn, sql);
        let first = batch
            .next()
            .map_err(|e| ValidationError::Prepare(e.to_string()))?;
        drop(first);
        Ok(())
    }
}

/// Whether the synthetic tables should be created before preparing `sql`.
///
/// Only the leading keyword of the trimmed, uppercased text is inspected.
pub fn needs_synthetic_schema(sql: &str) -> bool {
    let upper = sql.trim().to_uppercase();
    !SCHEMA_KEYWORDS.iter().any(|kw| upper.starts_with(kw))
}
