use sqlparser::{dialect::PostgreSqlDialect, parser::Parser};

use super::{SyntaxValidator, ValidationError};

/// Syntax-only validation with the PostgreSQL grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresValidator;

impl SyntaxValidator for PostgresValidator {
    fn validate(&self, sql: &str) -> Result<(), ValidationError> {
        Parser::parse_sql(&PostgreSqlDialect {}, sql)
            .map(|_| ())
            .map_err(|e| ValidationError::Syntax(e.to_string()))
    }
}
