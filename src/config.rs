//! Run configuration.
//!
//! `sqlvalid` reads no configuration files and no environment variables of
//! its own. Everything a run needs comes from the command line:
//!
//! | Source | Setting |
//! |--------|---------|
//! | `-sqlite` / `--sqlite` | [`Dialect::Sqlite`] instead of [`Dialect::PostgreSql`] |
//! | positional argument | root directory to scan |
//!
//! Log verbosity is controlled separately through `RUST_LOG` (see `main`).

use std::path::PathBuf;

use crate::{cli::Cli, validate::Dialect};

/// Resolved configuration for one validation run
#[derive(Debug, Clone)]
pub struct Config {
    pub root:    PathBuf,
    pub dialect: Dialect
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            root: root.into(),
            dialect
        }
    }

    /// Build configuration from parsed arguments
    ///
    /// Returns `None` when no directory was given, which is a usage error.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        let dialect = if cli.sqlite {
            Dialect::Sqlite
        } else {
            Dialect::PostgreSql
        };
        cli.directory.map(|root| Self::new(root, dialect))
    }
}
