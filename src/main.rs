//! # sqlvalid
//!
//! Syntax validation for directories of `.sql` files.
//!
//! `sqlvalid` walks a directory tree, picks up every file whose name ends in
//! `.sql`, and checks it with either a PostgreSQL or a SQLite parser. Files
//! that pass are listed as they are checked; files that fail are listed
//! together at the end with the parser's message.
//!
//! # Quick Start
//!
//! ```bash
//! # PostgreSQL syntax (default)
//! sqlvalid migrations/
//!
//! # SQLite syntax
//! sqlvalid -sqlite db/queries/
//! ```
//!
//! # SQLite Mode
//!
//! SQLite cannot check syntax without also resolving table names, so every
//! file is prepared against its own empty in-memory database. Unless the file
//! starts with `CREATE`, `ALTER` or `DROP`, two tables are created first:
//!
//! ```sql
//! CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT, active INTEGER)
//! CREATE TABLE posts (id INTEGER PRIMARY KEY, user_id INTEGER, title TEXT)
//! ```
//!
//! Queries against any other table are reported as errors.
//!
//! # Exit Codes
//!
//! - `0` - Every `.sql` file is valid (also when none were found)
//! - `1` - Missing directory argument, unreadable directory, or at least one
//!   invalid file
//!
//! # Logging
//!
//! Diagnostics are off by default. Set `RUST_LOG` (for example
//! `RUST_LOG=sqlvalid=debug`) to trace discovery and per-file outcomes on
//! standard error.
//!
//! # Limitations
//!
//! There is no per-file timeout: input that stalls a parser stalls the run.
//! A directory listing error stops the run before the summary is printed.

use std::{
    env,
    io::{self, IsTerminal},
    process
};

use sqlvalid::{
    app::execute_stdout,
    cli::{Cli, USAGE},
    config::Config,
    output::OutputOptions
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = env::var("RUST_LOG")
        .ok()
        .and_then(|_| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse_args(env::args_os());
    let Some(config) = Config::from_cli(cli) else {
        println!("{}", USAGE);
        process::exit(1);
    };

    let opts = OutputOptions {
        colored: io::stdout().is_terminal()
    };

    match execute_stdout(&config, &opts) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
