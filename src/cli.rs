use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

/// Usage line printed when no directory is given
pub const USAGE: &str = "Usage: sqlvalid [-sqlite] <directory>";

/// sqlvalid - Validate the syntax of every .sql file in a directory tree
#[derive(Parser, Debug)]
#[command(name = "sqlvalid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Validate SQLite SQL (default: PostgreSQL)
    #[arg(long)]
    pub sqlite: bool,

    /// Directory to scan recursively for .sql files
    pub directory: Option<PathBuf>,

    /// Arguments after the directory are ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>
}

impl Cli {
    /// Parse arguments, accepting the single-dash `-sqlite` spelling
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Prepare raw arguments for clap.
///
/// `-sqlite` is rewritten to `--sqlite`. Flags are only recognised before the
/// first positional argument: a `--` is inserted ahead of it, so the
/// directory and anything after it are taken literally.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>
{
    let mut iter = args.into_iter().map(|arg| -> OsString { arg.into() });
    let mut out: Vec<OsString> = iter.next().into_iter().collect();
    let mut flags_done = false;

    for arg in iter {
        if flags_done {
            out.push(arg);
        } else if arg.as_os_str() == "-sqlite" {
            out.push(OsString::from("--sqlite"));
        } else if arg.as_os_str() == "--" {
            flags_done = true;
            out.push(arg);
        } else if arg.as_os_str() == "-" || !arg.to_string_lossy().starts_with('-') {
            flags_done = true;
            out.push(OsString::from("--"));
            out.push(arg);
        } else {
            out.push(arg);
        }
    }
    out
}
