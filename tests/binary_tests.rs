//! Integration tests for the sqlvalid binary.

use std::{fs, path::Path};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    cargo_bin_cmd!("sqlvalid")
}

fn write(dir: &Path, name: &str, sql: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, sql).unwrap();
}

fn display(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

#[test]
fn test_usage_without_directory() {
    cmd()
        .assert()
        .code(1)
        .stdout("Usage: sqlvalid [-sqlite] <directory>\n");
}

#[test]
fn test_usage_with_only_flag() {
    cmd()
        .arg("-sqlite")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:"));
}

#[test]
fn test_all_valid_postgres() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.sql", "SELECT 1;");
    write(dir.path(), "nested/b.sql", "CREATE TABLE t (id SERIAL PRIMARY KEY);");
    write(dir.path(), "notes.txt", "not sql");

    let expected = format!(
        "✓ {}\n✓ {}\n✓ All 2 SQL files validated\n",
        display(dir.path(), "a.sql"),
        display(dir.path(), "nested/b.sql")
    );

    cmd().arg(dir.path()).assert().success().stdout(predicate::str::diff(expected));
}

#[test]
fn test_invalid_files_listed_in_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.sql", "SELEC * FROM users;");
    write(dir.path(), "b.sql", "SELECT * FROM users;");
    write(dir.path(), "c/d.sql", "SELECT * FROM;");

    let output = cmd().arg(dir.path()).assert().code(1).get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with(&format!("✓ {}\n\n", display(dir.path(), "b.sql"))));
    let a = output
        .find(&format!("✗ {}: invalid SQL\n  ", display(dir.path(), "a.sql")))
        .unwrap();
    let d = output
        .find(&format!("✗ {}: invalid SQL\n  ", display(dir.path(), "c/d.sql")))
        .unwrap();
    assert!(a < d);
    assert_eq!(output.matches(": invalid SQL").count(), 2);
    assert!(output.ends_with("\n✗ 2 SQL errors found\n"));
}

#[test]
fn test_no_sql_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "README.md", "# nothing here");

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout("✓ All 0 SQL files validated\n");
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_sqlite_flag_changes_verdict() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "cast.sql", "SELECT id::text FROM users;");

    cmd().arg(dir.path()).assert().success();
    cmd()
        .arg("-sqlite")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  SQL error: "));
}

#[test]
fn test_sqlite_synthetic_schema() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "active.sql", "SELECT * FROM users WHERE active = 1");

    cmd()
        .arg("--sqlite")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 SQL files validated"));
}

#[test]
fn test_sqlite_unknown_table() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "q.sql", "SELECT * FROM nonexistent_table");

    cmd()
        .arg("-sqlite")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("nonexistent_table"))
        .stdout(predicate::str::contains("✗ 1 SQL errors found"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.sql", "SELECT 1;");
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("b.sql")).unwrap();
    write(dir.path(), "c.sql", "SELECT 2;");

    let expected = format!(
        "✓ {a}\n✓ {c}\n\n✗ {b}: invalid SQL\n  failed to read\n\n✗ 1 SQL errors found\n",
        a = display(dir.path(), "a.sql"),
        b = display(dir.path(), "b.sql"),
        c = display(dir.path(), "c.sql")
    );

    cmd().arg(dir.path()).assert().code(1).stdout(predicate::str::diff(expected));
}

#[test]
fn test_output_is_repeatable() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "z.sql", "SELECT 1;");
    write(dir.path(), "m/a.sql", "SELEC 1;");
    write(dir.path(), "m/b.sql", "DELETE FROM t WHERE id = 1;");

    let first = cmd().arg(dir.path()).output().unwrap();
    let second = cmd().arg(dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(1));
}

#[test]
fn test_no_log_output_by_default() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.sql", "SELECT 1;");

    cmd()
        .env_remove("RUST_LOG")
        .arg(dir.path())
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_sqlite_multi_statement_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "queries.sql", "SELECT * FROM users;\nSELECT * FROM posts;\n");
    write(
        dir.path(),
        "migration.sql",
        "CREATE TABLE t (id INTEGER);\nINSERT INTO t (id) VALUES (1);\n"
    );

    cmd()
        .arg("-sqlite")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 SQL files validated"));
}

#[test]
fn test_flag_after_directory_keeps_postgres_mode() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "cast.sql", "SELECT id::text FROM users;");

    cmd()
        .arg(dir.path())
        .arg("-sqlite")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 SQL files validated"));
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.sql", "SELECT 1;");

    cmd()
        .arg(dir.path())
        .arg("another-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 SQL files validated"));
}
