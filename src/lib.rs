//! # sqlvalid Library
//!
//! Directory-wide SQL syntax validation for PostgreSQL and SQLite.

pub mod app;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod output;
pub mod validate;
