//! CLI module
//!
//! Provides the command-line interface for:
//! - init: Write a default config and empty data file
//! - serve: Boot the directory and serve HTTP
//! - seed: Import drafts through the create path
//! - query: One-shot query execution
//! - stats: One-shot stats aggregation

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, FilterArgs, PageArgs};
pub use commands::{init, query, run, run_command, seed, serve, stats, Config, CLI_DEFAULT_LIMIT};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
