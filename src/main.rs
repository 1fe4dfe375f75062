//! RoloDB CLI entry point
//!
//! The binary does exactly two things: hand control to `cli::run`, and
//! turn a `CliError` into a stderr line plus a non-zero exit code.
//! Configuration loading, file access, and server startup all live
//! behind the CLI commands, never here.

use rolodb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
