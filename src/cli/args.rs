//! CLI argument definitions using clap
//!
//! Commands:
//! - rolodb init --config <path>
//! - rolodb serve --config <path> [--port N]
//! - rolodb seed --config <path> --file <path>
//! - rolodb query --config <path> [filter and paging flags]
//! - rolodb stats --config <path> [filter flags]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// RoloDB - A deterministic partner directory with a canonical query engine
#[derive(Parser, Debug)]
#[command(name = "rolodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration and an empty partner data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodb.json")]
        config: PathBuf,
    },

    /// Serve the partner directory over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodb.json")]
        config: PathBuf,

        /// Listen port (overrides the configured port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Import partner drafts from a JSON file (all-or-nothing)
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodb.json")]
        config: PathBuf,

        /// Path to a JSON array of partner drafts
        #[arg(long)]
        file: PathBuf,
    },

    /// Run one query and print the result envelope
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodb.json")]
        config: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Aggregate stats over the filtered set and print the envelope
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodb.json")]
        config: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Filter flags shared by `query` and `stats`
///
/// Values are passed through the same coercion as HTTP query
/// parameters, so a bad value falls back instead of erroring.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Substring to search across names, profession, company, email, phone
    #[arg(long)]
    pub search: Option<String>,

    /// Lifecycle status: active, archived, blacklisted
    #[arg(long)]
    pub status: Option<String>,

    /// Exact profession match (case-sensitive)
    #[arg(long)]
    pub profession: Option<String>,

    /// Classification tag (case-insensitive)
    #[arg(long)]
    pub classification: Option<String>,
}

/// Sort and pagination flags for `query`
#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Sort key: company, rating, relations
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<String>,
}

impl Cli {
    /// Parse `std::env::args`, exiting with usage help on bad input
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
