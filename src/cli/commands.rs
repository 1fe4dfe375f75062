//! CLI command implementations
//!
//! Every command follows the same boot sequence: load and validate the
//! configuration, resolve the data file relative to it, load the
//! records into a `MemoryStore`, then run. `serve` stays up; the
//! one-shot commands print a single envelope line and exit.

use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

use crate::api::{parse_query, ApiServer, PartnerListData, DEFAULT_LIMIT, MAX_LIMIT};
use crate::directory::Directory;
use crate::model::PartnerDraft;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::MemoryStore;

use super::args::{Command, FilterArgs, PageArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Default page size for one-shot CLI queries
pub const CLI_DEFAULT_LIMIT: usize = 20;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Partner data file, resolved relative to the config file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Listen host for `serve`
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port for `serve`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = permissive)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Page size when a request does not name one
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_data_file() -> String {
    "./partners.json".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7431
}
fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            default_limit: default_limit(),
        }
    }
}

impl Config {
    /// Read a config file and validate its contents
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Cannot read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Config is not valid JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Reject configs the server cannot run with
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::Config("data_file must not be empty".to_string()));
        }

        if self.host.is_empty() {
            return Err(CliError::Config("host must not be empty".to_string()));
        }

        if self.default_limit == 0 || self.default_limit > MAX_LIMIT {
            return Err(CliError::Config(format!(
                "default_limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        Ok(())
    }

    /// Listen address for `serve`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CLI entry point: parse arguments, then dispatch
///
/// The binary calls this and nothing else.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch one parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Seed { config, file } => seed(&config, &file),
        Command::Query {
            config,
            filters,
            paging,
        } => query(&config, &filters, &paging),
        Command::Stats { config, filters } => stats(&config, &filters),
    }
}

/// Write a default configuration and an empty partner data file
///
/// Refuses to overwrite an existing configuration, and never touches a
/// data file that already holds records.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized);
    }

    let config = Config::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)
        .map_err(|e| CliError::Config(format!("Failed to write config: {}", e)))?;

    let data_path = resolve_data_path(config_path, &config.data_file);
    if !data_path.exists() {
        MemoryStore::new()
            .save_path(&data_path)
            .map_err(|e| CliError::Io(format!("Failed to write data file: {}", e)))?;
    }

    write_response(json!({"initialized": true}))?;

    Ok(())
}

/// Serve the partner directory over HTTP
///
/// Boot sequence: load config, load the record snapshot into a
/// `MemoryStore`, build the router, bind, serve. Any failure before
/// serving halts startup; there is no partial boot.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::StartupBegin);

    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let addr_field = config.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", &addr_field), ("data_file", &config.data_file)],
    );

    let (store, data_path) = boot_directory(config_path, &config)?;

    let partners = store
        .len()
        .map_err(|e| CliError::Boot(format!("Failed to read store: {}", e)))?
        .to_string();
    let path_field = data_path.display().to_string();
    log_event_with_fields(
        Event::DirectoryLoaded,
        &[("partners", &partners), ("path", &path_field)],
    );

    let directory = Directory::new(store);
    let router = ApiServer::new(directory)
        .with_cors_origins(config.cors_origins.clone())
        .with_default_limit(config.default_limit)
        .router();

    let addr: SocketAddr = config.socket_addr().parse().map_err(|_| {
        CliError::Config(format!("Invalid listen address: {}", config.socket_addr()))
    })?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CliError::Boot(format!("Failed to bind {}: {}", addr, e)))?;

        let addr_field = addr.to_string();
        log_event_with_fields(Event::Serving, &[("addr", &addr_field)]);

        axum::serve(listener, router)
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Import partner drafts from a JSON file
///
/// The batch goes through the create path (validation included,
/// all-or-nothing); on success the snapshot is written back.
pub fn seed(config_path: &Path, file: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let (store, data_path) = boot_directory(config_path, &config)?;

    let content = fs::read_to_string(file)
        .map_err(|e| CliError::Io(format!("Failed to read seed file: {}", e)))?;
    let drafts: Vec<PartnerDraft> = serde_json::from_str(&content)
        .map_err(|e| CliError::Io(format!("Invalid seed JSON: {}", e)))?;

    let directory = Directory::new(store.clone());

    match directory.seed(drafts) {
        Ok(count) => {
            store
                .save_path(&data_path)
                .map_err(|e| CliError::Io(format!("Failed to save data file: {}", e)))?;
            write_response(json!({"seeded": count}))?;
        }
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
        }
    }

    Ok(())
}

/// Run one query and print the result envelope
pub fn query(config_path: &Path, filters: &FilterArgs, paging: &PageArgs) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let (store, _) = boot_directory(config_path, &config)?;
    let directory = Directory::new(store);

    let params = build_params(filters, Some(paging));
    let spec = parse_query(&params, CLI_DEFAULT_LIMIT);

    match directory.query(&spec) {
        Ok(outcome) => {
            let data = PartnerListData::from(outcome.page);
            write_response(serde_json::to_value(&data)?)?;
        }
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
        }
    }

    Ok(())
}

/// Aggregate stats over the filtered set and print the envelope
pub fn stats(config_path: &Path, filters: &FilterArgs) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let (store, _) = boot_directory(config_path, &config)?;
    let directory = Directory::new(store);

    let params = build_params(filters, None);
    let spec = parse_query(&params, CLI_DEFAULT_LIMIT);

    match directory.stats(&spec) {
        Ok(stats) => {
            write_response(serde_json::to_value(&stats)?)?;
        }
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
        }
    }

    Ok(())
}

/// Turn CLI flags into the same key-value map the HTTP surface parses,
/// so both paths share one coercion
fn build_params(filters: &FilterArgs, paging: Option<&PageArgs>) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if let Some(v) = &filters.search {
        params.insert("search".to_string(), v.clone());
    }
    if let Some(v) = &filters.status {
        params.insert("status".to_string(), v.clone());
    }
    if let Some(v) = &filters.profession {
        params.insert("profession".to_string(), v.clone());
    }
    if let Some(v) = &filters.classification {
        params.insert("classification".to_string(), v.clone());
    }

    if let Some(paging) = paging {
        if let Some(v) = &paging.sort_by {
            params.insert("sortBy".to_string(), v.clone());
        }
        if let Some(v) = &paging.sort_order {
            params.insert("sortOrder".to_string(), v.clone());
        }
        if let Some(v) = &paging.page {
            params.insert("page".to_string(), v.clone());
        }
        if let Some(v) = &paging.limit {
            params.insert("limit".to_string(), v.clone());
        }
    }

    params
}

/// Resolve the data file relative to the config file location, so a
/// config can be addressed from any working directory
fn resolve_data_path(config_path: &Path, data_file: &str) -> PathBuf {
    let data = Path::new(data_file);
    if data.is_absolute() {
        data.to_path_buf()
    } else {
        config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(data)
    }
}

/// Check if the data file exists
fn is_initialized(data_path: &Path) -> bool {
    data_path.exists()
}

/// Load the record snapshot into a store
fn boot_directory(config_path: &Path, config: &Config) -> CliResult<(Arc<MemoryStore>, PathBuf)> {
    let data_path = resolve_data_path(config_path, &config.data_file);

    if !is_initialized(&data_path) {
        return Err(CliError::NotInitialized);
    }

    let store = MemoryStore::load_path(&data_path)
        .map_err(|e| CliError::Boot(format!("Failed to load partner records: {}", e)))?;

    Ok((Arc::new(store), data_path))
}
