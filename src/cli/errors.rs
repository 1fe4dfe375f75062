//! CLI-specific error types
//!
//! A `CliError` is fatal: main prints it to stderr and exits non-zero.
//! Request-level failures (validation, unknown records) are not CLI
//! errors; they are printed as error envelopes and the process exits
//! clean.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Fatal command-line failures
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration missing, unreadable, or failing validation
    #[error("ROLO_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Data or seed file I/O failure
    #[error("ROLO_CLI_IO_ERROR: {0}")]
    Io(String),

    /// `init` refusing to overwrite an existing configuration
    #[error("ROLO_CLI_ALREADY_INITIALIZED: configuration already exists, refusing to overwrite")]
    AlreadyInitialized,

    /// A command needs a data file that does not exist yet
    #[error("ROLO_CLI_NOT_INITIALIZED: partner data file not found, run 'rolodb init' first")]
    NotInitialized,

    /// Boot sequence failed before serving
    #[error("ROLO_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    /// Stable machine-readable code, also the Display prefix
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "ROLO_CLI_CONFIG_ERROR",
            CliError::Io(_) => "ROLO_CLI_IO_ERROR",
            CliError::AlreadyInitialized => "ROLO_CLI_ALREADY_INITIALIZED",
            CliError::NotInitialized => "ROLO_CLI_NOT_INITIALIZED",
            CliError::Boot(_) => "ROLO_CLI_BOOT_FAILED",
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(format!("JSON error: {}", e))
    }
}
