//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` variants into user-facing errors with actionable help text.
//! Switch failures never reach this layer: they are part of the report.

use miette::Diagnostic;
use thiserror::Error;

use portwatch_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(
        code(portwatch::no_config),
        help(
            "Create one listing your switches, or pass --config.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(portwatch::validation))]
    Validation { field: String, reason: String },

    #[error("No credentials configured for device '{device}'")]
    #[diagnostic(
        code(portwatch::no_credentials),
        help(
            "Set `password` or `password_env` in the device's [[devices]] entry.\n\
             With `password_env`, make sure the variable is exported."
        )
    )]
    NoCredentials { device: String },

    #[error(transparent)]
    #[diagnostic(code(portwatch::config))]
    Config(Box<figment::Error>),

    // ── Server ───────────────────────────────────────────────────────

    #[error("Could not listen on {addr}")]
    #[diagnostic(
        code(portwatch::bind_failed),
        help("Pick another address with --listen or `server.listen`.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not serialize report: {0}")]
    #[diagnostic(code(portwatch::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NoConfig { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Bind { .. } => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } => CliError::NoConfig {
                path: path.display().to_string(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { device } => CliError::NoCredentials { device },
            ConfigError::Figment(err) => CliError::Config(err),
        }
    }
}
