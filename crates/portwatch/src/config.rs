//! CLI configuration: thin wrapper around `portwatch_config`.
//!
//! Picks the file from `--config` or the platform default and applies
//! `GlobalOpts` overrides on top.

use tracing::debug;

use portwatch_config::{Config, config_path, load_config};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load and validate the config selected by the global flags.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = global.config.clone().unwrap_or_else(config_path);
    debug!(path = %path.display(), "loading config");

    let mut cfg = load_config(&path)?;
    if let Some(secs) = global.timeout {
        cfg.override_timeout(secs);
    }
    Ok(cfg)
}
