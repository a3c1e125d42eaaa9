//! Configuration for portwatch.
//!
//! A TOML file listing the switches to poll, layered under `PORTWATCH_`
//! environment overrides, validated and translated to
//! `portwatch_core::FleetConfig`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use portwatch_core::{DeviceConfig, FleetConfig};

/// Environment prefix for config overrides (`PORTWATCH_SERVER__LISTEN`, ...).
pub const ENV_PREFIX: &str = "PORTWATCH_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for device '{device}'")]
    NoCredentials { device: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Values applied to devices that don't set their own.
    #[serde(default)]
    pub defaults: Defaults,

    /// Switches to poll, in report order.
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Seconds allowed for each HTTP call to a switch.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:2137".into()
}
fn default_timeout() -> u64 {
    portwatch_core::DEFAULT_TIMEOUT.as_secs()
}

/// One `[[devices]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceEntry {
    pub name: String,

    /// Host, `host:port`, or base URL of the web interface.
    pub address: String,

    pub username: String,

    /// Plaintext password (prefer `password_env`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable name containing the password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    /// Override `defaults.timeout` for this switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "portwatch", "portwatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("portwatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from `path` plus `PORTWATCH_` environment overrides.
///
/// Unlike a missing key, a missing file is an error: without it there
/// is nothing to poll.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Check structural requirements that serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.timeout == 0 {
            return Err(invalid("defaults.timeout", "must be greater than 0"));
        }
        self.listen_addr()?;

        for (i, device) in self.devices.iter().enumerate() {
            let at = |field: &str| format!("devices[{i}].{field}");
            for (field, value) in [
                ("name", &device.name),
                ("address", &device.address),
                ("username", &device.username),
            ] {
                if value.trim().is_empty() {
                    return Err(invalid(&at(field), "must not be empty"));
                }
            }
            if device.timeout == Some(0) {
                return Err(invalid(&at("timeout"), "must be greater than 0"));
            }
        }
        Ok(())
    }

    /// Parsed `server.listen`.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen
            .parse()
            .map_err(|e| invalid("server.listen", &format!("'{}': {e}", self.server.listen)))
    }

    /// Force one timeout on every device, as given on the command line.
    pub fn override_timeout(&mut self, secs: u64) {
        self.defaults.timeout = secs;
        for device in &mut self.devices {
            device.timeout = None;
        }
    }

    /// Effective timeout for one device.
    pub fn device_timeout(&self, device: &DeviceEntry) -> Duration {
        Duration::from_secs(device.timeout.unwrap_or(self.defaults.timeout))
    }

    /// Build the runtime fleet config, resolving passwords from the
    /// process environment.
    pub fn resolve_fleet(&self) -> Result<FleetConfig, ConfigError> {
        self.resolve_fleet_with(|name| std::env::var(name).ok())
    }

    /// As [`Config::resolve_fleet`], with a custom environment lookup.
    pub fn resolve_fleet_with<F>(&self, env: F) -> Result<FleetConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let devices = self
            .devices
            .iter()
            .map(|entry| {
                let password = resolve_password(entry, &env)?;
                Ok(DeviceConfig {
                    name: entry.name.clone(),
                    address: entry.address.trim().to_owned(),
                    username: entry.username.clone(),
                    password,
                    timeout: self.device_timeout(entry),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(FleetConfig::new(devices))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a device password.
///
/// 1. `password_env` → env var lookup
/// 2. plaintext `password`
pub fn resolve_password<F>(entry: &DeviceEntry, env: F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = entry.password_env.as_deref().and_then(&env) {
        return Ok(SecretString::from(value));
    }

    if let Some(ref pw) = entry.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        device: entry.name.clone(),
    })
}
