//! `check-config`: validate the config and show what it resolves to.

use tabled::{Table, Tabled, settings::Style};

use portwatch_config::{Config, DeviceEntry};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "#")]
    ordinal: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Password")]
    password: String,
    #[tabled(rename = "Timeout")]
    timeout: String,
}

impl DeviceRow {
    fn new(ordinal: usize, entry: &DeviceEntry, cfg: &Config) -> Self {
        Self {
            ordinal,
            name: entry.name.clone(),
            address: entry.address.clone(),
            username: entry.username.clone(),
            password: password_source(entry),
            timeout: format!("{}s", cfg.device_timeout(entry).as_secs()),
        }
    }
}

fn password_source(entry: &DeviceEntry) -> String {
    match (&entry.password_env, &entry.password) {
        (Some(var), Some(_)) => format!("${var} (fallback ****)"),
        (Some(var), None) => format!("${var}"),
        (None, Some(_)) => "****".into(),
        (None, None) => String::new(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    // Credentials must resolve too, not just parse.
    let fleet = cfg.resolve_fleet()?;

    let rows: Vec<DeviceRow> = cfg
        .devices
        .iter()
        .enumerate()
        .map(|(i, entry)| DeviceRow::new(i + 1, entry, &cfg))
        .collect();

    let out = format!(
        "{}\nlisten: {}\n{} device(s) configured",
        Table::new(rows).with(Style::rounded()),
        cfg.server.listen,
        fleet.len(),
    );
    output::print_output(&out);
    Ok(())
}
