//! Output formatting for `poll`: JSON or a per-switch table.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use portwatch_core::{DeviceReport, FleetReport};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "#")]
    ordinal: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Up")]
    up: String,
    #[tabled(rename = "PoE")]
    poe: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&DeviceReport> for SwitchRow {
    fn from(d: &DeviceReport) -> Self {
        let online = d.is_online();
        Self {
            ordinal: d.ordinal,
            name: d.name.clone(),
            address: d.address.clone(),
            status: if online { "online" } else { "offline" },
            up: if online {
                format!("{}/{}", d.ports_up(), d.ports_total())
            } else {
                String::new()
            },
            poe: if online {
                d.poe_port_count().to_string()
            } else {
                String::new()
            },
            error: d.error().unwrap_or_default().to_owned(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a fleet report in the chosen format.
pub fn render_report(format: OutputFormat, report: &FleetReport) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(report)?),
        OutputFormat::Table => Ok(render_table(report)),
    }
}

fn render_table(report: &FleetReport) -> String {
    let rows: Vec<SwitchRow> = report.devices.iter().map(SwitchRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!(
        "{table}\n{}/{} switches online, {}/{} ports up, {} PoE ports",
        report.online_devices(),
        report.total_devices(),
        report.total_ports_up(),
        report.total_ports(),
        report.total_poe_ports(),
    )
}

/// Print the rendered output to stdout.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
