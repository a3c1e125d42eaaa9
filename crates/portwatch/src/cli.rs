//! Clap derive structures for the `portwatch` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// portwatch -- port and PoE status for TP-Link Easy Smart switches
#[derive(Debug, Parser)]
#[command(
    name = "portwatch",
    version,
    about = "Poll TP-Link switch web interfaces and report port and PoE status",
    long_about = "Logs into each configured switch's web interface, scrapes port link\n\
        and PoE state, and publishes one aggregated JSON document, either\n\
        over HTTP (serve) or once on stdout (poll).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the config file
    #[arg(long, short = 'c', env = "PORTWATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Per-request timeout in seconds for every switch (overrides config)
    #[arg(long, short = 't', global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (same document as the HTTP endpoint)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// One table row per switch
    Table,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the fleet report over HTTP, polling on every request
    Serve(ServeArgs),

    /// Poll every switch once and print the report
    Poll(PollArgs),

    /// Validate the config and list the switches it resolves to
    #[command(name = "check-config")]
    CheckConfig,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides `server.listen`)
    #[arg(long, short = 'l')]
    pub listen: Option<String>,
}

#[derive(Debug, Args)]
pub struct PollArgs {
    /// Output format
    #[arg(long, short = 'o', default_value = "json")]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["portwatch", "poll", "-o", "table", "--timeout", "3", "-vv"])
            .expect("valid args");
        assert_eq!(cli.global.timeout, Some(3));
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Poll(PollArgs {
                output: OutputFormat::Table
            })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["portwatch", "poll", "--timeout", "0"]).is_err());
    }
}
