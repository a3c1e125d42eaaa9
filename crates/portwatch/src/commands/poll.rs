//! `poll`: one cycle over the fleet, printed to stdout.

use std::sync::Arc;

use portwatch_core::Fleet;

use crate::cli::{GlobalOpts, PollArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: PollArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let fleet = Fleet::new(Arc::new(cfg.resolve_fleet()?));

    let report = fleet.poll().await;
    let out = output::render_report(args.output, &report)?;
    output::print_output(&out);
    Ok(())
}
