//! Subcommand handlers.

pub mod check_config;
pub mod poll;
pub mod serve;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Serve(args) => serve::handle(args, global).await,
        Command::Poll(args) => poll::handle(args, global).await,
        Command::CheckConfig => check_config::handle(global),
    }
}
