//! `serve`: run the HTTP presenter until interrupted.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use portwatch_core::Fleet;

use crate::cli::{GlobalOpts, ServeArgs};
use crate::config;
use crate::error::CliError;
use crate::server;

pub async fn handle(args: ServeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;

    let addr: SocketAddr = match args.listen {
        Some(listen) => listen.parse().map_err(|e| CliError::Validation {
            field: "--listen".into(),
            reason: format!("'{listen}': {e}"),
        })?,
        None => cfg.listen_addr()?,
    };

    let fleet = Fleet::new(Arc::new(cfg.resolve_fleet()?));
    let devices = fleet.config().len();
    if devices == 0 {
        warn!("no devices configured, reports will be empty");
    }

    let app = server::build_router(fleet);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!(%addr, devices, "serving switch reports");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
