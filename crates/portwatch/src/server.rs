//! HTTP presenter: one fleet poll per `GET /`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

use portwatch_core::{Fleet, FleetReport};

pub type PollFuture = Pin<Box<dyn Future<Output = FleetReport> + Send>>;

/// Produces one fleet report per call.
pub type Poller = Arc<dyn Fn() -> PollFuture + Send + Sync>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    poller: Poller,
    devices: usize,
}

/// Build the router serving live reports for `fleet`.
pub fn build_router(fleet: Fleet) -> Router {
    let devices = fleet.config().len();
    let poller: Poller = Arc::new(move || -> PollFuture {
        let fleet = fleet.clone();
        Box::pin(async move { fleet.poll().await })
    });
    router_with(poller, devices)
}

/// Build the router around an arbitrary report source.
pub fn router_with(poller: Poller, devices: usize) -> Router {
    Router::new()
        .route("/", get(report))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { poller, devices })
}

/// `GET /` -- poll the fleet now and return the report.
///
/// The poll runs on its own task so a fault inside it becomes a 500
/// instead of a dropped connection.
async fn report(State(state): State<AppState>) -> Response {
    let task = tokio::spawn((state.poller)());

    let body = match task.await {
        Ok(report) => serde_json::to_string_pretty(&report)
            .map_err(|e| format!("could not serialize report: {e}")),
        Err(e) => Err(format!("poll task failed: {e}")),
    };

    match body {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(message) => {
            error!(error = %message, "report request failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }).to_string(),
            )
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "devices": state.devices }))
}

fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response()
}
