pub mod health;
pub mod page;
pub mod snapshot;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::common::AppState;

pub fn build_router(state: AppState) -> Router {
    tracing::info!(
        refresh_secs = state.config.poll_interval_seconds,
        "Dashboard view configured"
    );

    let api_routes = Router::new()
        .route("/snapshot", get(snapshot::get_snapshot))
        .route("/snapshot/{channel}", get(snapshot::get_channel));

    // Health check routes
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    Router::new()
        .route("/", get(page::dashboard))
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
