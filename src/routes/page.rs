use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::common::AppState;
use crate::render::html;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let page = {
        let dashboard = state.dashboard.read().await;
        html::render_page(&dashboard, state.config.poll_interval_seconds)
    };

    ([(header::CACHE_CONTROL, "no-store")], Html(page))
}
