use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::Response,
};
use serde::Serialize;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::sensor::Channel;

/// Full dashboard state as JSON.
pub async fn get_snapshot(State(state): State<AppState>) -> AppResult<Response> {
    let dashboard = state.dashboard.read().await;
    json_response(&*dashboard)
}

/// One channel panel (chart + current value) as JSON.
pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> AppResult<Response> {
    let channel: Channel = channel
        .parse()
        .map_err(|e: crate::sensor::UnknownChannel| AppError::NotFound(e.to_string()))?;

    let dashboard = state.dashboard.read().await;
    let panel = dashboard
        .panel(channel)
        .ok_or_else(|| AppError::NotFound(format!("Channel '{channel}' has no panel")))?;

    json_response(panel)
}

fn json_response<T: Serialize>(value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value).map_err(|e| AppError::Internal(e.to_string()))?;
    Response::builder()
        .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .header(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
        .body(axum::body::Body::from(body))
        .map_err(|e| AppError::Internal(e.to_string()))
}
