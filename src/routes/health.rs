use axum::http::StatusCode;

/// Health check endpoint
///
/// Returns 200 OK while the view is being served, whether or not the sensor
/// server is reachable.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
