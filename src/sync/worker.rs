use crate::common::AppState;
use crate::dashboard::{AppliedSections, ApplyOutcome};
use crate::error::AppResult;
use crate::render::terminal;

/// Fetch one payload and apply it to the dashboard.
///
/// Returns the sections that changed, or `None` if the payload was stale.
/// A failed fetch leaves the dashboard untouched.
///
/// # Errors
///
/// Returns `AppError::Upstream` if the sensor server could not be reached or
/// sent an unusable body.
pub async fn poll_once(state: &AppState, seq: u64) -> AppResult<Option<AppliedSections>> {
    let payload = state.feed_client.get_data().await?;

    let mut dashboard = state.dashboard.write().await;
    let outcome = dashboard.apply(seq, &payload);
    match outcome {
        ApplyOutcome::Applied(sections) => {
            tracing::debug!(
                seq,
                status = sections.status,
                alerts = sections.alerts,
                channels = ?sections.channels,
                "Dashboard updated"
            );

            let frame = state
                .config
                .render_terminal
                .then(|| terminal::render_frame(&dashboard));
            // Stdout may block; readers must not wait on it
            drop(dashboard);
            if let Some(frame) = frame {
                println!("{frame}");
            }

            Ok(Some(sections))
        }
        ApplyOutcome::Stale { seq, last_seq } => {
            tracing::warn!(seq, last_seq, "Dropping stale sensor payload");
            Ok(None)
        }
    }
}
