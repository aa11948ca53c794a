use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};

use crate::common::AppState;
use crate::sync::worker;

/// Poll the sensor server on a fixed schedule until `shutdown` fires.
///
/// Each tick awaits its request to completion before the next one can start,
/// so at most one request is in flight. Ticks that elapse while a request is
/// still running are skipped rather than queued. Failures are logged and the
/// next tick simply tries again.
pub async fn run_polling(state: AppState, mut shutdown: watch::Receiver<bool>) {
    let interval_secs = state.config.poll_interval_seconds;

    tracing::info!(
        interval_secs,
        url = %state.feed_client.data_url(),
        "Starting dashboard poller"
    );

    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut seq: u64 = 0;

    loop {
        // First tick completes immediately
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        seq += 1;
        tracing::debug!(seq, "Polling sensor data...");

        tokio::select! {
            result = worker::poll_once(&state, seq) => match result {
                Ok(Some(sections)) if sections.is_empty() => {
                    tracing::debug!(seq, "Payload carried no updates");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(seq, error = %e, "Sensor poll failed, retrying on next tick");
                }
            },
            _ = shutdown.changed() => break,
        }
    }

    tracing::info!("Dashboard poller stopped");
}
