use serde::{Deserialize, Serialize};

use crate::common::lenient_string;

pub const DANGER_LEVEL: &str = "danger";

/// An alert as sent by the sensor server. Lives for one render pass only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn is_danger(&self) -> bool {
        self.level == DANGER_LEVEL
    }
}

/// Danger alerts first; order within each group is preserved.
#[must_use]
pub fn sort_alerts(alerts: &[Alert]) -> Vec<Alert> {
    let mut sorted = alerts.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(|alert| !alert.is_danger());
    sorted
}
