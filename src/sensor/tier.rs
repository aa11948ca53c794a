use serde::Serialize;

use crate::sensor::channel::Channel;
use crate::sensor::normalize::Measurement;

/// Display emphasis for a current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl Tier {
    /// CSS class applied to the current-value label. Normal has none.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Warning => "text-warning",
            Self::Danger => "text-danger",
        }
    }
}

/// Static thresholds for one channel. Comparisons are strict (`value > limit`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub danger: Option<f64>,
}

impl Channel {
    #[must_use]
    pub fn thresholds(self) -> Thresholds {
        match self {
            Self::Temperature => Thresholds {
                warning: 40.0,
                danger: Some(50.0),
            },
            // Humidity never reaches danger.
            Self::Humidity => Thresholds {
                warning: 85.0,
                danger: None,
            },
            Self::Vibration => Thresholds {
                warning: 5.0,
                danger: Some(7.0),
            },
        }
    }
}

#[must_use]
pub fn classify_tier(channel: Channel, value: f64) -> Tier {
    let thresholds = channel.thresholds();
    if thresholds.danger.is_some_and(|limit| value > limit) {
        Tier::Danger
    } else if value > thresholds.warning {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

/// Like `classify_tier`, but non-numeric measurements are always `Normal`.
#[must_use]
pub fn classify_measurement(channel: Channel, measurement: &Measurement) -> Tier {
    measurement
        .as_f64()
        .map_or(Tier::Normal, |v| classify_tier(channel, v))
}
