use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One sensor dimension shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Temperature,
    Humidity,
    Vibration,
}

/// Vertical axis bounds for a channel chart. `None` lets the chart scale to the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Vibration];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Vibration => "vibration",
        }
    }

    /// Dataset label used by the chart widget.
    #[must_use]
    pub fn chart_label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Humidity => "Humidity (%)",
            Self::Vibration => "Magnitude (0-9)",
        }
    }

    #[must_use]
    pub fn axis_range(self) -> AxisRange {
        match self {
            Self::Temperature | Self::Humidity => AxisRange {
                min: Some(0.0),
                max: None,
                step: None,
            },
            // Magnitude scale is bounded
            Self::Vibration => AxisRange {
                min: Some(0.0),
                max: Some(9.0),
                step: Some(1.0),
            },
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown sensor channel: {0}")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "humidity" => Ok(Self::Humidity),
            "vibration" | "magnitude" => Ok(Self::Vibration),
            _ => Err(UnknownChannel(s.to_string())),
        }
    }
}
