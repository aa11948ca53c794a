use serde::{Deserialize, Serialize};

use crate::common::{lenient_section, lenient_string};
use crate::sensor::{Alert, Channel, ValueEnvelope};

/// Response from `GET /api/data`.
///
/// Every section is optional; an absent section means "leave it as it was".
/// A section of the wrong shape is dropped on its own rather than failing
/// the whole payload. Unknown keys sent by the server are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataResponse {
    #[serde(default, deserialize_with = "lenient_section")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub last_update: Option<String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub temperature: Option<Vec<Reading>>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub humidity: Option<Vec<Reading>>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub vibration: Option<Vec<Reading>>,
}

impl DataResponse {
    /// Series for one channel, if the server sent it.
    #[must_use]
    pub fn series(&self, channel: Channel) -> Option<&[Reading]> {
        match channel {
            Channel::Temperature => self.temperature.as_deref(),
            Channel::Humidity => self.humidity.as_deref(),
            Channel::Vibration => self.vibration.as_deref(),
        }
    }
}

/// One timestamped data point, oldest first within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Display label, e.g. `"14:03:27"`
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(default)]
    pub value: ValueEnvelope,
}
