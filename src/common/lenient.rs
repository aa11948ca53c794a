//! Forgiving field decoders for the sensor feed.
//!
//! One malformed field must not discard the rest of a payload, so these
//! decode through `serde_json::Value` first and fall back instead of failing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode any JSON value as display text.
///
/// `null` becomes an empty string; numbers and booleans are printed;
/// arrays and objects become their JSON text.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Decode a payload section, treating a malformed one as absent.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(raw) {
        Ok(section) => Ok(Some(section)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed payload section");
            Ok(None)
        }
    }
}
