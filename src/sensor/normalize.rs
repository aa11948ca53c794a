//! Value extraction for readings whose `value` field arrives in several shapes.
//!
//! The feed mixes plain numbers and objects keyed by the measurement name
//! (`{"temperature": 21.5}`, `{"magnitude": 3.2}`, ...). The envelope is
//! classified once at deserialization time; `extract_value` then resolves it
//! to a single measurement through the ordered `MEASUREMENT_KEYS` table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The container carrying a reading's value, as classified at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ValueEnvelope {
    /// A bare number.
    Number(f64),
    /// An object that may carry the measurement under one of the known keys.
    Structured(Map<String, Value>),
    /// Anything else, kept verbatim.
    Other(Value),
}

impl Default for ValueEnvelope {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl From<Value> for ValueEnvelope {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Other(Value::Number(n)),
            },
            Value::Object(map) => Self::Structured(map),
            other => Self::Other(other),
        }
    }
}

impl From<ValueEnvelope> for Value {
    fn from(envelope: ValueEnvelope) -> Self {
        match envelope {
            ValueEnvelope::Number(v) => Value::from(v),
            ValueEnvelope::Structured(map) => Value::Object(map),
            ValueEnvelope::Other(v) => v,
        }
    }
}

/// Result of value extraction: a number, or whatever could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measurement {
    Numeric(f64),
    Raw(Value),
}

impl Measurement {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Raw(_) => None,
        }
    }

    fn from_json(value: &Value) -> Self {
        value
            .as_f64()
            .map_or_else(|| Self::Raw(value.clone()), Self::Numeric)
    }
}

pub type Extractor = fn(&Value) -> Measurement;

/// Known measurement keys, highest priority first.
pub const MEASUREMENT_KEYS: [(&str, Extractor); 6] = [
    ("temperature", Measurement::from_json),
    ("humidity", Measurement::from_json),
    ("magnitude", Measurement::from_json),
    ("level", Measurement::from_json),
    ("vibration_level", Measurement::from_json),
    ("current_magnitude", Measurement::from_json),
];

/// Resolve an envelope to a single measurement.
///
/// Numbers pass through. Structured objects are probed in `MEASUREMENT_KEYS`
/// order and the first present key wins. Anything unresolvable comes back
/// unchanged as `Measurement::Raw`; this never fails.
#[must_use]
pub fn extract_value(envelope: &ValueEnvelope) -> Measurement {
    match envelope {
        ValueEnvelope::Number(v) => Measurement::Numeric(*v),
        ValueEnvelope::Structured(map) => MEASUREMENT_KEYS
            .iter()
            .find_map(|(key, extract)| map.get(*key).map(*extract))
            .unwrap_or_else(|| Measurement::Raw(Value::Object(map.clone()))),
        ValueEnvelope::Other(v) => Measurement::Raw(v.clone()),
    }
}
