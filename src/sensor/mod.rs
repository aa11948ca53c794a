pub mod alerts;
pub mod channel;
pub mod normalize;
pub mod tier;

pub use alerts::{sort_alerts, Alert};
pub use channel::{AxisRange, Channel, UnknownChannel};
pub use normalize::{extract_value, Measurement, ValueEnvelope, MEASUREMENT_KEYS};
pub use tier::{classify_measurement, classify_tier, Thresholds, Tier};
