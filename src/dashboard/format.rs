use crate::sensor::{Alert, Channel, Measurement};

/// Shown when a channel has no usable current value.
pub const PLACEHOLDER: &str = "--";

/// Format the current value of a channel, e.g. `"21.5 °C"` or `"3.0/9.0"`.
///
/// Missing and non-numeric values render as the placeholder rather than
/// leaking raw JSON into the label.
#[must_use]
pub fn current_value(channel: Channel, current: Option<&Measurement>) -> String {
    let Some(value) = current.and_then(Measurement::as_f64) else {
        return PLACEHOLDER.to_string();
    };
    match channel {
        Channel::Temperature => format!("{value:.1} °C"),
        Channel::Humidity => format!("{value:.1} %"),
        Channel::Vibration => format!("{value:.1}/9.0"),
    }
}

#[must_use]
pub fn last_update(timestamp: &str) -> String {
    format!("Last update: {timestamp}")
}

#[must_use]
pub fn alert_class(alert: &Alert) -> String {
    format!("alert alert-{}", alert.level)
}

#[must_use]
pub fn alert_marker(alert: &Alert) -> &'static str {
    if alert.is_danger() { "▲" } else { "●" }
}
