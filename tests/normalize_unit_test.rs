//! Unit tests for value extraction, tier classification and alert ordering.
//!
//! Run with: cargo test --test normalize_unit_test

use serde_json::json;
use sensor_dash::sensor::{
    classify_measurement, classify_tier, extract_value, sort_alerts, Alert, Channel, Measurement,
    Tier, ValueEnvelope,
};

fn envelope(raw: serde_json::Value) -> ValueEnvelope {
    serde_json::from_value(raw).unwrap()
}

fn alert(level: &str, message: &str) -> Alert {
    Alert {
        level: level.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn numeric_values_pass_through() {
    for v in [0.0, -3.5, 21.7, 1e6] {
        assert_eq!(extract_value(&envelope(json!(v))), Measurement::Numeric(v));
    }
    assert_eq!(extract_value(&envelope(json!(42))), Measurement::Numeric(42.0));
}

#[test]
fn single_known_key_is_extracted() {
    assert_eq!(extract_value(&envelope(json!({"level": 3}))), Measurement::Numeric(3.0));
    assert_eq!(
        extract_value(&envelope(json!({"temperature": 22.5}))),
        Measurement::Numeric(22.5)
    );
    assert_eq!(
        extract_value(&envelope(json!({"current_magnitude": 6.1, "unit": "richter"}))),
        Measurement::Numeric(6.1)
    );
}

#[test]
fn first_key_in_priority_order_wins() {
    assert_eq!(
        extract_value(&envelope(json!({"level": 2, "magnitude": 5}))),
        Measurement::Numeric(5.0)
    );
    assert_eq!(
        extract_value(&envelope(json!({"humidity": 60, "temperature": 30}))),
        Measurement::Numeric(30.0)
    );
}

#[test]
fn unknown_shapes_are_returned_unchanged() {
    let raw = json!({"pressure": 1013, "unit": "hPa"});
    assert_eq!(extract_value(&envelope(raw.clone())), Measurement::Raw(raw));

    assert_eq!(
        extract_value(&envelope(json!("n/a"))),
        Measurement::Raw(json!("n/a"))
    );
    assert_eq!(extract_value(&envelope(json!(null))), Measurement::Raw(json!(null)));
}

#[test]
fn non_numeric_known_key_value_is_returned_verbatim() {
    assert_eq!(
        extract_value(&envelope(json!({"temperature": "hot"}))),
        Measurement::Raw(json!("hot"))
    );
}

#[test]
fn known_key_wins_over_kind_value_pair() {
    let parsed = envelope(json!({"kind": "sensor", "value": 3, "temperature": 99}));
    assert_eq!(extract_value(&parsed), Measurement::Numeric(99.0));
}

#[test]
fn kind_value_pair_without_known_key_is_returned_unchanged() {
    let raw = json!({"kind": "sensor", "value": 3});
    assert_eq!(extract_value(&envelope(raw.clone())), Measurement::Raw(raw));
}

#[test]
fn temperature_tiers() {
    assert_eq!(classify_tier(Channel::Temperature, 55.0), Tier::Danger);
    assert_eq!(classify_tier(Channel::Temperature, 45.0), Tier::Warning);
    assert_eq!(classify_tier(Channel::Temperature, 20.0), Tier::Normal);
    // Thresholds are strict
    assert_eq!(classify_tier(Channel::Temperature, 50.0), Tier::Warning);
    assert_eq!(classify_tier(Channel::Temperature, 40.0), Tier::Normal);
}

#[test]
fn vibration_tiers() {
    assert_eq!(classify_tier(Channel::Vibration, 8.0), Tier::Danger);
    assert_eq!(classify_tier(Channel::Vibration, 6.0), Tier::Warning);
    assert_eq!(classify_tier(Channel::Vibration, 1.0), Tier::Normal);
    let magnitude: Channel = "magnitude".parse().unwrap();
    assert_eq!(classify_tier(magnitude, 7.5), Tier::Danger);
}

#[test]
fn humidity_has_no_danger_tier() {
    assert_eq!(classify_tier(Channel::Humidity, 99.0), Tier::Warning);
    assert_eq!(classify_tier(Channel::Humidity, 86.0), Tier::Warning);
    assert_eq!(classify_tier(Channel::Humidity, 85.0), Tier::Normal);
}

#[test]
fn non_numeric_measurements_classify_as_normal() {
    assert_eq!(
        classify_measurement(Channel::Temperature, &Measurement::Raw(json!("boiling"))),
        Tier::Normal
    );
    assert_eq!(
        classify_measurement(Channel::Temperature, &Measurement::Numeric(51.0)),
        Tier::Danger
    );
}

#[test]
fn danger_alerts_come_first_and_order_is_stable() {
    let alerts = vec![
        alert("warning", "a"),
        alert("danger", "b"),
        alert("warning", "c"),
    ];
    let messages: Vec<_> = sort_alerts(&alerts).into_iter().map(|a| a.message).collect();
    assert_eq!(messages, ["b", "a", "c"]);
}

#[test]
fn sort_alerts_keeps_order_within_each_group() {
    let alerts = vec![
        alert("info", "1"),
        alert("danger", "2"),
        alert("warning", "3"),
        alert("danger", "4"),
        alert("info", "5"),
    ];
    let messages: Vec<_> = sort_alerts(&alerts).into_iter().map(|a| a.message).collect();
    assert_eq!(messages, ["2", "4", "1", "3", "5"]);
    assert!(sort_alerts(&[]).is_empty());
}

#[test]
fn channel_names_parse() {
    assert_eq!("Temperature".parse::<Channel>().unwrap(), Channel::Temperature);
    assert_eq!("humidity".parse::<Channel>().unwrap(), Channel::Humidity);
    assert!("pressure".parse::<Channel>().is_err());
}
