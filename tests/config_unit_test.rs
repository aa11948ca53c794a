//! Unit tests for configuration loading.
//!
//! Run with: cargo test --test config_unit_test

use std::collections::HashMap;

use sensor_dash::config::{Config, ConfigError, LogFormat};

fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = load(&[]).unwrap();
    assert_eq!(config.source_url, "http://127.0.0.1:5000");
    assert_eq!(config.poll_interval_seconds, 5);
    assert_eq!(config.request_timeout_seconds, 10);
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert!(config.render_terminal);
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn overrides_are_parsed() {
    let config = load(&[
        ("DASHBOARD_SOURCE_URL", "http://sensors.local:5000/"),
        ("POLL_INTERVAL_SECONDS", "2"),
        ("VIEW_HOST", "0.0.0.0"),
        ("VIEW_PORT", "8080"),
        ("RENDER_TERMINAL", "false"),
        ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();

    assert_eq!(config.source_url, "http://sensors.local:5000");
    assert_eq!(config.poll_interval_seconds, 2);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert!(!config.render_terminal);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn malformed_values_are_rejected() {
    let err = load(&[("VIEW_PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "VIEW_PORT", .. }));

    let err = load(&[("POLL_INTERVAL_SECONDS", "0")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "POLL_INTERVAL_SECONDS",
            ..
        }
    ));
}
