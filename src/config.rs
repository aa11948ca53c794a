use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Sensor feed
    pub source_url: String,
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,

    // Local view
    pub view_host: String,
    pub view_port: u16,
    pub render_terminal: bool,

    // Logging
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: "http://127.0.0.1:5000".to_string(),
            poll_interval_seconds: 5,
            request_timeout_seconds: 10,
            view_host: "127.0.0.1".to_string(),
            view_port: 3000,
            render_terminal: true,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and a `.env` file if present).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to the defaults; set-but-malformed ones are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` on unparseable or out-of-range values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let poll_interval_seconds =
            parsed(&lookup, "POLL_INTERVAL_SECONDS", defaults.poll_interval_seconds)?;
        if poll_interval_seconds == 0 {
            return Err(ConfigError::Invalid {
                name: "POLL_INTERVAL_SECONDS",
                value: "0".to_string(),
            });
        }

        let request_timeout_seconds = parsed(
            &lookup,
            "REQUEST_TIMEOUT_SECONDS",
            defaults.request_timeout_seconds,
        )?;
        if request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECONDS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            // Sensor feed
            source_url: lookup("DASHBOARD_SOURCE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.source_url),
            poll_interval_seconds,
            request_timeout_seconds,

            // Local view
            view_host: lookup("VIEW_HOST").unwrap_or(defaults.view_host),
            view_port: parsed(&lookup, "VIEW_PORT", defaults.view_port)?,
            render_terminal: parsed(&lookup, "RENDER_TERMINAL", defaults.render_terminal)?,

            // Logging
            log_format: lookup("LOG_FORMAT")
                .map_or(defaults.log_format, |s| LogFormat::from_str(&s)),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.view_host, self.view_port)
    }
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
