//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) on top of defaults.
//! The configuration is built once at startup and handed to the server, which
//! passes the relevant sections down to the tools.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Current-weather endpoint of the OpenWeatherMap API.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream weather API configuration.
    pub weather: WeatherConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Problems found while loading, reported by [`Config::log_diagnostics`]
    /// once logging is up.
    #[serde(skip)]
    pub diagnostics: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Upstream weather API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Endpoint queried by both weather tools.
    pub api_url: String,

    /// Request timeout in seconds. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OpenWeatherMap API key, sent as the `appid` query parameter.
    pub weather_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_WEATHER_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "TokyoWeather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
            credentials: CredentialsConfig::default(),
            diagnostics: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_WEATHER_API_URL`, ...). The API key is read from
    /// `WEATHER_API_KEY`.
    ///
    /// Runs before logging is initialized, so problems are collected into
    /// `diagnostics` instead of being logged here.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = !matches!(timestamps.to_lowercase().as_str(), "false" | "0");
        }

        if let Ok(transport) = std::env::var("MCP_TRANSPORT") {
            match TransportConfig::parse(&transport) {
                Some(kind) => config.transport = kind,
                None => config.diagnostics.push(format!(
                    "Unsupported MCP_TRANSPORT '{}', using stdio",
                    transport
                )),
            }
        }

        if let Ok(api_url) = std::env::var("MCP_WEATHER_API_URL") {
            config.weather.api_url = api_url;
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => config.weather.timeout_secs = Some(secs),
                Err(_) => config.diagnostics.push(format!(
                    "Ignoring invalid MCP_WEATHER_TIMEOUT_SECS value: {}",
                    timeout
                )),
            }
        }

        match std::env::var("WEATHER_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => {
                config.credentials.weather_api_key = Some(api_key);
            }
            _ => config.diagnostics.push(
                "WEATHER_API_KEY not set - upstream requests will be rejected \
                 and tools will return their fallback message"
                    .to_string(),
            ),
        }

        config
    }

    /// Log the problems collected by [`Config::from_env`] at `warn`.
    ///
    /// Call after the tracing subscriber is installed.
    pub fn log_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            warn!("{}", diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("WEATHER_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.weather_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("WEATHER_API_KEY");
        }
    }

    #[test]
    fn test_missing_api_key_is_not_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("WEATHER_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.weather_api_key.is_none());
        assert!(
            config
                .diagnostics
                .iter()
                .any(|d| d.starts_with("WEATHER_API_KEY not set"))
        );
    }

    #[test]
    fn test_diagnostics_deferred_until_logging() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("WEATHER_API_KEY", "test_key_12345");
            std::env::set_var("MCP_WEATHER_TIMEOUT_SECS", "soon");
            std::env::set_var("MCP_TRANSPORT", "tcp");
        }
        let config = Config::from_env();
        assert_eq!(config.transport, TransportConfig::Stdio);
        assert_eq!(
            config.diagnostics,
            vec![
                "Unsupported MCP_TRANSPORT 'tcp', using stdio".to_string(),
                "Ignoring invalid MCP_WEATHER_TIMEOUT_SECS value: soon".to_string(),
            ]
        );
        config.log_diagnostics();

        unsafe {
            std::env::set_var("MCP_WEATHER_TIMEOUT_SECS", "5");
            std::env::remove_var("MCP_TRANSPORT");
        }
        let config = Config::from_env();
        assert!(config.diagnostics.is_empty());

        unsafe {
            std::env::remove_var("WEATHER_API_KEY");
            std::env::remove_var("MCP_WEATHER_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_weather_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WEATHER_API_URL", "http://127.0.0.1:9/weather");
            std::env::set_var("MCP_WEATHER_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.api_url, "http://127.0.0.1:9/weather");
        assert_eq!(config.weather.timeout_secs, Some(5));

        unsafe {
            std::env::set_var("MCP_WEATHER_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.timeout_secs, None);

        unsafe {
            std::env::remove_var("MCP_WEATHER_API_URL");
            std::env::remove_var("MCP_WEATHER_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            weather_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "TokyoWeather");
        assert_eq!(config.weather.api_url, DEFAULT_WEATHER_API_URL);
        assert!(config.weather.timeout_secs.is_none());
        assert!(config.credentials.weather_api_key.is_none());
        assert!(config.diagnostics.is_empty());
    }
}
