//! OpenWeatherMap current-weather client.
//!
//! Both weather tools go through [`WeatherSource`], implemented here by
//! [`WeatherClient`]: one GET per lookup, no retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Request, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::Error;
use crate::core::config::{CredentialsConfig, WeatherConfig};
use crate::domains::tools::ToolError;

/// Unit system requested from the upstream API (Celsius, m/s).
pub const UNITS: &str = "metric";

/// Language of the upstream `weather[].description` field.
pub const LANG: &str = "ja";

/// Where to look up the weather.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// City name, sent as `q`.
    City(String),
    /// Decimal degrees, sent as `lat` / `lon`. Not range-checked.
    Coordinates { latitude: f64, longitude: f64 },
}

impl Location {
    /// Query parameters selecting this location.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City(name) => vec![("q", name.clone())],
            Self::Coordinates {
                latitude,
                longitude,
            } => vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
        }
    }
}

/// The part of the upstream payload the tools consume.
///
/// Unknown fields are ignored; a missing field fails deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamWeather {
    pub name: String,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    /// Degrees Celsius.
    pub temp: f64,
    /// Percent.
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
}

impl UpstreamWeather {
    /// Description of the primary weather condition (`weather[0]`).
    pub fn description(&self) -> Result<&str, ToolError> {
        self.weather
            .first()
            .map(|c| c.description.as_str())
            .ok_or_else(|| ToolError::malformed("empty `weather` array"))
    }
}

/// A provider of current weather readings.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current weather at `location`.
    async fn current(&self, location: &Location) -> Result<UpstreamWeather, ToolError>;
}

/// HTTP client for the configured weather endpoint.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_url: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl WeatherClient {
    /// Build a client from the server configuration.
    pub fn new(
        weather: &WeatherConfig,
        credentials: &CredentialsConfig,
    ) -> crate::core::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = weather.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ToolError::from)?;

        Self::with_http(http, &weather.api_url, credentials.weather_api_key.clone())
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http(
        http: reqwest::Client,
        api_url: &str,
        api_key: Option<String>,
    ) -> crate::core::Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| Error::config(format!("invalid weather API URL '{}': {}", api_url, e)))?;

        Ok(Self {
            http,
            api_url,
            api_key,
        })
    }

    /// Build the GET request for `location`.
    ///
    /// Parameter order: location selector, `appid` (omitted when no key is
    /// configured), `units`, `lang`.
    pub fn request(&self, location: &Location) -> Result<Request, ToolError> {
        let mut query = location.query_pairs();
        if let Some(key) = &self.api_key {
            query.push(("appid", key.clone()));
        }
        query.push(("units", UNITS.to_string()));
        query.push(("lang", LANG.to_string()));

        Ok(self.http.get(self.api_url.clone()).query(&query).build()?)
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    #[instrument(skip(self))]
    async fn current(&self, location: &Location) -> Result<UpstreamWeather, ToolError> {
        let request = self.request(location)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Upstream response received: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| ToolError::malformed(e.to_string()))
    }
}
