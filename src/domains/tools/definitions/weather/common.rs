//! Response shaping shared by the weather tools.
//!
//! Both tools fetch through a [`WeatherSource`], reshape the upstream payload
//! into a flat object with Japanese keys, and collapse every failure into a
//! fixed fallback message.

use rmcp::model::{CallToolResult, Content};
use serde::{Serialize, Serializer};
use tracing::warn;

use super::client::{Location, UpstreamWeather, WeatherSource};
use crate::domains::tools::ToolError;

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The five weather fields both tools return, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    #[serde(rename = "都市")]
    pub city: String,
    #[serde(rename = "気温")]
    pub temperature: String,
    #[serde(rename = "天気")]
    pub weather: String,
    #[serde(rename = "湿度")]
    pub humidity: String,
    #[serde(rename = "風速")]
    pub wind_speed: String,
}

impl WeatherSummary {
    /// Shape an upstream reading. `wind_unit` is appended verbatim to the
    /// wind speed.
    pub fn from_upstream(upstream: &UpstreamWeather, wind_unit: &str) -> Result<Self, ToolError> {
        Ok(Self {
            city: upstream.name.clone(),
            temperature: format!("{}°C", upstream.main.temp),
            weather: upstream.description()?.to_string(),
            humidity: format!("{}%", upstream.main.humidity),
            wind_speed: format!("{}{}", upstream.wind.speed, wind_unit),
        })
    }
}

/// Serialize an `f64` as a JSON integer when it has no fractional part, so
/// `35.0` prints as `35`.
pub fn serialize_plain_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Fetch the weather at `location` and shape it into a [`WeatherSummary`].
pub async fn fetch_summary(
    source: &dyn WeatherSource,
    location: &Location,
    wind_unit: &str,
) -> Result<WeatherSummary, ToolError> {
    let upstream = source.current(location).await?;
    WeatherSummary::from_upstream(&upstream, wind_unit)
}

/// Encode a tool payload as compact JSON text.
pub fn to_json_text<T: Serialize>(payload: &T) -> Result<String, ToolError> {
    serde_json::to_string(payload).map_err(|e| ToolError::internal(e.to_string()))
}

/// Tool boundary: the JSON text on success, `fallback` on any failure.
pub fn finish(tool: &str, outcome: Result<String, ToolError>, fallback: &str) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => {
            warn!(tool = tool, error = %e, "Weather lookup failed");
            fallback_result(fallback)
        }
    }
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a result carrying the fixed fallback message.
///
/// The fallback is ordinary text content, not a tool error: hosts receive it
/// exactly like a successful summary.
pub fn fallback_result(message: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.to_string())])
}
