//! Current weather at a latitude/longitude pair.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::client::{Location, WeatherSource};
use super::common::{WeatherSummary, fetch_summary, finish, serialize_plain_number, to_json_text};
use crate::domains::tools::ToolError;

/// Parameters for the coordinate lookup. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, JsonSchema)]
pub struct CoordinatesParams {
    /// Latitude in decimal degrees.
    #[schemars(description = "Latitude in decimal degrees")]
    #[serde(alias = "latitude")]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[schemars(description = "Longitude in decimal degrees")]
    #[serde(alias = "longitude")]
    pub lon: f64,
}

impl CoordinatesParams {
    /// Deserialize tool-call arguments; missing arguments count as `{}`.
    pub fn from_arguments(arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }
}

/// Output of the coordinate lookup: the echoed coordinates followed by the
/// shared weather fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateWeather {
    #[serde(rename = "緯度", serialize_with = "serialize_plain_number")]
    pub latitude: f64,
    #[serde(rename = "経度", serialize_with = "serialize_plain_number")]
    pub longitude: f64,
    #[serde(flatten)]
    pub summary: WeatherSummary,
}

/// Coordinate-based weather tool.
#[derive(Debug, Clone)]
pub struct WeatherByCoordinatesTool;

impl WeatherByCoordinatesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getWeatherByCoordinates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current weather at the given latitude (lat) and longitude (lon). Returns a JSON object with Japanese keys: the echoed latitude (緯度) and longitude (経度), then city (都市), temperature (気温), conditions (天気), humidity (湿度) and wind speed (風速).";

    /// Returned in place of the summary whenever the lookup fails.
    pub const FAILURE_MESSAGE: &'static str = "指定された座標の天気情報の取得に失敗しました";

    /// Appended to the wind speed. Keeps the space this tool has always
    /// emitted, unlike `getTokyoWeather`.
    pub const WIND_UNIT: &'static str = " m/s";

    /// Validate raw arguments, then look up and format the weather.
    ///
    /// Invalid arguments produce the fallback message like any other failure.
    pub async fn call(arguments: Option<JsonObject>, source: &dyn WeatherSource) -> CallToolResult {
        match CoordinatesParams::from_arguments(arguments) {
            Ok(params) => Self::execute(params, source).await,
            Err(e) => finish(Self::NAME, Err(e), Self::FAILURE_MESSAGE),
        }
    }

    /// Look up the weather at `params` and format the result.
    #[instrument(skip(source))]
    pub async fn execute(params: CoordinatesParams, source: &dyn WeatherSource) -> CallToolResult {
        info!("Fetching current weather for ({}, {})", params.lat, params.lon);

        let location = Location::Coordinates {
            latitude: params.lat,
            longitude: params.lon,
        };
        let outcome = fetch_summary(source, &location, Self::WIND_UNIT)
            .await
            .and_then(|summary| {
                to_json_text(&CoordinateWeather {
                    latitude: params.lat,
                    longitude: params.lon,
                    summary,
                })
            });

        finish(Self::NAME, outcome, Self::FAILURE_MESSAGE)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CoordinatesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP tool router.
    pub fn create_route<S>(source: Arc<dyn WeatherSource>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let source = source.clone();
            async move { Ok::<_, McpError>(Self::call(args, source.as_ref()).await) }.boxed()
        })
    }
}
