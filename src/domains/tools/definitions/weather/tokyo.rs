//! Current weather in Tokyo, looked up by city name.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::{Location, WeatherSource};
use super::common::{fetch_summary, finish, to_json_text};

/// `getTokyoWeather` takes no arguments; anything supplied is ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TokyoWeatherParams {}

/// Fixed-location weather tool.
#[derive(Debug, Clone)]
pub struct TokyoWeatherTool;

impl TokyoWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getTokyoWeather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current weather in Tokyo. Returns a JSON object with Japanese keys: city (都市), temperature (気温), conditions (天気), humidity (湿度) and wind speed (風速).";

    /// City name sent upstream as `q`.
    pub const CITY: &'static str = "Tokyo";

    /// Returned in place of the summary whenever the lookup fails.
    pub const FAILURE_MESSAGE: &'static str = "東京の天気情報の取得に失敗しました";

    /// Appended to the wind speed.
    pub const WIND_UNIT: &'static str = "m/s";

    /// Look up Tokyo's weather and format the result.
    #[instrument(skip_all)]
    pub async fn execute(source: &dyn WeatherSource) -> CallToolResult {
        info!("Fetching current weather for {}", Self::CITY);

        let location = Location::City(Self::CITY.to_string());
        let outcome = fetch_summary(source, &location, Self::WIND_UNIT)
            .await
            .and_then(|summary| to_json_text(&summary));

        finish(Self::NAME, outcome, Self::FAILURE_MESSAGE)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TokyoWeatherParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let source = source.clone();
            async move { Ok::<_, McpError>(Self::execute(source.as_ref()).await) }.boxed()
        })
    }
}
