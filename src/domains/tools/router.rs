//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; both share the same
//! [`WeatherSource`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{TokyoWeatherTool, WeatherByCoordinatesTool, WeatherSource};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(source: Arc<dyn WeatherSource>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(TokyoWeatherTool::create_route(source.clone()))
        .with_route(WeatherByCoordinatesTool::create_route(source))
}
