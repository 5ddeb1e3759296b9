//! Tool Registry - tool listing and dispatch by name.
//!
//! The MCP transport goes through the rmcp `ToolRouter`; the registry serves
//! callers that hold a tool name and raw JSON arguments, such as
//! [`McpServer::dispatch`](crate::core::McpServer::dispatch).

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::ToolError;
use super::definitions::{TokyoWeatherTool, WeatherByCoordinatesTool, WeatherSource};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    source: Arc<dyn WeatherSource>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![TokyoWeatherTool::NAME, WeatherByCoordinatesTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![TokyoWeatherTool::to_tool(), WeatherByCoordinatesTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Only an unknown tool name is an error; every failure inside a known
    /// tool comes back as that tool's fallback result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            TokyoWeatherTool::NAME => Ok(TokyoWeatherTool::execute(self.source.as_ref()).await),
            WeatherByCoordinatesTool::NAME => {
                Ok(WeatherByCoordinatesTool::call(arguments, self.source.as_ref()).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
