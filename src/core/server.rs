//! MCP Server implementation and lifecycle management.
//!
//! This module contains the server handler that implements the MCP protocol
//! by routing tool calls to the weather tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines its parameters, an `execute()` method and a
//! `create_route()` method. The ToolRouter is built in
//! `domains/tools/router.rs`; adding a tool does not require touching this
//! file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{
    ToolError, ToolRegistry, build_tool_router,
    definitions::{WeatherClient, WeatherSource},
};

/// The main MCP server handler.
///
/// Cloning is cheap: configuration, upstream client and routes are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool lookup by name, outside the MCP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server querying the configured weather API.
    ///
    /// Fails when the weather API URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = WeatherClient::new(&config.weather, &config.credentials)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server whose tools read from `source`.
    pub fn with_source(config: Config, source: Arc<dyn WeatherSource>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(source.clone())),
            tool_router: build_tool_router::<Self>(source),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Metadata of every routed tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name with raw JSON arguments.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Current weather from OpenWeatherMap. Use getTokyoWeather for Tokyo, or \
                 getWeatherByCoordinates with lat/lon for any location. Results are JSON \
                 with Japanese keys; a failed lookup returns a short Japanese error message."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
