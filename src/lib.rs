//! Tokyo Weather MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing two tools that report the
//! current weather from the OpenWeatherMap API as a small JSON summary with
//! Japanese field names:
//!
//! - `getTokyoWeather`: weather in Tokyo, looked up by city name
//! - `getWeatherByCoordinates`: weather at a `lat` / `lon` pair
//!
//! Any failure (bad arguments, network error, upstream error status,
//! unexpected payload) is reported as a fixed Japanese message instead of an
//! error.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   STDIO transport
//! - **domains::tools**: the weather tools, their upstream client, router and
//!   registry
//!
//! # Example
//!
//! ```rust,no_run
//! use tokyo_weather_mcp::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
