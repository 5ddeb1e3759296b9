//! Transport layer for the MCP server.
//!
//! MCP hosts launch this server as a child process and exchange JSON-RPC
//! messages over its standard input/output, so STDIO is the only transport.
//! The transport owns the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod config;
mod error;
mod service;
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
