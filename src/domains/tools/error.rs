//! Tool-specific error types.
//!
//! These errors never reach an MCP client directly: each weather tool
//! collapses them into its fixed fallback message. They exist so the cause of
//! a failed lookup can be logged and tested.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream request could not be built, sent, or read.
    #[error("Upstream request failed: {0}")]
    Http(reqwest::Error),

    /// The upstream API answered with a non-success status code.
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// The upstream payload is missing fields the tools rely on.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "malformed response" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for ToolError {
    /// Request URLs carry the API key, so they are stripped before the error
    /// can end up in a log line.
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}
