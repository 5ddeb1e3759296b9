//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Parse an `MCP_TRANSPORT` value. Returns `None` for unsupported kinds.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "" | "stdio" => Some(Self::Stdio),
            _ => None,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdio() {
        assert_eq!(TransportConfig::default(), TransportConfig::stdio());
        assert_eq!(
            TransportConfig::default().description(),
            "STDIO (standard MCP mode)"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(TransportConfig::parse("stdio"), Some(TransportConfig::Stdio));
        assert_eq!(TransportConfig::parse("STDIO"), Some(TransportConfig::Stdio));
        assert_eq!(TransportConfig::parse(""), Some(TransportConfig::Stdio));
        assert_eq!(TransportConfig::parse("tcp"), None);
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_value(TransportConfig::Stdio).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "stdio" }));
    }
}
