//! Configuration structures for the budget tools.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{OrcamentoError, Result};

/// Main configuration for orcamento.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrcamentoConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// CLI output configuration.
    pub output: OutputConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Output configuration for the `report` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line.
    pub default_format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: ReportFormat::Text,
        }
    }
}

/// Output format of a rendered budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// The plain text budget report.
    Text,
    /// Report, line items and summary as JSON.
    Json,
    /// One CSV row per line item.
    Csv,
}

impl OrcamentoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| OrcamentoError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Socket address string for the HTTP server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrcamentoConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.output.default_format, ReportFormat::Text);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OrcamentoConfig =
            serde_json::from_str(r#"{ "server": { "port": 8080 } }"#).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.output.default_format, ReportFormat::Text);
    }

    #[test]
    fn test_format_names() {
        let config: OrcamentoConfig =
            serde_json::from_str(r#"{ "output": { "default_format": "csv" } }"#).unwrap();
        assert_eq!(config.output.default_format, ReportFormat::Csv);
    }
}
