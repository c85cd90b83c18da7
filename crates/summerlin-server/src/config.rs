//! Server configuration.

use serde::{Deserialize, Serialize};
use summerlin_core::{SummerlinError, SummerlinResult};
use summerlin_leads::MemoryLeadSink;
use summerlin_mortgage::LoanInputs;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Serve `GET /api/v1/leads` and keep leads in memory
    #[serde(default)]
    pub expose_leads: bool,

    /// Most leads kept in memory when `expose_leads` is set
    #[serde(default = "default_lead_history")]
    pub lead_history: usize,

    /// Upper bound on `limit` for listing searches
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Values the calculator starts from when a request omits a field
    #[serde(default)]
    pub calculator_defaults: LoanInputs,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_lead_history() -> usize {
    MemoryLeadSink::DEFAULT_CAPACITY
}

fn default_max_page_size() -> usize {
    200
}

/// Page size used when a listing search gives no `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 50;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            expose_leads: false,
            lead_history: default_lead_history(),
            max_page_size: default_max_page_size(),
            calculator_defaults: LoanInputs::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> SummerlinResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SummerlinError::config_error(format!("cannot read {path}: {e}")))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> SummerlinResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SummerlinError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> SummerlinResult<()> {
        if self.max_page_size == 0 {
            return Err(SummerlinError::config_error("max_page_size must be at least 1"));
        }
        if self.lead_history == 0 {
            return Err(SummerlinError::config_error("lead_history must be at least 1"));
        }
        self.calculator_defaults
            .validate()
            .map_err(|e| SummerlinError::config_error(format!("calculator_defaults: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_page_size, 200);
        assert_eq!(config.lead_history, 500);
        assert_eq!(config.calculator_defaults.home_price, 1_000_000.0);
    }

    #[test]
    fn test_partial_calculator_defaults() {
        let config = ServerConfig::from_toml(
            r#"
            port = 9090
            expose_leads = true

            [calculator_defaults]
            interest_rate = 5.75
            loan_term_years = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.expose_leads);
        assert_eq!(config.calculator_defaults.interest_rate, 5.75);
        assert_eq!(config.calculator_defaults.loan_term_years, 15);
        assert_eq!(config.calculator_defaults.down_payment, 200_000.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ServerConfig::from_toml("max_page_size = 0").is_err());
        assert!(ServerConfig::from_toml("lead_history = 0").is_err());
        assert!(ServerConfig::from_toml("[calculator_defaults]\nloan_term_years = 0").is_err());
        assert!(ServerConfig::from_toml("port = \"eighty\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summerlin.toml");
        std::fs::write(&path, "host = \"127.0.0.1\"\ncors_enabled = false\n").unwrap();

        let config = ServerConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.cors_enabled);
        assert!(ServerConfig::from_file("/nonexistent/summerlin.toml").is_err());
    }
}
