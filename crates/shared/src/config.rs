//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "LEDGERVIEW";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statement rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency the ledger amounts are denominated in.
    #[serde(default)]
    pub currency: Currency,
    /// Maximum absolute balance-check delta still treated as balanced.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
    /// Entity name printed above the statements.
    #[serde(default)]
    pub entity_name: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            balance_tolerance: default_balance_tolerance(),
            entity_name: None,
        }
    }
}

fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "ledgerview=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Files are looked up in `config/` relative to the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        Self::load_from("config")
    }

    /// Loads configuration from files in `dir` plus environment overrides.
    ///
    /// Sources, lowest precedence first: `{dir}/default`, `{dir}/{RUN_MODE}`,
    /// then `LEDGERVIEW__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source is malformed.
    pub fn load_from(dir: &str) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
