//! Application configuration management.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Balance engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Balance engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// How the closing entry of the annual balance is computed.
    #[serde(default)]
    pub closing_method: ClosingMethod,
}

/// Closing-entry computation method for the annual balance.
///
/// `Legacy` reproduces the historical behavior, which derives the closing
/// entry from the gain/loss columns alone. `Corrected` closes each column
/// pair from its own residual, so the final totals always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingMethod {
    /// Historical closing rule, kept for compatibility with saved balances.
    #[default]
    Legacy,
    /// Per-pair residual closing rule.
    Corrected,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CUADRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
