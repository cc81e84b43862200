//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Forecast calculation configuration.
    #[serde(default)]
    pub forecast: ForecastConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Forecast calculation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Months between the calendar and financial year start (6 = fiscal
    /// year starts in July).
    #[serde(default = "default_fiscal_offset")]
    pub fiscal_offset: u32,
    /// How long loaded base data may be reused between recalculations.
    #[serde(default = "default_base_data_ttl")]
    pub base_data_ttl_secs: u64,
    /// Maximum number of cached base-data sets.
    #[serde(default = "default_base_data_capacity")]
    pub base_data_capacity: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            fiscal_offset: default_fiscal_offset(),
            base_data_ttl_secs: default_base_data_ttl(),
            base_data_capacity: default_base_data_capacity(),
        }
    }
}

fn default_fiscal_offset() -> u32 {
    6
}

fn default_base_data_ttl() -> u64 {
    300 // 5 minutes
}

fn default_base_data_capacity() -> u64 {
    64
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
            .add_source(config::Environment::with_prefix("PROGNOS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_defaults() {
        let forecast = ForecastConfig::default();
        assert_eq!(forecast.fiscal_offset, 6);
        assert_eq!(forecast.base_data_ttl_secs, 300);
        assert_eq!(forecast.base_data_capacity, 64);
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("PROGNOS__DATABASE__URL", Some("postgres://localhost/prognos")),
                ("PROGNOS__DATABASE__MAX_CONNECTIONS", Some("5")),
                ("PROGNOS__FORECAST__FISCAL_OFFSET", Some("6")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.database.url, "postgres://localhost/prognos");
                assert_eq!(config.database.max_connections, 5);
                assert_eq!(config.database.min_connections, 1);
                assert_eq!(config.forecast.fiscal_offset, 6);
            },
        );
    }
}
