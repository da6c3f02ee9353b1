//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every section defaults to the
//! pipeline's built-in parameters, so the binary also runs with no file
//! present. Date fields are quoted strings in `%Y-%m-%dT%H:%M:%S` format.
//!
//! # Example
//!
//! ```no_run
//! use fraudlens::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::Country;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Synthetic data generation parameters.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Fraud rule thresholds.
    #[serde(default)]
    pub rules: RuleConfig,

    /// Report and chart output settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameters for the synthetic transaction generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub records: usize,
    /// RNG seed; the same seed yields an identical table.
    pub seed: u64,
    /// Inclusive lower bound of the customer identifier range.
    pub customer_id_min: u32,
    /// Exclusive upper bound of the customer identifier range.
    pub customer_id_max: u32,
    /// Inclusive lower bound of the transaction amount range.
    pub amount_min: f64,
    /// Exclusive upper bound of the transaction amount range.
    pub amount_max: f64,
    /// Bernoulli prior for the ground-truth fraud label.
    pub fraud_rate: f64,
    /// Timestamp of the first record.
    pub start: NaiveDateTime,
    /// Fixed step between consecutive record timestamps.
    pub interval_hours: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 1000,
            seed: 42,
            customer_id_min: 1000,
            customer_id_max: 2000,
            amount_min: 10.0,
            amount_max: 10_000.0,
            fraud_rate: 0.05,
            start: NaiveDate::from_ymd_opt(2023, 1, 1)
                .expect("valid default start date")
                .and_hms_opt(0, 0, 0)
                .expect("valid default start time"),
            interval_hours: 1,
        }
    }
}

/// Thresholds for the three fraud rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Amounts strictly above this value fire the high-value rule.
    pub high_value_threshold: f64,
    /// Countries on this blocklist fire the suspicious-country rule.
    pub suspicious_countries: Vec<Country>,
    /// Customers with strictly more records than this fire the frequency rule.
    pub frequent_customer_threshold: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: 5000.0,
            suspicious_countries: vec![Country::Germany, Country::Spain],
            frequent_customer_threshold: 5,
        }
    }
}

/// Output locations for the KPI report and trend chart.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the country KPI CSV report.
    pub csv_path: PathBuf,
    /// Path of the monthly trend chart image.
    pub chart_path: PathBuf,
    /// Skip chart rendering when false (headless environments).
    pub render_chart: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("RSA_KPI_Report.csv"),
            chart_path: PathBuf::from("Fraud_Trends.png"),
            render_chart: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to built-in defaults when the file
    /// does not exist. Any other read or parse failure is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.generator;
        if g.records == 0 {
            return Err(ConfigError::InvalidValue {
                field: "records",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&g.fraud_rate) {
            return Err(ConfigError::InvalidValue {
                field: "fraud_rate",
                reason: format!("{} is outside [0, 1]", g.fraud_rate),
            }
            .into());
        }
        if g.amount_min <= 0.0 || g.amount_min >= g.amount_max {
            return Err(ConfigError::InvalidValue {
                field: "amount_min",
                reason: format!(
                    "range [{}, {}) must be positive and non-empty",
                    g.amount_min, g.amount_max
                ),
            }
            .into());
        }
        if g.customer_id_min >= g.customer_id_max {
            return Err(ConfigError::InvalidValue {
                field: "customer_id_min",
                reason: format!("range [{}, {}) is empty", g.customer_id_min, g.customer_id_max),
            }
            .into());
        }
        if g.interval_hours < 1 {
            return Err(ConfigError::InvalidValue {
                field: "interval_hours",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.rules.high_value_threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "high_value_threshold",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.rules.frequent_customer_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frequent_customer_threshold",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.report.csv_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "csv_path" }.into());
        }
        if self.report.render_chart && self.report.chart_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "chart_path" }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pipeline_constants() {
        let config = Config::default();
        assert_eq!(config.generator.records, 1000);
        assert_eq!(config.generator.seed, 42);
        assert_eq!(config.rules.high_value_threshold, 5000.0);
        assert_eq!(
            config.rules.suspicious_countries,
            vec![Country::Germany, Country::Spain]
        );
        assert_eq!(config.rules.frequent_customer_threshold, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config = Config::parse_toml("").expect("empty config");
        assert_eq!(config.generator.records, 1000);
        assert_eq!(config.report.csv_path, PathBuf::from("RSA_KPI_Report.csv"));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::parse_toml(
            r#"
[generator]
records = 50
seed = 7

[rules]
suspicious_countries = ["UK"]
"#,
        )
        .expect("partial config");
        assert_eq!(config.generator.records, 50);
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.generator.fraud_rate, 0.05);
        assert_eq!(config.rules.suspicious_countries, vec![Country::Uk]);
        assert_eq!(config.rules.high_value_threshold, 5000.0);
    }

    #[test]
    fn rejects_out_of_range_fraud_rate() {
        let result = Config::parse_toml("[generator]\nfraud_rate = 1.5\n");
        match result {
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "fraud_rate",
                ..
            })) => {}
            other => panic!("expected fraud_rate rejection, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_customer_range() {
        let result = Config::parse_toml(
            "[generator]\ncustomer_id_min = 2000\ncustomer_id_max = 1000\n",
        );
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "customer_id_min",
                ..
            }))
        ));
    }
}
