use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pricing::page::DEFAULT_SUBSCRIBER_TIER_OPTIONS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Months of monthly revenue one yearly payment is discounted to
    #[serde(default = "default_yearly_months_factor")]
    pub yearly_months_factor: f64,
    #[serde(default = "default_subscriber_tier_options")]
    pub subscriber_tier_options: Vec<u64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            yearly_months_factor: default_yearly_months_factor(),
            subscriber_tier_options: default_subscriber_tier_options(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("pricing.json")
}

fn default_yearly_months_factor() -> f64 {
    10.0
}

fn default_subscriber_tier_options() -> Vec<u64> {
    DEFAULT_SUBSCRIBER_TIER_OPTIONS.to_vec()
}

/// Load configuration from a file (optional) and `PRICING_PAGE__*` environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("PRICING_PAGE").separator("__"))
        .build()?;

    let mut cfg: Config = config.try_deserialize()?;
    resolve_catalog_path(&mut cfg, path);
    validate_config(&cfg)?;

    Ok(cfg)
}

/// A relative catalog path is relative to the config file's directory
fn resolve_catalog_path(cfg: &mut Config, config_path: &Path) {
    if cfg.pricing.catalog_path.is_relative() {
        if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            cfg.pricing.catalog_path = dir.join(&cfg.pricing.catalog_path);
        }
    }
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    match cfg.logging.format.as_str() {
        "pretty" | "json" => {}
        other => anyhow::bail!("Invalid log format: {} (expected 'pretty' or 'json')", other),
    }

    if cfg.pricing.catalog_path.as_os_str().is_empty() {
        anyhow::bail!("Pricing catalog path cannot be empty");
    }

    crate::pricing::transformer::validate_yearly_months_factor(cfg.pricing.yearly_months_factor)?;
    crate::pricing::transformer::validate_tier_options(&cfg.pricing.subscriber_tier_options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.pricing.yearly_months_factor, 10.0);
        assert_eq!(cfg.logging.format, "pretty");
    }

    #[test]
    fn test_validate_config_rejects_factor() {
        let mut cfg = Config::default();
        cfg.pricing.yearly_months_factor = 12.0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("yearly months factor"));
    }

    #[test]
    fn test_validate_config_rejects_log_format() {
        let mut cfg = Config::default();
        cfg.logging.format = "xml".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_config_rejects_unsorted_options() {
        let mut cfg = Config::default();
        cfg.pricing.subscriber_tier_options = vec![100, 50];

        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[logging]
format = "json"

[pricing]
catalog_path = "plans.toml"
yearly_months_factor = 9.5
subscriber_tier_options = [0, 100, 1000]
"#
        )
        .unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.pricing.catalog_path, dir.path().join("plans.toml"));
        assert_eq!(cfg.pricing.yearly_months_factor, 9.5);
        assert_eq!(cfg.pricing.subscriber_tier_options, vec![0, 100, 1000]);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.pricing.catalog_path, dir.path().join("pricing.json"));
        assert_eq!(
            cfg.pricing.subscriber_tier_options,
            DEFAULT_SUBSCRIBER_TIER_OPTIONS.to_vec()
        );
    }
}
