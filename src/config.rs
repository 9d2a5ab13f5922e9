//! Pricing Config
//!
//! Volume discount parameters loaded from YAML:
//!
//! ```yaml
//! volume_discount:
//!   threshold: 3
//!   percent: "10%"
//! ```

use std::{fs, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::discounts::{DEFAULT_VOLUME_THRESHOLD, VolumeDiscount};

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),
}

/// Pricing configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Volume discount settings
    #[serde(default)]
    pub volume_discount: VolumeDiscountConfig,
}

/// Volume discount settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeDiscountConfig {
    /// Item count an order must exceed to qualify
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Discount as points (`"10%"`) or a fraction (`"0.1"`)
    #[serde(default = "default_percent")]
    pub percent: String,
}

impl Default for VolumeDiscountConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            percent: default_percent(),
        }
    }
}

fn default_threshold() -> usize {
    DEFAULT_VOLUME_THRESHOLD
}

fn default_percent() -> String {
    "10%".to_string()
}

impl PricingConfig {
    /// Parse a config from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a config from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Build the configured volume discount policy
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage cannot be parsed or lies outside 0% to 100%.
    pub fn volume_discount(&self) -> Result<VolumeDiscount, ConfigError> {
        let raw = &self.volume_discount.percent;
        let percent = parse_percentage(raw)?;
        let fraction = percent * Decimal::ONE;

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(ConfigError::InvalidPercentage(raw.clone()));
        }

        Ok(VolumeDiscount::new(self.volume_discount.threshold, percent))
    }
}

/// Parse a percentage string like `"10%"` or `"0.1"`
///
/// # Errors
///
/// Returns an error if the string is not a valid decimal.
pub fn parse_percentage(s: &str) -> Result<Percentage, ConfigError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let points = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| ConfigError::InvalidPercentage(s.to_string()))?;

        // 10 points -> 0.10
        let fraction = points
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(|| ConfigError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(fraction))
    } else {
        let fraction = trimmed
            .parse::<Decimal>()
            .map_err(|_err| ConfigError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(fraction))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_percentage_accepts_points() -> TestResult {
        let percent = parse_percentage("15%")?;

        assert_eq!(percent * Decimal::ONE, dec!(0.15));

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_fraction() -> TestResult {
        let percent = parse_percentage(" 0.25 ")?;

        assert_eq!(percent * Decimal::ONE, dec!(0.25));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_garbage() {
        let result = parse_percentage("ten percent");

        assert!(matches!(result, Err(ConfigError::InvalidPercentage(s)) if s == "ten percent"));
    }

    #[test]
    fn empty_document_uses_defaults() -> TestResult {
        let config = PricingConfig::from_yaml_str("{}")?;
        let discount = config.volume_discount()?;

        assert_eq!(discount.threshold(), 3);
        assert_eq!(discount.percent() * Decimal::ONE, dec!(0.1));

        Ok(())
    }

    #[test]
    fn overrides_threshold_and_percent() -> TestResult {
        let config = PricingConfig::from_yaml_str(
            "volume_discount:\n  threshold: 5\n  percent: \"20%\"\n",
        )?;

        let discount = config.volume_discount()?;

        assert_eq!(discount.threshold(), 5);
        assert_eq!(discount.percent() * Decimal::ONE, dec!(0.2));

        Ok(())
    }

    #[test]
    fn percent_over_one_hundred_is_rejected() -> TestResult {
        let config =
            PricingConfig::from_yaml_str("volume_discount:\n  percent: \"150%\"\n")?;

        let result = config.volume_discount();

        assert!(matches!(result, Err(ConfigError::InvalidPercentage(s)) if s == "150%"));

        Ok(())
    }

    #[test]
    fn negative_percent_is_rejected() -> TestResult {
        let config = PricingConfig::from_yaml_str(
            "volume_discount:\n  percent: \"-79228162514264337593543950335\"\n",
        )?;

        let result = config.volume_discount();

        assert!(matches!(result, Err(ConfigError::InvalidPercentage(_))));

        Ok(())
    }

    #[test]
    fn whole_and_zero_percent_are_accepted() -> TestResult {
        for percent in ["0%", "100%", "1"] {
            let yaml = format!("volume_discount:\n  percent: \"{percent}\"\n");

            PricingConfig::from_yaml_str(&yaml)?.volume_discount()?;
        }

        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = PricingConfig::from_yaml_str("tiers: []\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "volume_discount:\n  threshold: 1")?;

        let config = PricingConfig::from_path(file.path())?;

        assert_eq!(config.volume_discount.threshold, 1);
        assert_eq!(config.volume_discount.percent, "10%");

        Ok(())
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let result = PricingConfig::from_path("does/not/exist.yml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
