//! Generator configuration.
//!
//! Defaults reproduce the dashboard's original constants. A TOML file may
//! override any subset of them under a `[generator]` table:
//!
//! ```toml
//! [generator]
//! history_days = 180
//! prediction_days = 30
//! price_floor = 0.05
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field}: range min {min} exceeds max {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    NotNonNegative { field: &'static str, value: f64 },

    #[error("{field} must be at least 1")]
    ZeroDays { field: &'static str },

    #[error("{field} must not exceed {max} days (got {value})")]
    TooManyDays { field: &'static str, value: u32, max: u32 },

    #[error("price_floor must be at least {min} (got {value})")]
    FloorTooLow { value: f64, min: f64 },

    #[error("confidence range [{min}, {max}] must lie strictly between 0 and 1.1")]
    ConfidenceOutOfBounds { min: f64, max: f64 },
}

/// Longest history or projection horizon, about a century.
pub const MAX_DAYS: u32 = 36_500;

/// Smallest price floor; one cent survives rounding to two decimals.
pub const MIN_PRICE_FLOOR: f64 = 0.01;

/// Closed numeric range `[min, max]`, written as a two-element array in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for Range {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Range> for [f64; 2] {
    fn from(r: Range) -> Self {
        [r.min, r.max]
    }
}

/// Parameters of the synthetic series generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Days of history before the as-of day (the series holds `history_days + 1` points).
    pub history_days: u32,
    /// Days of forward projection.
    pub prediction_days: u32,
    /// Range the starting price is drawn from.
    pub base_price_range: Range,
    /// Per-day perturbation scale of the historical walk.
    pub history_volatility: f64,
    /// Per-day perturbation scale of the projection.
    pub prediction_volatility: f64,
    /// Subtracted from each unit draw of the projection trend; below 0.5 biases upward.
    pub trend_bias: f64,
    pub confidence_range: Range,
    /// Fraction of the previous price a move must exceed to be bullish or risky.
    pub sentiment_threshold: f64,
    pub volume_range: Range,
    /// Lowest price the walk may reach, at least [`MIN_PRICE_FLOOR`].
    pub price_floor: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_days: 365,
            prediction_days: 90,
            base_price_range: Range::new(100.0, 400.0),
            history_volatility: 0.02,
            prediction_volatility: 0.015,
            trend_bias: 0.45,
            confidence_range: Range::new(0.70, 0.95),
            sentiment_threshold: 0.005,
            volume_range: Range::new(1_000_000.0, 50_000_000.0),
            price_floor: 0.01,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        file.generator.validate()?;
        Ok(file.generator)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("history_days", self.history_days),
            ("prediction_days", self.prediction_days),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDays { field });
            }
            if value > MAX_DAYS {
                return Err(ConfigError::TooManyDays { field, value, max: MAX_DAYS });
            }
        }

        for (field, value) in [
            ("history_volatility", self.history_volatility),
            ("prediction_volatility", self.prediction_volatility),
            ("sentiment_threshold", self.sentiment_threshold),
            ("price_floor", self.price_floor),
            ("trend_bias", self.trend_bias),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NotNonNegative { field, value });
            }
        }

        for (field, range) in [
            ("base_price_range", self.base_price_range),
            ("confidence_range", self.confidence_range),
            ("volume_range", self.volume_range),
        ] {
            if !range.min.is_finite() || range.min < 0.0 {
                return Err(ConfigError::NotNonNegative { field, value: range.min });
            }
            if !range.max.is_finite() || range.min > range.max {
                return Err(ConfigError::InvertedRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if self.price_floor < MIN_PRICE_FLOOR {
            return Err(ConfigError::FloorTooLow {
                value: self.price_floor,
                min: MIN_PRICE_FLOOR,
            });
        }

        let c = self.confidence_range;
        if c.min <= 0.0 || c.max >= 1.1 {
            return Err(ConfigError::ConfidenceOutOfBounds { min: c.min, max: c.max });
        }

        Ok(())
    }
}
