//! Price series: historical walk, prediction band, indicator and accuracy snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of simulated history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}

/// Categorical label for a predicted day-over-day move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Neutral,
    Risky,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::Risky => "risky",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the forward projection.
///
/// `price_low <= price <= price_high` always holds; the band is wider for
/// lower `confidence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub price_low: f64,
    pub price_high: f64,
    pub confidence: f64,
    pub sentiment: Sentiment,
}

impl PredictionPoint {
    /// Width of the uncertainty band.
    pub fn band_width(&self) -> f64 {
        self.price_high - self.price_low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Indicator values shown next to the chart. RSI and MACD are sampled, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSnapshot {
    pub rsi: f64,
    pub macd: f64,
    pub bollinger_bands: BollingerBands,
}

/// Advertised model accuracy, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySnapshot {
    #[serde(rename = "past30days")]
    pub past_30_days: f64,
    #[serde(rename = "past90days")]
    pub past_90_days: f64,
}

/// Everything the prediction views need for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSeries {
    pub symbol: String,
    pub historical: Vec<HistoricalPoint>,
    pub predictions: Vec<PredictionPoint>,
    pub technical_indicators: TechnicalSnapshot,
    pub model_accuracy: AccuracySnapshot,
}

impl StockSeries {
    /// Most recent historical price, if any.
    pub fn last_price(&self) -> Option<f64> {
        self.historical.last().map(|p| p.price)
    }

    /// Last historical date, i.e. the as-of day the series was generated for.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.historical.last().map(|p| p.date)
    }
}
