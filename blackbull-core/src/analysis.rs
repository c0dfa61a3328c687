//! Read-only views derived from a generated series.

use serde::Serialize;

use crate::domain::{PredictionPoint, Sentiment, StockSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outlook {
    Positive,
    Negative,
}

/// Headline numbers for the prediction panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub current_price: f64,
    pub target_price: f64,
    pub predicted_change_percent: f64,
    pub outlook: Outlook,
}

impl PredictionSummary {
    /// `None` when either sequence is empty or the current price is zero.
    pub fn from_series(series: &StockSeries) -> Option<Self> {
        let current_price = series.last_price()?;
        let target_price = series.predictions.last()?.price;
        if current_price == 0.0 {
            return None;
        }
        let breakdown = sentiment_breakdown(&series.predictions);
        let outlook = if breakdown.bullish > breakdown.risky {
            Outlook::Positive
        } else {
            Outlook::Negative
        };
        Some(Self {
            current_price,
            target_price,
            predicted_change_percent: (target_price - current_price) / current_price * 100.0,
            outlook,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > 70.0 {
            RsiZone::Overbought
        } else if rsi < 30.0 {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdSignal {
    Bullish,
    Bearish,
}

impl MacdSignal {
    pub fn from_macd(macd: f64) -> Self {
        if macd > 0.0 {
            MacdSignal::Bullish
        } else {
            MacdSignal::Bearish
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub bullish: usize,
    pub neutral: usize,
    pub risky: usize,
}

impl SentimentBreakdown {
    pub fn from_predictions(predictions: &[PredictionPoint]) -> Self {
        predictions.iter().fold(Self::default(), |mut acc, p| {
            match p.sentiment {
                Sentiment::Bullish => acc.bullish += 1,
                Sentiment::Neutral => acc.neutral += 1,
                Sentiment::Risky => acc.risky += 1,
            }
            acc
        })
    }
}

/// Count predictions per sentiment.
pub fn sentiment_breakdown(predictions: &[PredictionPoint]) -> SentimentBreakdown {
    SentimentBreakdown::from_predictions(predictions)
}

/// Predictions of one calendar month, labelled `Jan`, `Feb`, ...
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket<'a> {
    pub month: String,
    pub days: Vec<&'a PredictionPoint>,
}

/// Group predictions by month in first-seen order.
///
/// Buckets are keyed by year and month, so a horizon longer than a year does
/// not fold two Januaries together.
pub fn risk_heatmap(predictions: &[PredictionPoint]) -> Vec<MonthBucket<'_>> {
    use chrono::Datelike;

    let mut buckets: Vec<((i32, u32), MonthBucket<'_>)> = Vec::new();
    for p in predictions {
        let key = (p.date.year(), p.date.month());
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.days.push(p),
            None => buckets.push((
                key,
                MonthBucket {
                    month: p.date.format("%b").to_string(),
                    days: vec![p],
                },
            )),
        }
    }
    buckets.into_iter().map(|(_, b)| b).collect()
}
