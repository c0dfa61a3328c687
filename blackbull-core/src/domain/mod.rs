//! Domain types for BlackBull

pub mod series;

pub use series::{
    AccuracySnapshot, BollingerBands, HistoricalPoint, PredictionPoint, Sentiment, StockSeries,
    TechnicalSnapshot,
};

/// Symbol type alias
pub type Symbol = String;
