//! BlackBull Core: synthetic market data for the prediction dashboard.
//!
//! Nothing here touches a real market. Every value is drawn from an injected
//! random source:
//! - Price history as a random walk, plus a projected band with per-day sentiment
//! - Sampled indicator and accuracy snapshots
//! - Market quotes, portfolio holdings, news, alerts and analyst picks
//! - Derived views (prediction summary, RSI/MACD labels, monthly risk heatmap)
//! - JSON/CSV export and TOML-configurable generator parameters

pub mod alerts;
pub mod analysis;
pub mod analyst;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod export;
pub mod generator;
pub mod market;
pub mod news;
pub mod portfolio;
pub mod rng;
pub mod text;

pub use config::{ConfigError, GeneratorConfig};
pub use generator::{
    classify_sentiment, generate_stock_series, generate_watchlist, prediction_spread,
    SeriesGenerator,
};
pub use rng::SeedHierarchy;
