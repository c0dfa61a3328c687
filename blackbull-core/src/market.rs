//! Market overview quotes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::rng::{round_to, uniform, uniform_int};

/// Snapshot quote for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: u64,
}

impl StockQuote {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// One quote per catalog listing, in catalog order.
pub fn generate_quotes<R: Rng + ?Sized>(rng: &mut R) -> Vec<StockQuote> {
    catalog::all()
        .iter()
        .map(|listing| {
            let price = round_to(uniform(rng, 50.0, 500.0), 2);
            let change = round_to(uniform(rng, -20.0, 20.0), 2);
            StockQuote {
                symbol: listing.symbol.to_string(),
                name: listing.name.to_string(),
                price,
                change,
                change_percent: round_to(change / price * 100.0, 2),
                volume: uniform_int(rng, 1_000_000, 100_000_000),
                market_cap: uniform_int(rng, 10_000_000_000, 3_000_000_000_000),
            }
        })
        .collect()
}

/// Quotes whose symbol or name contains `query`, ignoring case. An empty query matches all.
pub fn search_quotes<'a>(quotes: &'a [StockQuote], query: &str) -> Vec<&'a StockQuote> {
    let needle = query.trim().to_lowercase();
    quotes
        .iter()
        .filter(|q| {
            needle.is_empty()
                || q.symbol.to_lowercase().contains(&needle)
                || q.name.to_lowercase().contains(&needle)
        })
        .collect()
}
