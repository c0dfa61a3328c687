//! Mock portfolio holdings and aggregate views.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog;
use crate::market::StockQuote;
use crate::rng::{pick, round_to, uniform, uniform_int};

#[derive(Debug, Error, PartialEq)]
pub enum PortfolioError {
    #[error("share count must be positive (got {0})")]
    InvalidShares(u64),

    #[error("'{0}' is already held")]
    AlreadyHeld(String),

    #[error("'{0}' is not held")]
    NotHeld(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *pick(rng, &Self::ALL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub shares: u64,
    pub avg_price: f64,
    pub current_price: f64,
    pub total_value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub risk_level: RiskLevel,
}

impl Holding {
    fn new(
        symbol: &str,
        name: &str,
        shares: u64,
        avg_price: f64,
        current_price: f64,
        risk_level: RiskLevel,
    ) -> Self {
        let total_value = shares as f64 * current_price;
        let change = (current_price - avg_price) * shares as f64;
        let change_percent = if avg_price > 0.0 {
            (current_price - avg_price) / avg_price * 100.0
        } else {
            0.0
        };
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            shares,
            avg_price,
            current_price,
            total_value: round_to(total_value, 2),
            change: round_to(change, 2),
            change_percent: round_to(change_percent, 2),
            risk_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_change: f64,
    pub total_change_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(id: Uuid, holdings: Vec<Holding>) -> Self {
        Self { id, holdings }
    }

    /// Totals across holdings. The change percent is measured against cost basis
    /// (`value - change`) and is zero for an empty or worthless portfolio.
    pub fn summary(&self) -> PortfolioSummary {
        let total_value: f64 = self.holdings.iter().map(|h| h.total_value).sum();
        let total_change: f64 = self.holdings.iter().map(|h| h.change).sum();
        let basis = total_value - total_change;
        let total_change_percent = if total_value > 0.0 && basis != 0.0 {
            total_change / basis * 100.0
        } else {
            0.0
        };
        PortfolioSummary {
            total_value,
            total_change,
            total_change_percent,
        }
    }

    pub fn risk_distribution(&self) -> RiskDistribution {
        self.holdings
            .iter()
            .fold(RiskDistribution::default(), |mut acc, h| {
                match h.risk_level {
                    RiskLevel::Low => acc.low += 1,
                    RiskLevel::Medium => acc.medium += 1,
                    RiskLevel::High => acc.high += 1,
                }
                acc
            })
    }

    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Buy into a listed quote at its current price.
    pub fn add_holding(
        &mut self,
        quote: &StockQuote,
        shares: u64,
        risk_level: RiskLevel,
    ) -> Result<(), PortfolioError> {
        if shares == 0 {
            return Err(PortfolioError::InvalidShares(shares));
        }
        if self.holding(&quote.symbol).is_some() {
            return Err(PortfolioError::AlreadyHeld(quote.symbol.clone()));
        }
        self.holdings.push(Holding::new(
            &quote.symbol,
            &quote.name,
            shares,
            quote.price,
            quote.price,
            risk_level,
        ));
        Ok(())
    }

    pub fn remove_holding(&mut self, symbol: &str) -> Result<Holding, PortfolioError> {
        let idx = self
            .holdings
            .iter()
            .position(|h| h.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| PortfolioError::NotHeld(symbol.to_string()))?;
        Ok(self.holdings.remove(idx))
    }
}

/// Holdings in the first five catalog listings.
pub fn generate_holdings<R: Rng + ?Sized>(rng: &mut R) -> Vec<Holding> {
    catalog::all()
        .iter()
        .take(5)
        .map(|listing| {
            let shares = uniform_int(rng, 10, 500);
            let avg_price = round_to(uniform(rng, 80.0, 300.0), 2);
            let current_price = round_to(uniform(rng, avg_price * 0.8, avg_price * 1.3), 2);
            Holding::new(
                listing.symbol,
                listing.name,
                shares,
                avg_price,
                current_price,
                RiskLevel::random(rng),
            )
        })
        .collect()
}

/// A portfolio with a random id and [`generate_holdings`].
pub fn generate_portfolio<R: Rng + ?Sized>(rng: &mut R) -> Portfolio {
    let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    Portfolio::new(id, generate_holdings(rng))
}
