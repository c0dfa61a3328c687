//! Analyst report: three top picks and three high-risk names.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Listing};
use crate::domain::Symbol;
use crate::rng::{round_to, uniform};
use crate::text;

const PICKS_PER_SIDE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPick {
    pub symbol: Symbol,
    pub name: String,
    pub reason: String,
    pub predicted_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPick {
    pub symbol: Symbol,
    pub name: String,
    pub reason: String,
    pub predicted_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystReport {
    pub best_investments: Vec<InvestmentPick>,
    pub high_risk: Vec<RiskPick>,
}

/// Shuffle the catalog; the first three become picks, the next three risks.
pub fn generate_report<R: Rng + ?Sized>(rng: &mut R) -> AnalystReport {
    let mut listings: Vec<&Listing> = catalog::all().iter().collect();
    listings.shuffle(rng);

    let best_investments = listings[..PICKS_PER_SIDE]
        .iter()
        .map(|l| InvestmentPick {
            symbol: l.symbol.to_string(),
            name: l.name.to_string(),
            reason: text::sentence(rng, 10, 15),
            predicted_gain: round_to(uniform(rng, 5.0, 25.0), 1),
        })
        .collect();

    let high_risk = listings[PICKS_PER_SIDE..PICKS_PER_SIDE * 2]
        .iter()
        .map(|l| RiskPick {
            symbol: l.symbol.to_string(),
            name: l.name.to_string(),
            reason: text::sentence(rng, 10, 15),
            predicted_loss: round_to(uniform(rng, 5.0, 20.0), 1),
        })
        .collect();

    AnalystReport {
        best_investments,
        high_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn six_distinct_symbols() {
        let report = generate_report(&mut StdRng::seed_from_u64(17));
        assert_eq!(report.best_investments.len(), 3);
        assert_eq!(report.high_risk.len(), 3);

        let symbols: HashSet<_> = report
            .best_investments
            .iter()
            .map(|p| p.symbol.as_str())
            .chain(report.high_risk.iter().map(|p| p.symbol.as_str()))
            .collect();
        assert_eq!(symbols.len(), 6);
    }

    #[test]
    fn gains_and_losses_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let report = generate_report(&mut rng);
            assert!(report
                .best_investments
                .iter()
                .all(|p| (5.0..=25.0).contains(&p.predicted_gain)));
            assert!(report
                .high_risk
                .iter()
                .all(|p| (5.0..=20.0).contains(&p.predicted_loss)));
        }
    }
}
