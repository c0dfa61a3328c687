//! Synthetic series generator.
//!
//! Produces a random-walk price history ending on the as-of day, followed by
//! a projected walk with a confidence-weighted band and a per-day sentiment
//! label. The walk is pure given its random source: the same seeded RNG and
//! as-of date always yield the same series.
//!
//! Draw order per call (one uniform draw each unless noted):
//! 1. base price
//! 2. per history day: perturbation, volume
//! 3. per prediction day: trend, confidence
//! 4. RSI, MACD, 30-day accuracy, 90-day accuracy

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::domain::{
    AccuracySnapshot, BollingerBands, HistoricalPoint, PredictionPoint, Sentiment, StockSeries,
    TechnicalSnapshot,
};
use crate::rng::{round_to, uniform, uniform_int, unit, SeedHierarchy};

/// Band half-width multiplier; at the default confidence range the band spans
/// roughly 1.5% to 4% of price on each side.
const SPREAD_SCALE: f64 = 0.01 * 10.0;
/// Confidence at which the band would collapse to zero width.
const SPREAD_CEILING: f64 = 1.1;

const RSI_RANGE: (f64, f64) = (30.0, 70.0);
const MACD_RANGE: (f64, f64) = (-0.5, 0.5);
const ACCURACY_30D_RANGE: (f64, f64) = (85.0, 98.0);
const ACCURACY_90D_RANGE: (f64, f64) = (80.0, 95.0);
const BOLLINGER_WIDTH: f64 = 0.05;

/// Classify a projected move against the default 0.5% threshold.
///
/// Bullish if the move exceeds `+0.5%` of `last`, risky below `-0.5%`, neutral otherwise.
pub fn classify_sentiment(last: f64, new: f64) -> Sentiment {
    classify_with_threshold(last, new, GeneratorConfig::default().sentiment_threshold)
}

fn classify_with_threshold(last: f64, new: f64, threshold: f64) -> Sentiment {
    let diff = new - last;
    if diff > last * threshold {
        Sentiment::Bullish
    } else if diff < -last * threshold {
        Sentiment::Risky
    } else {
        Sentiment::Neutral
    }
}

/// Half-width of the prediction band for a price at a given confidence.
pub fn prediction_spread(price: f64, confidence: f64) -> f64 {
    price * SPREAD_SCALE * (SPREAD_CEILING - confidence)
}

/// Builds [`StockSeries`] values from an injected random source.
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
}

impl SeriesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a full series for `symbol` as of `as_of`.
    ///
    /// The symbol is a label only; it does not influence the statistics.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        symbol: &str,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> StockSeries {
        let cfg = &self.config;

        let base = round_to(uniform(rng, cfg.base_price_range.min, cfg.base_price_range.max), 2);
        let (historical, final_price, clamped) = self.walk_history(base, as_of, rng);
        if clamped > 0 {
            warn!(symbol, clamped, floor = cfg.price_floor, "history walk hit the price floor");
        }

        let predictions = self.project(final_price, as_of, rng);

        let technical_indicators = TechnicalSnapshot {
            rsi: round_to(uniform(rng, RSI_RANGE.0, RSI_RANGE.1), 1),
            macd: round_to(uniform(rng, MACD_RANGE.0, MACD_RANGE.1), 2),
            bollinger_bands: BollingerBands {
                upper: final_price * (1.0 + BOLLINGER_WIDTH),
                middle: final_price,
                lower: final_price * (1.0 - BOLLINGER_WIDTH),
            },
        };

        let model_accuracy = AccuracySnapshot {
            past_30_days: round_to(uniform(rng, ACCURACY_30D_RANGE.0, ACCURACY_30D_RANGE.1), 1),
            past_90_days: round_to(uniform(rng, ACCURACY_90D_RANGE.0, ACCURACY_90D_RANGE.1), 1),
        };

        debug!(
            symbol,
            %as_of,
            base,
            final_price,
            history = historical.len(),
            predictions = predictions.len(),
            "generated series"
        );

        StockSeries {
            symbol: symbol.to_string(),
            historical,
            predictions,
            technical_indicators,
            model_accuracy,
        }
    }

    /// Random walk from `base`, oldest day first, ending on `as_of`.
    ///
    /// Returns the points, the unrounded final price, and how many steps were clamped.
    fn walk_history<R: Rng + ?Sized>(
        &self,
        base: f64,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> (Vec<HistoricalPoint>, f64, usize) {
        let cfg = &self.config;
        let days = i64::from(cfg.history_days);
        let (vol_lo, vol_hi) = (cfg.volume_range.min as u64, cfg.volume_range.max as u64);

        let mut price = base;
        let mut clamped = 0;
        let mut points = Vec::with_capacity(cfg.history_days as usize + 1);

        for back in (0..=days).rev() {
            let delta = (unit(rng) - 0.5) * cfg.history_volatility * price;
            price += delta;
            if price < cfg.price_floor {
                price = cfg.price_floor;
                clamped += 1;
            }
            points.push(HistoricalPoint {
                date: as_of - Duration::days(back),
                price: round_to(price, 2),
                volume: uniform_int(rng, vol_lo, vol_hi),
            });
        }

        (points, price, clamped)
    }

    /// Forward projection starting from `last`, one point per day after `as_of`.
    fn project<R: Rng + ?Sized>(
        &self,
        start: f64,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Vec<PredictionPoint> {
        let cfg = &self.config;
        let mut last = start;
        let mut points = Vec::with_capacity(cfg.prediction_days as usize);

        for ahead in 1..=i64::from(cfg.prediction_days) {
            let trend = unit(rng) - cfg.trend_bias;
            let new = (last + trend * cfg.prediction_volatility * last).max(cfg.price_floor);

            let confidence = round_to(
                uniform(rng, cfg.confidence_range.min, cfg.confidence_range.max),
                2,
            )
            .clamp(cfg.confidence_range.min, cfg.confidence_range.max);
            let spread = prediction_spread(new, confidence);

            points.push(PredictionPoint {
                date: as_of + Duration::days(ahead),
                price: round_to(new, 2),
                price_low: round_to(new - spread, 2),
                price_high: round_to(new + spread, 2),
                confidence,
                sentiment: classify_with_threshold(last, new, cfg.sentiment_threshold),
            });
            last = new;
        }

        points
    }
}

/// Generate a series with default settings, as of today's local date.
pub fn generate_stock_series<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> StockSeries {
    let today = chrono::Local::now().date_naive();
    SeriesGenerator::default().generate(symbol, today, rng)
}

/// Generate one series per symbol in parallel.
///
/// Each symbol draws from its own `seeds.rng_for(symbol, 0)` stream, so the
/// output is identical for any thread count. Order follows `symbols`.
pub fn generate_watchlist(
    symbols: &[String],
    as_of: NaiveDate,
    seeds: &SeedHierarchy,
    generator: &SeriesGenerator,
) -> Vec<StockSeries> {
    let series: Vec<StockSeries> = symbols
        .par_iter()
        .map(|symbol| {
            let mut rng = seeds.rng_for(symbol, 0);
            generator.generate(symbol, as_of, &mut rng)
        })
        .collect();
    debug!(count = series.len(), master_seed = seeds.master_seed(), "generated watchlist");
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    fn midpoint_rng() -> StepRng {
        StepRng::new(1 << 63, 0)
    }

    #[test]
    fn sentiment_threshold_examples() {
        assert_eq!(classify_sentiment(100.0, 100.6), Sentiment::Bullish);
        assert_eq!(classify_sentiment(100.0, 99.3), Sentiment::Risky);
        assert_eq!(classify_sentiment(100.0, 100.2), Sentiment::Neutral);
    }

    #[test]
    fn sentiment_exactly_at_threshold_is_neutral() {
        assert_eq!(classify_sentiment(200.0, 201.0), Sentiment::Neutral);
        assert_eq!(classify_sentiment(200.0, 199.0), Sentiment::Neutral);
    }

    #[test]
    fn spread_widens_as_confidence_falls() {
        let tight = prediction_spread(100.0, 0.95);
        let wide = prediction_spread(100.0, 0.70);
        assert!((tight - 1.5).abs() < 1e-9);
        assert!((wide - 4.0).abs() < 1e-9);
        assert!(wide > tight);
    }

    #[test]
    fn lengths_and_dates() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = SeriesGenerator::default().generate("AAPL", as_of(), &mut rng);

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.historical.len(), 366);
        assert_eq!(series.predictions.len(), 90);
        assert_eq!(series.historical[0].date, as_of() - Duration::days(365));
        assert_eq!(series.historical.last().unwrap().date, as_of());
        assert_eq!(series.predictions[0].date, as_of() + Duration::days(1));
        assert_eq!(series.predictions[89].date, as_of() + Duration::days(90));
    }

    #[test]
    fn midpoint_source_holds_history_flat() {
        let series = SeriesGenerator::default().generate("MSFT", as_of(), &mut midpoint_rng());

        for point in &series.historical {
            assert_eq!(point.price, 250.0);
            assert_eq!(point.volume, 25_500_000);
        }
        let bands = series.technical_indicators.bollinger_bands;
        assert_eq!(bands.middle, 250.0);
        assert!((bands.upper - 262.5).abs() < 1e-9);
        assert!((bands.lower - 237.5).abs() < 1e-9);
        assert_eq!(series.technical_indicators.rsi, 50.0);
        assert_eq!(series.technical_indicators.macd, 0.0);
        assert_eq!(series.model_accuracy.past_30_days, 91.5);
        assert_eq!(series.model_accuracy.past_90_days, 87.5);
    }

    #[test]
    fn midpoint_source_projects_steady_drift() {
        let series = SeriesGenerator::default().generate("MSFT", as_of(), &mut midpoint_rng());

        // trend = 0.5 - 0.45 = 0.05, so each day grows by 0.05 * 0.015 = 0.075%
        let mut expected = 250.0_f64;
        for point in &series.predictions {
            expected *= 1.00075;
            assert!((point.price - expected).abs() <= 0.006, "{} vs {expected}", point.price);
            assert_eq!(point.sentiment, Sentiment::Neutral);
            assert!(point.price_low < point.price && point.price < point.price_high);
        }
    }

    #[test]
    fn midpoint_source_is_reproducible() {
        let generator = SeriesGenerator::default();
        let a = generator.generate("NVDA", as_of(), &mut midpoint_rng());
        let b = generator.generate("NVDA", as_of(), &mut midpoint_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let generator = SeriesGenerator::default();
        let a = generator.generate("NVDA", as_of(), &mut StdRng::seed_from_u64(9));
        let b = generator.generate("NVDA", as_of(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_calls_differ() {
        let generator = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(5);
        let a = generator.generate("AMD", as_of(), &mut rng);
        let b = generator.generate("AMD", as_of(), &mut rng);
        assert_ne!(a.historical, b.historical);
        assert_ne!(a.predictions, b.predictions);
    }

    #[test]
    fn floor_clamps_a_collapsing_walk() {
        let cfg = GeneratorConfig {
            history_volatility: 4.0,
            price_floor: 1.0,
            ..Default::default()
        };
        // Constant draw of 0 gives delta = -0.5 * 4.0 * price = -2 * price every day.
        let mut rng = StepRng::new(0, 0);
        let series = SeriesGenerator::new(cfg).generate("PYPL", as_of(), &mut rng);
        assert!(series.historical.iter().all(|p| p.price >= 1.0));
        assert_eq!(series.historical.last().unwrap().price, 1.0);
        assert!(series.predictions.iter().all(|p| p.price >= 1.0));
    }

    #[test]
    fn zero_base_at_minimum_floor_keeps_prices_positive() {
        let cfg = GeneratorConfig {
            base_price_range: crate::config::Range::new(0.0, 0.0),
            price_floor: crate::config::MIN_PRICE_FLOOR,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());

        let series = SeriesGenerator::new(cfg).generate("SQ", as_of(), &mut midpoint_rng());
        assert!(series.historical.iter().all(|p| p.price > 0.0));
        let bands = series.technical_indicators.bollinger_bands;
        assert!(bands.lower < bands.middle && bands.middle < bands.upper, "{bands:?}");
    }

    #[test]
    fn longest_valid_horizon_generates() {
        let cfg = GeneratorConfig {
            history_days: crate::config::MAX_DAYS,
            prediction_days: crate::config::MAX_DAYS,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());

        let mut rng = StdRng::seed_from_u64(9);
        let series = SeriesGenerator::new(cfg).generate("IBM", as_of(), &mut rng);
        assert_eq!(series.historical.len(), crate::config::MAX_DAYS as usize + 1);
        assert_eq!(series.predictions.len(), crate::config::MAX_DAYS as usize);
    }

    #[test]
    fn custom_horizons() {
        let cfg = GeneratorConfig {
            history_days: 10,
            prediction_days: 5,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let series = SeriesGenerator::new(cfg).generate("TSLA", as_of(), &mut rng);
        assert_eq!(series.historical.len(), 11);
        assert_eq!(series.predictions.len(), 5);
    }

    #[test]
    fn watchlist_preserves_order_and_matches_single_generation() {
        let seeds = SeedHierarchy::new(42);
        let generator = SeriesGenerator::default();
        let symbols: Vec<String> = ["AAPL", "MSFT", "NFLX"].iter().map(|s| s.to_string()).collect();

        let batch = generate_watchlist(&symbols, as_of(), &seeds, &generator);
        assert_eq!(batch.len(), 3);
        for (series, symbol) in batch.iter().zip(&symbols) {
            assert_eq!(&series.symbol, symbol);
            let single = generator.generate(symbol, as_of(), &mut seeds.rng_for(symbol, 0));
            assert_eq!(series, &single);
        }
    }

    #[test]
    fn convenience_entry_point_ends_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_stock_series("GOOGL", &mut rng);
        let today = chrono::Local::now().date_naive();
        // Tolerate a midnight rollover between generation and the check.
        let last = series.as_of().unwrap();
        assert!(last == today || last + Duration::days(1) == today);
    }
}
