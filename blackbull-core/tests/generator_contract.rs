//! End-to-end checks across the generator, config loading, analysis and export.

use blackbull_core::analysis::{risk_heatmap, sentiment_breakdown, PredictionSummary};
use blackbull_core::domain::StockSeries;
use blackbull_core::export::{write_history_csv, write_predictions_csv, write_series_json};
use blackbull_core::{generate_watchlist, GeneratorConfig, SeedHierarchy, SeriesGenerator};
use chrono::NaiveDate;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()
}

#[test]
fn json_export_parses_back_into_the_same_series() {
    let series = SeriesGenerator::default().generate("GOOGL", as_of(), &mut StdRng::seed_from_u64(77));

    let mut buf = Vec::new();
    write_series_json(&mut buf, &series).unwrap();
    let parsed: StockSeries = serde_json::from_slice(&buf).unwrap();

    assert_eq!(parsed.symbol, "GOOGL");
    assert_eq!(parsed.historical, series.historical);
    assert_eq!(parsed.predictions.len(), 90);
}

#[test]
fn csv_exports_have_one_row_per_point() {
    let series = SeriesGenerator::default().generate("AMZN", as_of(), &mut StdRng::seed_from_u64(5));

    let mut history = Vec::new();
    write_history_csv(&mut history, &series.historical).unwrap();
    assert_eq!(String::from_utf8(history).unwrap().lines().count(), 367);

    let mut predictions = Vec::new();
    write_predictions_csv(&mut predictions, &series.predictions).unwrap();
    let text = String::from_utf8(predictions).unwrap();
    assert_eq!(text.lines().count(), 91);
    assert!(text.lines().nth(1).unwrap().starts_with("2024-11-16,"));
}

#[test]
fn config_file_drives_generation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[generator]
history_days = 29
prediction_days = 14
base_price_range = [10.0, 10.0]
"#
    )
    .unwrap();

    let cfg = GeneratorConfig::from_file(file.path()).unwrap();
    let series = SeriesGenerator::new(cfg).generate("META", as_of(), &mut StepRng::new(1 << 63, 0));

    assert_eq!(series.historical.len(), 30);
    assert_eq!(series.predictions.len(), 14);
    assert!(series.historical.iter().all(|p| p.price == 10.0));
}

#[test]
fn watchlist_is_stable_across_calls() {
    let seeds = SeedHierarchy::new(2024);
    let generator = SeriesGenerator::default();
    let symbols: Vec<String> = blackbull_core::catalog::all()
        .iter()
        .map(|l| l.symbol.to_string())
        .collect();

    let first = generate_watchlist(&symbols, as_of(), &seeds, &generator);
    let second = generate_watchlist(&symbols, as_of(), &seeds, &generator);
    assert_eq!(first, second);
    assert_ne!(first[0].historical, first[1].historical);
}

#[test]
fn summary_and_heatmap_cover_the_horizon() {
    let series = SeriesGenerator::default().generate("NFLX", as_of(), &mut StdRng::seed_from_u64(31));

    let summary = PredictionSummary::from_series(&series).unwrap();
    assert_eq!(summary.current_price, series.historical[365].price);
    assert_eq!(summary.target_price, series.predictions[89].price);

    let breakdown = sentiment_breakdown(&series.predictions);
    assert_eq!(breakdown.bullish + breakdown.neutral + breakdown.risky, 90);

    // 2024-11-16 .. 2025-02-13 spans Nov, Dec, Jan, Feb
    let months: Vec<_> = risk_heatmap(&series.predictions)
        .into_iter()
        .map(|b| b.month)
        .collect();
    assert_eq!(months, vec!["Nov", "Dec", "Jan", "Feb"]);
}
