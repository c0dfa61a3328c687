//! Series export (JSON/CSV).

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

use crate::domain::{HistoricalPoint, PredictionPoint, StockSeries};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Pretty-printed JSON in the dashboard's wire shape, newline-terminated.
pub fn write_series_json<W: Write>(mut writer: W, series: &StockSeries) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, series)?;
    writeln!(writer)?;
    Ok(())
}

/// `date,price,volume`
pub fn write_history_csv<W: Write>(
    writer: W,
    points: &[HistoricalPoint],
) -> Result<(), ExportError> {
    write_rows(writer, HISTORY_HEADER, points)
}

/// `date,price,price_low,price_high,confidence,sentiment`
pub fn write_predictions_csv<W: Write>(
    writer: W,
    points: &[PredictionPoint],
) -> Result<(), ExportError> {
    write_rows(writer, PREDICTIONS_HEADER, points)
}

const HISTORY_HEADER: &[&str] = &["date", "price", "volume"];
const PREDICTIONS_HEADER: &[&str] =
    &["date", "price", "price_low", "price_high", "confidence", "sentiment"];

fn write_rows<W: Write, T: Serialize>(
    writer: W,
    header: &[&str],
    rows: &[T],
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    // serde only emits the header alongside the first record
    if rows.is_empty() {
        csv.write_record(header)?;
    }
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn history_csv_layout() {
        let points = vec![
            HistoricalPoint { date: day(1), price: 101.5, volume: 2_000_000 },
            HistoricalPoint { date: day(2), price: 99.25, volume: 3_000_000 },
        ];
        let mut buf = Vec::new();
        write_history_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "date,price,volume");
        assert_eq!(lines[1], "2024-05-01,101.5,2000000");
        assert_eq!(lines[2], "2024-05-02,99.25,3000000");
    }

    #[test]
    fn predictions_csv_layout() {
        let points = vec![PredictionPoint {
            date: day(3),
            price: 100.0,
            price_low: 97.0,
            price_high: 103.0,
            confidence: 0.8,
            sentiment: Sentiment::Risky,
        }];
        let mut buf = Vec::new();
        write_predictions_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "date,price,price_low,price_high,confidence,sentiment");
        assert_eq!(lines[1], "2024-05-03,100.0,97.0,103.0,0.8,risky");
    }

    #[test]
    fn empty_input_still_writes_header() {
        let mut buf = Vec::new();
        write_history_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "date,price,volume\n");

        let mut buf = Vec::new();
        write_predictions_csv(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "date,price,price_low,price_high,confidence,sentiment\n"
        );
    }
}
