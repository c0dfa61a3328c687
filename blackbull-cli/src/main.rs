//! BlackBull CLI: synthetic series, quotes, portfolio, news and alerts.
//!
//! Commands:
//! - `series`: history + prediction band for one symbol (JSON, CSV, or summary)
//! - `watchlist`: one summary line per symbol, generated in parallel
//! - `quotes`: market overview, optionally filtered
//! - `portfolio`: holdings, totals and risk distribution
//! - `news`: news feed with search and sentiment filters
//! - `alerts`: notification feed
//! - `report`: analyst picks
//!
//! Every command is reproducible with `--seed`. Logs go to stderr; set
//! `RUST_LOG=blackbull_core=debug` for per-series detail.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blackbull_core::alerts::{generate_alerts, unread_count};
use blackbull_core::analysis::{sentiment_breakdown, MacdSignal, PredictionSummary, RsiZone};
use blackbull_core::analyst::generate_report;
use blackbull_core::catalog;
use blackbull_core::domain::StockSeries;
use blackbull_core::export::{write_history_csv, write_predictions_csv, write_series_json};
use blackbull_core::market::{generate_quotes, search_quotes};
use blackbull_core::news::{generate_news, sentiment_counts, NewsFilter, NewsSentiment};
use blackbull_core::portfolio::generate_portfolio;
use blackbull_core::{generate_watchlist, GeneratorConfig, SeedHierarchy, SeriesGenerator};

#[derive(Parser)]
#[command(
    name = "blackbull",
    about = "BlackBull: synthetic market data for the prediction dashboard"
)]
struct Cli {
    /// Master seed. Omit for a fresh random seed (logged so the run can be replayed).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file with a [generator] table overriding generator defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text for list commands.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeriesFormat {
    Json,
    HistoryCsv,
    PredictionsCsv,
    Summary,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a price history and prediction band for one symbol.
    Series {
        /// Ticker label (defaults to AAPL).
        #[arg(default_value = catalog::DEFAULT_SYMBOL)]
        symbol: String,

        /// Last historical day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<String>,

        #[arg(long, value_enum, default_value_t = SeriesFormat::Json)]
        format: SeriesFormat,
    },
    /// Summarise several symbols at once.
    Watchlist {
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Last historical day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Market overview quotes.
    Quotes {
        /// Case-insensitive match on symbol or company name.
        #[arg(long)]
        search: Option<String>,
    },
    /// Mock portfolio with totals and risk distribution.
    Portfolio,
    /// News feed.
    News {
        /// Match title, summary, or related symbol.
        #[arg(long)]
        search: Option<String>,

        /// positive, negative or neutral.
        #[arg(long)]
        sentiment: Option<NewsSentiment>,
    },
    /// Notification feed.
    Alerts {
        /// Only show unread alerts.
        #[arg(long, default_value_t = false)]
        unread: bool,
    },
    /// Analyst picks and high-risk names.
    Report,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blackbull=info,blackbull_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let master_seed = cli.seed.unwrap_or_else(rand::random);
    info!(master_seed, "seeded");
    let seeds = SeedHierarchy::new(master_seed);

    match cli.command {
        Commands::Series {
            symbol,
            as_of,
            format,
        } => {
            let generator = load_generator(cli.config.as_ref())?;
            run_series(&generator, &seeds, &symbol, as_of.as_deref(), format)
        }
        Commands::Watchlist { symbols, as_of } => {
            let generator = load_generator(cli.config.as_ref())?;
            run_watchlist(&generator, &seeds, &symbols, as_of.as_deref(), cli.json)
        }
        Commands::Quotes { search } => run_quotes(&seeds, search.as_deref(), cli.json),
        Commands::Portfolio => run_portfolio(&seeds, cli.json),
        Commands::News { search, sentiment } => {
            run_news(&seeds, search.unwrap_or_default(), sentiment, cli.json)
        }
        Commands::Alerts { unread } => run_alerts(&seeds, unread, cli.json),
        Commands::Report => run_report(&seeds, cli.json),
    }
}

fn load_generator(path: Option<&PathBuf>) -> Result<SeriesGenerator> {
    let config = match path {
        Some(p) => GeneratorConfig::from_file(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => GeneratorConfig::default(),
    };
    Ok(SeriesGenerator::new(config))
}

fn parse_as_of(as_of: Option<&str>) -> Result<NaiveDate> {
    as_of
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .context("--as-of must be YYYY-MM-DD")
        .map(|d| d.unwrap_or_else(|| chrono::Local::now().date_naive()))
}

/// Per-command stream so adding a draw to one command never shifts another.
fn command_rng(seeds: &SeedHierarchy, command: &str) -> StdRng {
    StdRng::seed_from_u64(seeds.sub_seed(command, 0))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run_series(
    generator: &SeriesGenerator,
    seeds: &SeedHierarchy,
    symbol: &str,
    as_of: Option<&str>,
    format: SeriesFormat,
) -> Result<()> {
    let as_of = parse_as_of(as_of)?;
    let symbol = symbol.to_uppercase();
    let series = generator.generate(&symbol, as_of, &mut seeds.rng_for(&symbol, 0));

    match format {
        SeriesFormat::Json => write_series_json(io::stdout().lock(), &series)?,
        SeriesFormat::HistoryCsv => write_history_csv(io::stdout().lock(), &series.historical)?,
        SeriesFormat::PredictionsCsv => {
            write_predictions_csv(io::stdout().lock(), &series.predictions)?
        }
        SeriesFormat::Summary => print_series_summary(&series),
    }
    Ok(())
}

fn print_series_summary(series: &StockSeries) {
    let name = catalog::find(&series.symbol).map_or("", |l| l.name);
    println!("{} {}", series.symbol, name);

    if let Some(summary) = PredictionSummary::from_series(series) {
        println!("  Current price:   ${:.2}", summary.current_price);
        println!("  Target:          ${:.2}", summary.target_price);
        println!("  Forecast change: {:+.2}%", summary.predicted_change_percent);
        println!("  Outlook:         {:?}", summary.outlook);
    }

    let breakdown = sentiment_breakdown(&series.predictions);
    println!(
        "  Sentiment days:  {} bullish / {} neutral / {} risky",
        breakdown.bullish, breakdown.neutral, breakdown.risky
    );

    let t = &series.technical_indicators;
    println!("  RSI:             {} ({:?})", t.rsi, RsiZone::from_rsi(t.rsi));
    println!("  MACD:            {} ({:?})", t.macd, MacdSignal::from_macd(t.macd));
    println!(
        "  Bollinger:       U ${:.2} / M ${:.2} / L ${:.2}",
        t.bollinger_bands.upper, t.bollinger_bands.middle, t.bollinger_bands.lower
    );
    println!(
        "  Model accuracy:  {}% (30d) / {}% (90d)",
        series.model_accuracy.past_30_days, series.model_accuracy.past_90_days
    );
}

fn run_watchlist(
    generator: &SeriesGenerator,
    seeds: &SeedHierarchy,
    symbols: &[String],
    as_of: Option<&str>,
    json: bool,
) -> Result<()> {
    let as_of = parse_as_of(as_of)?;
    let symbols: Vec<String> = symbols.iter().map(|s| s.to_uppercase()).collect();
    let batch = generate_watchlist(&symbols, as_of, seeds, generator);

    let summaries: Vec<(&str, Option<PredictionSummary>)> = batch
        .iter()
        .map(|s| (s.symbol.as_str(), PredictionSummary::from_series(s)))
        .collect();

    if json {
        return print_json(&summaries);
    }

    println!("{:<8} {:>10} {:>10} {:>9}  Outlook", "Symbol", "Price", "Target", "Change");
    for (symbol, summary) in summaries {
        match summary {
            Some(s) => println!(
                "{:<8} {:>10.2} {:>10.2} {:>+8.2}%  {:?}",
                symbol, s.current_price, s.target_price, s.predicted_change_percent, s.outlook
            ),
            None => println!("{symbol:<8} (no data)"),
        }
    }
    Ok(())
}

fn run_quotes(seeds: &SeedHierarchy, search: Option<&str>, json: bool) -> Result<()> {
    let quotes = generate_quotes(&mut command_rng(seeds, "quotes"));
    let hits = search_quotes(&quotes, search.unwrap_or(""));

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No listings match.");
        return Ok(());
    }
    for q in hits {
        let arrow = if q.is_up() { "▲" } else { "▼" };
        println!(
            "{:<6} {:<24} ${:>8.2} {arrow} {:>+6.2} ({:+.2}%)  vol {:.1}M  cap ${:.1}B",
            q.symbol,
            q.name,
            q.price,
            q.change,
            q.change_percent,
            q.volume as f64 / 1e6,
            q.market_cap as f64 / 1e9
        );
    }
    Ok(())
}

fn run_portfolio(seeds: &SeedHierarchy, json: bool) -> Result<()> {
    let portfolio = generate_portfolio(&mut command_rng(seeds, "portfolio"));
    let summary = portfolio.summary();
    let risk = portfolio.risk_distribution();

    if json {
        return print_json(&serde_json::json!({
            "portfolio": portfolio,
            "summary": summary,
            "riskDistribution": risk,
        }));
    }

    println!("Portfolio {}", portfolio.id);
    for h in &portfolio.holdings {
        println!(
            "  {:<6} {:>4} sh  avg ${:>7.2}  now ${:>7.2}  value ${:>10.2}  {:>+9.2} ({:+.2}%)  {}",
            h.symbol,
            h.shares,
            h.avg_price,
            h.current_price,
            h.total_value,
            h.change,
            h.change_percent,
            h.risk_level.label()
        );
    }
    println!(
        "Total ${:.2}  change {:+.2} ({:+.2}%)",
        summary.total_value, summary.total_change, summary.total_change_percent
    );
    println!(
        "Risk: {} low / {} medium / {} high",
        risk.low, risk.medium, risk.high
    );
    Ok(())
}

fn run_news(
    seeds: &SeedHierarchy,
    search: String,
    sentiment: Option<NewsSentiment>,
    json: bool,
) -> Result<()> {
    let news = generate_news(Utc::now(), &mut command_rng(seeds, "news"));
    let filter = NewsFilter::new(search, sentiment);
    let hits = filter.apply(&news);

    if json {
        return print_json(&hits);
    }

    let counts = sentiment_counts(&news);
    println!(
        "{} positive / {} negative / {} neutral",
        counts.positive, counts.negative, counts.neutral
    );
    if hits.is_empty() {
        println!("No articles found. Try adjusting your search or filter criteria.");
        return Ok(());
    }
    for item in hits {
        println!(
            "[{} {:+.2}] {} ({}, {})",
            item.sentiment,
            item.sentiment_score,
            item.title,
            item.source,
            item.published_at.format("%Y-%m-%d %H:%M")
        );
        println!("    {}  {}", item.related_stocks.join(", "), item.url);
    }
    Ok(())
}

fn run_alerts(seeds: &SeedHierarchy, unread_only: bool, json: bool) -> Result<()> {
    let alerts = generate_alerts(Utc::now(), &mut command_rng(seeds, "alerts"));
    let shown: Vec<_> = alerts
        .iter()
        .filter(|a| !unread_only || !a.is_read)
        .collect();

    if json {
        return print_json(&shown);
    }

    println!("{} unread", unread_count(&alerts));
    for a in shown {
        let marker = if a.is_read { " " } else { "*" };
        println!(
            "{marker} {:?}/{:?} {}: {}",
            a.kind, a.severity, a.title, a.message
        );
    }
    Ok(())
}

fn run_report(seeds: &SeedHierarchy, json: bool) -> Result<()> {
    let report = generate_report(&mut command_rng(seeds, "report"));

    if json {
        return print_json(&report);
    }

    println!("Best investments");
    for p in &report.best_investments {
        println!("  {:<6} +{:.1}%  {}", p.symbol, p.predicted_gain, p.reason);
    }
    println!("High risk");
    for p in &report.high_risk {
        println!("  {:<6} -{:.1}%  {}", p.symbol, p.predicted_loss, p.reason);
    }
    Ok(())
}
