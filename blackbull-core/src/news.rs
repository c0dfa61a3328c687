//! Market news feed and its filters.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::catalog;
use crate::domain::Symbol;
use crate::rng::{pick, round_to, uniform, uniform_int};
use crate::text;

const FEED_LEN: usize = 20;
const FEED_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSentiment {
    Positive,
    Negative,
    Neutral,
}

impl NewsSentiment {
    pub const ALL: [NewsSentiment; 3] = [
        NewsSentiment::Positive,
        NewsSentiment::Negative,
        NewsSentiment::Neutral,
    ];
}

impl fmt::Display for NewsSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NewsSentiment::Positive => "positive",
            NewsSentiment::Negative => "negative",
            NewsSentiment::Neutral => "neutral",
        })
    }
}

impl FromStr for NewsSentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(NewsSentiment::Positive),
            "negative" => Ok(NewsSentiment::Negative),
            "neutral" => Ok(NewsSentiment::Neutral),
            other => Err(format!(
                "unknown sentiment '{other}'. Valid: positive, negative, neutral"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub sentiment: NewsSentiment,
    /// In `[-1, 1]`; drawn independently of `sentiment`.
    pub sentiment_score: f64,
    pub related_stocks: Vec<Symbol>,
}

/// Twenty items published within the seven days before `now`.
pub fn generate_news<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<NewsItem> {
    (0..FEED_LEN)
        .map(|_| {
            let sentiment = *pick(rng, &NewsSentiment::ALL);
            let related = uniform_int(rng, 1, 3) as usize;
            let related_stocks = catalog::all()
                .iter()
                .take(related)
                .map(|l| l.symbol.to_string())
                .collect();
            let age_secs = uniform_int(rng, 0, (FEED_WINDOW_DAYS * 86_400) as u64) as i64;

            NewsItem {
                id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
                title: text::sentence(rng, 8, 15),
                summary: text::sentences(rng, 3),
                source: text::company_name(rng),
                url: text::url(rng),
                published_at: now - Duration::seconds(age_secs),
                sentiment,
                sentiment_score: round_to(uniform(rng, -1.0, 1.0), 2),
                related_stocks,
            }
        })
        .collect()
}

/// Search text plus an optional sentiment restriction.
#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub query: String,
    pub sentiment: Option<NewsSentiment>,
}

impl NewsFilter {
    pub fn new(query: impl Into<String>, sentiment: Option<NewsSentiment>) -> Self {
        Self {
            query: query.into(),
            sentiment,
        }
    }

    /// Whether `item` passes. The query matches title, summary, or any related
    /// symbol, ignoring case; an empty query matches everything.
    pub fn matches(&self, item: &NewsItem) -> bool {
        if let Some(sentiment) = self.sentiment {
            if item.sentiment != sentiment {
                return false;
            }
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.title.to_lowercase().contains(&needle)
            || item.summary.to_lowercase().contains(&needle)
            || item
                .related_stocks
                .iter()
                .any(|s| s.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, items: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

pub fn sentiment_counts(items: &[NewsItem]) -> SentimentCounts {
    items.iter().fold(SentimentCounts::default(), |mut acc, item| {
        match item.sentiment {
            NewsSentiment::Positive => acc.positive += 1,
            NewsSentiment::Negative => acc.negative += 1,
            NewsSentiment::Neutral => acc.neutral += 1,
        }
        acc
    })
}
