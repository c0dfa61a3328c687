//! Notification feed.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rng::{chance, pick, uniform_int};
use crate::text;

const FEED_LEN: usize = 10;
const FEED_WINDOW_DAYS: i64 = 3;
const READ_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Price,
    News,
    Portfolio,
    Prediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
    Success,
}

const KINDS: [AlertKind; 4] = [
    AlertKind::Price,
    AlertKind::News,
    AlertKind::Portfolio,
    AlertKind::Prediction,
];

const SEVERITIES: [Severity; 4] = [
    Severity::Info,
    Severity::Warning,
    Severity::Danger,
    Severity::Success,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// Ten alerts raised within the three days before `now`; about 70% are already read.
pub fn generate_alerts<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<Alert> {
    (0..FEED_LEN)
        .map(|_| {
            let kind = *pick(rng, &KINDS);
            let severity = *pick(rng, &SEVERITIES);
            let age_secs = uniform_int(rng, 0, (FEED_WINDOW_DAYS * 86_400) as u64) as i64;
            Alert {
                id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
                kind,
                title: text::sentence(rng, 4, 8),
                message: text::sentence(rng, 10, 20),
                severity,
                timestamp: now - Duration::seconds(age_secs),
                is_read: chance(rng, READ_PROBABILITY),
            }
        })
        .collect()
}

pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.is_read).count()
}
