//! Per-owner history summaries for the dashboard.

use std::collections::BTreeMap;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;
use ts_rs::TS;

use mindcheck_core::models::record::{AssessmentRecord, ResultSummary};
use mindcheck_core::models::risk::RiskTier;

const RECENT_LIMIT: usize = 5;
const TREND_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct HistorySummary {
    pub total_assessments: usize,
    /// Mean total score, rounded to two decimals. 0 with no results.
    pub average_score: f64,
    pub risk_distribution: BTreeMap<RiskTier, usize>,
    /// Most recent results, newest first.
    pub recent: Vec<ResultSummary>,
    /// Results from the last thirty days, oldest first.
    pub trend: Vec<ResultSummary>,
}

/// Order results newest first.
pub fn sort_newest_first(records: &mut [AssessmentRecord]) {
    records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}

pub fn summarize(records: &[AssessmentRecord], now: Timestamp) -> HistorySummary {
    let mut ordered: Vec<&AssessmentRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.completed_at);

    let total_assessments = ordered.len();
    let average_score = if total_assessments == 0 {
        0.0
    } else {
        let sum: i64 = ordered.iter().map(|r| r.total_score).sum();
        let mean = sum as f64 / total_assessments as f64;
        (mean * 100.0).round() / 100.0
    };

    let mut risk_distribution = BTreeMap::new();
    for record in &ordered {
        *risk_distribution.entry(record.risk_level).or_insert(0) += 1;
    }

    let recent = ordered
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|r| r.summary())
        .collect();

    let cutoff = now - SignedDuration::from_hours(TREND_WINDOW_DAYS * 24);
    let trend = ordered
        .iter()
        .filter(|r| r.completed_at >= cutoff)
        .map(|r| r.summary())
        .collect();

    HistorySummary {
        total_assessments,
        average_score,
        risk_distribution,
        recent,
        trend,
    }
}
