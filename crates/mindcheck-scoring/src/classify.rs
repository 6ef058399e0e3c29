//! Maps a total score to a risk tier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::risk::{AssessmentKind, RiskTier};

use crate::error::AssessmentError;
use crate::reference::ReferenceData;

/// Inclusive lower bounds of the upper two tiers. Anything below
/// `moderate` is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdTable {
    pub high: i64,
    pub moderate: i64,
}

impl ThresholdTable {
    pub fn tier_for(&self, value: i64) -> RiskTier {
        if value >= self.high {
            RiskTier::High
        } else if value >= self.moderate {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Tier for the percentage `numerator / denominator * 100`, compared
    /// exactly. A zero denominator is treated as 0 %.
    fn tier_for_ratio(&self, numerator: i64, denominator: i64) -> RiskTier {
        if denominator <= 0 {
            return self.tier_for(0);
        }
        let scaled = i128::from(numerator) * 100;
        let at_least = |threshold: i64| scaled >= i128::from(threshold) * i128::from(denominator);
        if at_least(self.high) {
            RiskTier::High
        } else if at_least(self.moderate) {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}

/// How one assessment kind turns a total into a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "policy", rename_all = "snake_case")]
#[ts(export)]
pub enum ClassificationPolicy {
    /// Total as a percentage of `required questions × points_per_question`.
    Percentage {
        points_per_question: i64,
        thresholds: ThresholdTable,
    },
    /// The raw total compared directly.
    RawTotal { thresholds: ThresholdTable },
}

impl ClassificationPolicy {
    pub fn thresholds(&self) -> &ThresholdTable {
        match self {
            ClassificationPolicy::Percentage { thresholds, .. }
            | ClassificationPolicy::RawTotal { thresholds } => thresholds,
        }
    }

    pub fn evaluate(&self, total: i64, required_questions: usize) -> Evaluation {
        match self {
            ClassificationPolicy::Percentage {
                points_per_question,
                thresholds,
            } => {
                let max_possible = max_possible(required_questions, *points_per_question);
                Evaluation {
                    tier: thresholds.tier_for_ratio(total, max_possible),
                    band_score: whole_percentage(total, max_possible),
                }
            }
            ClassificationPolicy::RawTotal { thresholds } => Evaluation {
                tier: thresholds.tier_for(total),
                band_score: total,
            },
        }
    }
}

/// Classifier output for one total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub tier: RiskTier,
    /// The score on the scale this kind's risk bands are written in.
    pub band_score: i64,
}

/// What the classifier needs to know about the assessment besides its total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContext {
    pub kind: AssessmentKind,
    pub required_questions: usize,
}

/// Classify a total using the policy configured for `context.kind`.
pub fn classify(
    total: i64,
    context: ScoreContext,
    reference: &ReferenceData,
) -> Result<Evaluation, AssessmentError> {
    let policy = reference
        .policy(context.kind)
        .ok_or_else(|| AssessmentError::UnknownAssessmentKind(context.kind.to_string()))?;
    Ok(policy.evaluate(total, context.required_questions))
}

/// Parse an assessment kind tag coming from outside the process.
pub fn parse_kind(tag: &str) -> Result<AssessmentKind, AssessmentError> {
    tag.parse()
        .map_err(|_| AssessmentError::UnknownAssessmentKind(tag.to_string()))
}

pub fn max_possible(required_questions: usize, points_per_question: i64) -> i64 {
    i64::try_from(required_questions)
        .unwrap_or(i64::MAX)
        .saturating_mul(points_per_question)
}

/// Percentage rounded down to a whole number and clamped to 0–100.
fn whole_percentage(total: i64, max_possible: i64) -> i64 {
    if max_possible <= 0 {
        return 0;
    }
    let value = (i128::from(total) * 100).div_euclid(i128::from(max_possible));
    value.clamp(0, 100) as i64
}
