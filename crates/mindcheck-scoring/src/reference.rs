//! Thresholds and risk bands, loaded once at start-up and shared read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::risk::{AssessmentKind, RiskBand, RiskTier};

use crate::classify::{ClassificationPolicy, ThresholdTable};
use crate::error::ReferenceDataError;

/// Points a full-questionnaire question is assumed to be worth when
/// computing the maximum possible score.
pub const POINTS_PER_QUESTION: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceData {
    pub policies: BTreeMap<AssessmentKind, ClassificationPolicy>,
    pub bands: Vec<RiskBand>,
}

impl ReferenceData {
    pub fn policy(&self, kind: AssessmentKind) -> Option<&ClassificationPolicy> {
        self.policies.get(&kind)
    }

    /// Active bands for one kind, ordered by `min_score`.
    pub fn bands_for(&self, kind: AssessmentKind) -> Vec<&RiskBand> {
        let mut bands: Vec<&RiskBand> = self
            .bands
            .iter()
            .filter(|b| b.kind == kind && b.is_active)
            .collect();
        bands.sort_by_key(|b| b.min_score);
        bands
    }

    /// The active band of `kind` whose tier matches and whose range holds
    /// `band_score`.
    pub fn band_for(&self, kind: AssessmentKind, tier: RiskTier, band_score: i64) -> Option<&RiskBand> {
        self.bands_for(kind)
            .into_iter()
            .find(|b| b.tier == tier && b.contains(band_score))
    }

    /// Check thresholds are ordered and that no two active bands of the same
    /// kind overlap.
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        for (kind, policy) in &self.policies {
            let thresholds = policy.thresholds();
            if thresholds.moderate > thresholds.high {
                return Err(ReferenceDataError::ThresholdsOutOfOrder {
                    kind: *kind,
                    moderate: thresholds.moderate,
                    high: thresholds.high,
                });
            }
            if let ClassificationPolicy::Percentage {
                points_per_question,
                ..
            } = policy
                && *points_per_question <= 0
            {
                return Err(ReferenceDataError::InvalidPointsPerQuestion {
                    kind: *kind,
                    points: *points_per_question,
                });
            }
        }

        for band in self.bands.iter().filter(|b| b.is_active) {
            if band.min_score > band.max_score {
                return Err(ReferenceDataError::InvertedBand {
                    kind: band.kind,
                    tier: band.tier,
                    min: band.min_score,
                    max: band.max_score,
                });
            }
        }

        let kinds: Vec<AssessmentKind> = {
            let mut kinds: Vec<_> = self.bands.iter().map(|b| b.kind).collect();
            kinds.sort();
            kinds.dedup();
            kinds
        };
        for kind in kinds {
            let bands = self.bands_for(kind);
            for pair in bands.windows(2) {
                let (first, second) = (pair[0], pair[1]);
                if second.min_score <= first.max_score {
                    return Err(ReferenceDataError::OverlappingBands {
                        kind,
                        first: first.tier,
                        first_min: first.min_score,
                        first_max: first.max_score,
                        second: second.tier,
                        second_min: second.min_score,
                        second_max: second.max_score,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        let policies = BTreeMap::from([
            (
                AssessmentKind::Full,
                ClassificationPolicy::Percentage {
                    points_per_question: POINTS_PER_QUESTION,
                    thresholds: ThresholdTable {
                        high: 70,
                        moderate: 40,
                    },
                },
            ),
            (
                AssessmentKind::Quick,
                ClassificationPolicy::RawTotal {
                    thresholds: ThresholdTable {
                        high: 18,
                        moderate: 12,
                    },
                },
            ),
        ]);

        let mut bands = Vec::with_capacity(6);
        for (kind, ranges) in [
            (AssessmentKind::Full, [(0, 39), (40, 69), (70, 100)]),
            (AssessmentKind::Quick, [(0, 11), (12, 17), (18, 25)]),
        ] {
            for (tier, (min, max)) in RiskTier::ALL.into_iter().zip(ranges) {
                bands.push(default_band(kind, tier, min, max));
            }
        }

        Self { policies, bands }
    }
}

fn default_band(kind: AssessmentKind, tier: RiskTier, min_score: i64, max_score: i64) -> RiskBand {
    let (title, description, actions, resources) = match tier {
        RiskTier::Low => (
            "You're doing well!",
            "Your responses suggest you're managing your mental health well. Keep up the good work!",
            vec![
                "Continue your current self-care practices",
                "Maintain regular sleep and exercise routines",
                "Stay connected with friends and family",
                "Consider periodic check-ins with this assessment",
            ],
            vec![
                "Mindfulness and meditation apps",
                "Regular exercise routines",
                "Social connection activities",
            ],
        ),
        RiskTier::Moderate => (
            "Some areas for improvement",
            "Your responses suggest there are some areas where you could benefit from additional support.",
            vec![
                "Consider speaking with a mental health professional",
                "Practice stress management techniques",
                "Maintain a regular sleep schedule",
                "Engage in activities you enjoy",
                "Consider joining a support group",
            ],
            vec![
                "Stress management techniques",
                "Sleep hygiene resources",
                "Mental health support groups",
                "Professional counseling services",
            ],
        ),
        RiskTier::High => (
            "Professional support recommended",
            "Your responses suggest you may benefit from professional mental health support. Please consider reaching out for help.",
            vec![
                "Contact a mental health professional immediately",
                "Reach out to a trusted friend or family member",
                "Consider crisis support resources",
                "Prioritize your safety and well-being",
                "Don't hesitate to seek emergency help if needed",
            ],
            vec![
                "Crisis helplines (988 Suicide & Crisis Lifeline)",
                "Emergency mental health services",
                "Professional counseling and therapy",
                "Support groups and peer support",
            ],
        ),
    };

    RiskBand {
        kind,
        tier,
        min_score,
        max_score,
        title: title.to_string(),
        description: description.to_string(),
        actions: actions.into_iter().map(String::from).collect(),
        resources: resources.into_iter().map(String::from).collect(),
        is_active: true,
    }
}
