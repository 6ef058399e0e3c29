use serde::Serialize;
use ts_rs::TS;

use mindcheck_core::models::answer::QuickItem;

/// Whether a higher raw rating adds more or fewer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringDirection {
    /// Contribution is the raw value.
    Normal,
    /// Contribution is `(max + 1) - raw`.
    Inverted,
}

impl ScoringDirection {
    pub fn contribution(self, raw: i32, max: i32) -> i64 {
        match self {
            ScoringDirection::Normal => i64::from(raw),
            ScoringDirection::Inverted => i64::from(max) + 1 - i64::from(raw),
        }
    }
}

/// One item of the quick check with its rating labels.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuickQuestion {
    pub item: QuickItem,
    pub prompt: String,
    pub min: i32,
    pub max: i32,
    /// Labels for ratings `min..=max`, in order.
    pub labels: Vec<String>,
    pub direction: ScoringDirection,
}

/// The quick check in presentation order.
///
/// Stress is rated 1 = "Very high" to 5 = "Very low" and scored inverted,
/// so a calm rating lowers the total.
pub fn questions() -> &'static [QuickQuestion] {
    static QUESTIONS: std::sync::LazyLock<Vec<QuickQuestion>> = std::sync::LazyLock::new(|| {
        vec![
            question(
                QuickItem::Mood,
                "How would you rate your overall mood today?",
                ["Very poor", "Poor", "Fair", "Good", "Excellent"],
                ScoringDirection::Normal,
            ),
            question(
                QuickItem::Sleep,
                "How would you rate your sleep quality recently?",
                ["Very poor", "Poor", "Fair", "Good", "Excellent"],
                ScoringDirection::Normal,
            ),
            question(
                QuickItem::Stress,
                "How would you rate your current stress level?",
                ["Very high", "High", "Moderate", "Low", "Very low"],
                ScoringDirection::Inverted,
            ),
            question(
                QuickItem::Social,
                "How connected do you feel to others?",
                [
                    "Very isolated",
                    "Somewhat isolated",
                    "Neutral",
                    "Somewhat connected",
                    "Very connected",
                ],
                ScoringDirection::Normal,
            ),
            question(
                QuickItem::Energy,
                "How would you rate your energy level?",
                ["Very low", "Low", "Moderate", "High", "Very high"],
                ScoringDirection::Normal,
            ),
        ]
    });
    &QUESTIONS
}

fn question(
    item: QuickItem,
    prompt: &str,
    labels: [&str; 5],
    direction: ScoringDirection,
) -> QuickQuestion {
    QuickQuestion {
        item,
        prompt: prompt.to_string(),
        min: 1,
        max: 5,
        labels: labels.iter().map(|l| l.to_string()).collect(),
        direction,
    }
}
