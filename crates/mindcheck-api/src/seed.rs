//! `mindcheck-api seed`: load the sample questionnaire and a starter
//! resource catalog into the bucket. Entries that already exist (matched
//! by name or title) are left alone.

use jiff::Timestamp;
use uuid::Uuid;

use mindcheck_core::models::questionnaire::{Question, QuestionKind, QuestionOption, Questionnaire};
use mindcheck_core::models::resource::{Resource, ResourceKind};
use mindcheck_storage::store::S3Store;

const SAMPLE_QUESTIONNAIRE: &str = "Mental Health Self-Assessment";

const SAMPLE_QUESTIONS: [(&str, [&str; 5]); 5] = [
    (
        "How would you rate your overall mood over the past week?",
        ["Very poor", "Poor", "Fair", "Good", "Excellent"],
    ),
    (
        "How has your sleep quality been recently?",
        ["Very poor", "Poor", "Fair", "Good", "Excellent"],
    ),
    (
        "How would you describe your current stress level?",
        ["Very high", "High", "Moderate", "Low", "Very low"],
    ),
    (
        "How connected do you feel to others?",
        [
            "Very isolated",
            "Somewhat isolated",
            "Neutral",
            "Somewhat connected",
            "Very connected",
        ],
    ),
    (
        "How would you rate your energy level?",
        ["Very low", "Low", "Moderate", "High", "Very high"],
    ),
];

struct SampleResource {
    title: &'static str,
    description: &'static str,
    kind: ResourceKind,
    category: &'static str,
    url: Option<&'static str>,
    phone: Option<&'static str>,
    is_free: bool,
}

const SAMPLE_RESOURCES: &[SampleResource] = &[
    SampleResource {
        title: "988 Suicide & Crisis Lifeline",
        description: "24/7 free and confidential support for people in distress, prevention and crisis resources.",
        kind: ResourceKind::Helpline,
        category: "Crisis Support",
        url: None,
        phone: Some("988"),
        is_free: true,
    },
    SampleResource {
        title: "Crisis Text Line",
        description: "24/7 crisis support via text message. Text HOME to 741741 for immediate help.",
        kind: ResourceKind::Helpline,
        category: "Crisis Support",
        url: None,
        phone: Some("741741"),
        is_free: true,
    },
    SampleResource {
        title: "SAMHSA National Helpline",
        description: "Free, confidential, 24/7 treatment referral and information service for mental health and substance use.",
        kind: ResourceKind::Helpline,
        category: "Crisis Support",
        url: None,
        phone: Some("1-800-662-4357"),
        is_free: true,
    },
    SampleResource {
        title: "ADAA Online Support Groups",
        description: "Online support groups for anxiety, depression, and related disorders.",
        kind: ResourceKind::SupportGroup,
        category: "Support Groups",
        url: Some("https://adaa.org/supportgroups"),
        phone: None,
        is_free: true,
    },
    SampleResource {
        title: "Psychology Today: Find a Therapist",
        description: "Comprehensive directory to find licensed therapists and counselors in your area.",
        kind: ResourceKind::Therapy,
        category: "Professional Help",
        url: Some("https://www.psychologytoday.com"),
        phone: None,
        is_free: true,
    },
];

pub async fn run(store: &S3Store) -> eyre::Result<()> {
    let now = Timestamp::now();

    let existing = store.list_questionnaires().await?;
    if existing.iter().any(|q| q.name == SAMPLE_QUESTIONNAIRE) {
        tracing::info!(name = SAMPLE_QUESTIONNAIRE, "sample questionnaire already present");
    } else {
        let questionnaire = sample_questionnaire(now);
        store.save_questionnaire(&questionnaire).await?;
        tracing::info!(questionnaire_id = %questionnaire.id, "sample questionnaire created");
    }

    let resources = store.list_resources().await?;
    let mut created = 0;
    for sample in SAMPLE_RESOURCES {
        if resources.iter().any(|r| r.title == sample.title) {
            continue;
        }
        store.save_resource(&sample.to_resource(now)).await?;
        created += 1;
    }
    tracing::info!(created, bucket = store.bucket(), "sample resources seeded");

    Ok(())
}

fn sample_questionnaire(now: Timestamp) -> Questionnaire {
    let questions = SAMPLE_QUESTIONS
        .iter()
        .zip(1..)
        .map(|((text, labels), order)| Question {
            id: Uuid::new_v4(),
            text: text.to_string(),
            kind: QuestionKind::SingleChoice,
            order,
            is_required: true,
            options: labels
                .iter()
                .zip(1..)
                .map(|(label, order)| QuestionOption {
                    id: Uuid::new_v4(),
                    label: label.to_string(),
                    value: order as i32,
                    order,
                })
                .collect(),
        })
        .collect();

    Questionnaire {
        id: Uuid::new_v4(),
        name: SAMPLE_QUESTIONNAIRE.to_string(),
        description: "A comprehensive assessment to evaluate your mental health status across multiple dimensions.".to_string(),
        is_active: true,
        questions,
        created_at: now,
        updated_at: now,
    }
}

impl SampleResource {
    fn to_resource(&self, now: Timestamp) -> Resource {
        Resource {
            id: Uuid::new_v4(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            category: self.category.to_string(),
            url: self.url.map(String::from),
            phone: self.phone.map(String::from),
            is_free: self.is_free,
            is_verified: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
