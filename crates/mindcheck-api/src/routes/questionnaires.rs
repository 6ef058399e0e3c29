use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindcheck_core::models::answer::{SubmittedAnswer, Submission};
use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::questionnaire::{Question, QuestionnaireSummary};
use mindcheck_scoring::store::{self, AssessmentStore};

use crate::error::ApiError;
use crate::routes::results::ResultView;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: Uuid,
    name: String,
    description: String,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    answers: Vec<SubmittedAnswer>,
    /// History to file the result under. A fresh anonymous tag when absent.
    #[serde(default)]
    owner: Option<OwnerTag>,
}

pub async fn list_questionnaires(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionnaireSummary>>, ApiError> {
    let questionnaires = state.store.list_questionnaires().await?;
    Ok(Json(
        questionnaires
            .iter()
            .filter(|q| q.is_active)
            .map(|q| q.summary())
            .collect(),
    ))
}

pub async fn get_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire = state.store.load_questionnaire(id).await?;
    if !questionnaire.is_active {
        return Err(ApiError::NotFound(format!("questionnaire not found: {id}")));
    }

    let questions = questionnaire
        .ordered_questions()
        .into_iter()
        .cloned()
        .map(|mut q| {
            q.options.sort_by_key(|o| o.order);
            q
        })
        .collect();

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id,
        name: questionnaire.name,
        description: questionnaire.description,
        questions,
    }))
}

pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<ResultView>, ApiError> {
    let owner = request.owner.unwrap_or_else(OwnerTag::anonymous);
    let submission = Submission::Questionnaire(request.answers);

    let record = store::submit(
        &state.store,
        Some(id),
        &submission,
        &state.reference,
        Some(owner),
        jiff::Timestamp::now(),
    )
    .await?;

    tracing::info!(
        result_id = %record.id,
        questionnaire_id = %id,
        kind = %record.kind,
        total_score = record.total_score,
        risk_level = %record.risk_level,
        "assessment_submitted"
    );

    Ok(Json(ResultView::new(record, &state.reference)))
}
