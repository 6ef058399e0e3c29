use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use mindcheck_core::models::answer::{QuickAnswer, Submission};
use mindcheck_core::models::owner::OwnerTag;
use mindcheck_scoring::quick::{self, QuickQuestion};
use mindcheck_scoring::store;

use crate::error::ApiError;
use crate::routes::results::ResultView;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuickRequest {
    answers: Vec<QuickAnswer>,
    #[serde(default)]
    owner: Option<OwnerTag>,
}

pub async fn list_quick_questions() -> Json<&'static [QuickQuestion]> {
    Json(quick::questions())
}

pub async fn submit_quick(
    State(state): State<AppState>,
    Json(request): Json<QuickRequest>,
) -> Result<Json<ResultView>, ApiError> {
    let owner = request.owner.unwrap_or_else(OwnerTag::anonymous);
    let submission = Submission::Quick(request.answers);

    let record = store::submit(
        &state.store,
        None,
        &submission,
        &state.reference,
        Some(owner),
        jiff::Timestamp::now(),
    )
    .await?;

    tracing::info!(
        result_id = %record.id,
        kind = %record.kind,
        total_score = record.total_score,
        risk_level = %record.risk_level,
        "assessment_submitted"
    );

    Ok(Json(ResultView::new(record, &state.reference)))
}
