use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::record::AssessmentRecord;
use mindcheck_core::models::risk::{RiskBand, RiskTier};
use mindcheck_scoring::ReferenceData;

use crate::error::ApiError;
use crate::state::AppState;

/// A stored result together with the guidance for its tier.
#[derive(Serialize)]
pub struct ResultView {
    id: Uuid,
    total_score: i64,
    risk_level: RiskTier,
    risk_label: &'static str,
    completed_at: jiff::Timestamp,
    questionnaire_name: String,
    owner: Option<OwnerTag>,
    guidance: Option<RiskBand>,
}

impl ResultView {
    pub fn new(record: AssessmentRecord, reference: &ReferenceData) -> Self {
        let guidance = reference
            .band_for(record.kind, record.risk_level, record.band_score)
            .cloned();

        Self {
            id: record.id,
            total_score: record.total_score,
            risk_level: record.risk_level,
            risk_label: record.risk_level.label(),
            completed_at: record.completed_at,
            questionnaire_name: record.questionnaire_name,
            owner: record.owner,
            guidance,
        }
    }
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultView>, ApiError> {
    let record = state.store.load_result(id).await?;
    Ok(Json(ResultView::new(record, &state.reference)))
}
