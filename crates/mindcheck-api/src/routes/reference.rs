use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use mindcheck_core::models::risk::{AssessmentKind, RiskBand};
use mindcheck_scoring::classify;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BandQuery {
    kind: Option<String>,
}

/// Active risk bands, lowest first, for one kind or for every kind.
pub async fn list_risk_bands(
    State(state): State<AppState>,
    Query(query): Query<BandQuery>,
) -> Result<Json<Vec<RiskBand>>, ApiError> {
    let kinds = match query.kind.as_deref() {
        Some(tag) => {
            let kind = classify::parse_kind(tag).map_err(|e| ApiError::BadRequest(e.to_string()))?;
            vec![kind]
        }
        None => vec![AssessmentKind::Full, AssessmentKind::Quick],
    };

    let bands = kinds
        .into_iter()
        .flat_map(|kind| state.reference.bands_for(kind))
        .cloned()
        .collect();
    Ok(Json(bands))
}
