use axum::Json;
use axum::extract::{Path, State};

use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::record::ResultSummary;
use mindcheck_scoring::history::{self, HistorySummary};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_history(
    State(state): State<AppState>,
    Path(owner): Path<OwnerTag>,
) -> Result<Json<Vec<ResultSummary>>, ApiError> {
    let mut records = state.store.list_owner_results(&owner).await?;
    history::sort_newest_first(&mut records);
    Ok(Json(records.iter().map(|r| r.summary()).collect()))
}

pub async fn get_history_summary(
    State(state): State<AppState>,
    Path(owner): Path<OwnerTag>,
) -> Result<Json<HistorySummary>, ApiError> {
    let records = state.store.list_owner_results(&owner).await?;
    Ok(Json(history::summarize(&records, jiff::Timestamp::now())))
}
