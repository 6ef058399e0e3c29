use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use mindcheck_core::models::resource::Resource;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let mut resources = state.store.list_resources().await?;
    resources.retain(|r| r.is_active);
    Ok(Json(resources))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resource>, ApiError> {
    let resource = state.store.load_resource(id).await?;
    if !resource.is_active {
        return Err(ApiError::NotFound(format!("resource not found: {id}")));
    }
    Ok(Json(resource))
}
