use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mindcheck_scoring::error::AssessmentError;
use mindcheck_scoring::store::SubmitError;
use mindcheck_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Well-formed request whose answers fail validation.
    Unprocessable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Unprocessable(msg) => {
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AssessmentError> for ApiError {
    fn from(e: AssessmentError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

impl From<SubmitError<StorageError>> for ApiError {
    fn from(e: SubmitError<StorageError>) -> Self {
        match e {
            SubmitError::Assessment(e) => e.into(),
            SubmitError::InactiveQuestionnaire(id) => {
                ApiError::NotFound(format!("questionnaire not found: {id}"))
            }
            SubmitError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn validation_failures_are_unprocessable() {
        let err: ApiError = SubmitError::<StorageError>::Assessment(
            AssessmentError::MissingRequiredAnswer {
                question: "mood".to_string(),
            },
        )
        .into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn inactive_and_missing_questionnaires_are_not_found() {
        let inactive: ApiError = SubmitError::<StorageError>::InactiveQuestionnaire(Uuid::nil()).into();
        assert_eq!(inactive.status(), StatusCode::NOT_FOUND);

        let missing: ApiError = SubmitError::Store(StorageError::NotFound {
            key: "questionnaires/x.json".to_string(),
        })
        .into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_are_internal() {
        let err: ApiError = StorageError::PutObject("throttled".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
