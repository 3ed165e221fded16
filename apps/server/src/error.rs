use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use financegpt_core::errors::{Error as CoreError, ValidationError};
use financegpt_core::validation::FieldErrors;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Validation(#[from] FieldErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: FieldErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Validation(errors)
            | ApiError::Core(CoreError::Validation(ValidationError::Form(errors))) => {
                let body = Json(ValidationBody { errors });
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            ApiError::Core(e) => {
                let status = match &e {
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                    CoreError::Validation(_) | CoreError::Calculation(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    CoreError::Storage(_) | CoreError::Unexpected(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, e.to_string())
            }
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason),
            ApiError::Anyhow(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
