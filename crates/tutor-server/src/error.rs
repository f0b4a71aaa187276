use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tutor_core::CoreError;
use tutor_llm::LLMError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Provider(#[from] LLMError),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Provider(err) => err.message(),
        };
        HttpResponse::build(self.status_code()).json(JsonError { error })
    }
}
