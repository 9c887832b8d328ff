use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response;

/// Message shown when the request is rejected before any network activity.
pub const CHECK_INPUT_MESSAGE: &str = "Please check API key and valid URL.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please check API key and valid URL.")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Failed to fetch content: {0}")]
    FetchError(String),

    #[error("No readable content found.")]
    EmptyContent,

    #[error("LLM processing error: {0}")]
    LlmError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FetchError(_) | AppError::LlmError(_) => StatusCode::BAD_GATEWAY,
            AppError::EmptyContent => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The single message the form shows, whatever the kind.
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::error::<()>(self.status_code(), self.user_message()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
