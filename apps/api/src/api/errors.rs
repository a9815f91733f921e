use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::game::{AddGameError, RemoveGameError, ResultCode, UpdateScoreError};

/// API error type with HTTP status code, message and scoreboard result code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<i32>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    /// Attaches the scoreboard result code
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.code {
            Some(code) => Json(json!({
                "error": self.message,
                "code": code
            })),
            None => Json(json!({
                "error": self.message
            })),
        };

        (self.status, body).into_response()
    }
}

impl From<AddGameError> for ApiError {
    fn from(e: AddGameError) -> Self {
        Self::conflict(e.to_string()).with_code(e.code())
    }
}

impl From<UpdateScoreError> for ApiError {
    fn from(e: UpdateScoreError) -> Self {
        let error = match e {
            UpdateScoreError::GameIdNotExists => Self::not_found(e.to_string()),
            UpdateScoreError::ScoreTeamALess
            | UpdateScoreError::ScoreTeamBLess
            | UpdateScoreError::ScoreIsTooHigh => Self::unprocessable_entity(e.to_string()),
        };
        error.with_code(e.code())
    }
}

impl From<RemoveGameError> for ApiError {
    fn from(e: RemoveGameError) -> Self {
        Self::not_found(e.to_string()).with_code(e.code())
    }
}
