// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::{error_mapper::map_error, gemini::ModelError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Gemini model not initialized")]
    ModelUninitialized,

    #[error(transparent)]
    Upstream(#[from] ModelError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ModelUninitialized | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent back to the client as `detail`. Only validation text goes out untranslated.
    pub fn detail(&self) -> String {
        match self {
            AppError::BadRequest(detail) => detail.clone(),
            AppError::ModelUninitialized | AppError::Upstream(_) => map_error(&self.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "chat request failed");
        }
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
