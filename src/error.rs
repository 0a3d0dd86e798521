//! Error types for the recipe server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Recipe Error Enum ==
/// Unified error type for the recipe server.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No recipe stored under the given id
    #[error("Recipe not found: {0}")]
    NotFound(u64),

    /// The id counter cannot hand out another id
    #[error("Recipe ids exhausted")]
    IdsExhausted,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading or writing a file failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding of stored data failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecipeError::NotFound(_) => StatusCode::NOT_FOUND,
            RecipeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RecipeError::IdsExhausted => StatusCode::SERVICE_UNAVAILABLE,
            RecipeError::Io(_) | RecipeError::Serialization(_) | RecipeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the recipe server.
pub type Result<T> = std::result::Result<T, RecipeError>;
