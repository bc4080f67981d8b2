// src/web/types.rs

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::error::IntakeError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Status plus `{"error": ...}` body
pub type ApiError = (Status, Json<ErrorResponse>);

impl From<IntakeError> for ErrorResponse {
    fn from(err: IntakeError) -> Self {
        Self::new(err.to_string())
    }
}

pub fn api_error(err: IntakeError) -> ApiError {
    (err.status(), Json(ErrorResponse::from(err)))
}
