// src/error.rs
//! Error kinds raised by the intake pipeline

use rocket::http::Status;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields in the request body";
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Could not download file";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    Validation,

    #[error("{}: {reason}", DOWNLOAD_FAILED_MESSAGE)]
    Download { reason: String },

    #[error("{0}")]
    Parsing(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("Service returned error status {status}: {body}")]
    Forward { status: u16, body: String },

    #[error("Failed to reach intake service: {0}")]
    ForwardTransport(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl IntakeError {
    pub fn download(reason: impl Into<String>) -> Self {
        Self::Download {
            reason: reason.into(),
        }
    }

    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(message.into())
    }

    /// HTTP status the web layer answers with
    pub fn status(&self) -> Status {
        match self {
            Self::Validation => Status::BadRequest,
            _ => Status::InternalServerError,
        }
    }
}
