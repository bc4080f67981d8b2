// src/types/intake.rs
//! Intake request, forwarded resume record and the handler's response body

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IntakeError;
use crate::extract::Extraction;
use crate::utils::is_truthy;

pub const DEFAULT_LABEL: &str = "N/A";

/// Submitted body. Everything except the resume URL is passed through as
/// whatever JSON the caller sent, so numeric ids survive untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub company_name: Option<Value>,
    pub posting_id: Option<Value>,
    pub posting_name: Option<Value>,
    pub source: Option<Value>,
    pub resume_url: Option<String>,
    pub batch_id: Option<Value>,
    pub sheet_name: Option<Value>,
}

/// Request with every required field present and defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedIntake {
    pub company_name: Value,
    pub posting_id: Value,
    pub posting_name: Value,
    pub source: Value,
    pub resume_url: String,
    pub batch_id: Value,
    pub sheet_name: Value,
}

impl IntakeRequest {
    /// `null`, `false`, `0`, `""` and empty containers count as missing.
    pub fn validate(&self) -> Result<ValidatedIntake, IntakeError> {
        let required = |value: &Option<Value>| {
            value
                .as_ref()
                .filter(|v| is_truthy(v))
                .cloned()
                .ok_or(IntakeError::Validation)
        };
        let labelled = |value: &Option<Value>| {
            value
                .clone()
                .unwrap_or_else(|| Value::String(DEFAULT_LABEL.to_string()))
        };

        let resume_url = self
            .resume_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(IntakeError::Validation)?
            .to_string();

        Ok(ValidatedIntake {
            company_name: required(&self.company_name)?,
            posting_id: required(&self.posting_id)?,
            source: required(&self.source)?,
            resume_url,
            batch_id: required(&self.batch_id)?,
            posting_name: labelled(&self.posting_name),
            sheet_name: labelled(&self.sheet_name),
        })
    }
}

/// Payload posted to the external add-resumes service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeRecord {
    pub company_name: Value,
    pub posting_id: Value,
    pub posting_name: Value,
    pub source: Value,
    pub file_name: String,
    pub file_id: String,
    pub sheet_name: Value,
    pub resume_content: String,
}

impl ResumeRecord {
    /// The resume URL doubles as display name and identifier.
    pub fn assemble(intake: &ValidatedIntake, extraction: &Extraction) -> Self {
        Self {
            company_name: intake.company_name.clone(),
            posting_id: intake.posting_id.clone(),
            posting_name: intake.posting_name.clone(),
            source: intake.source.clone(),
            file_name: intake.resume_url.clone(),
            file_id: intake.resume_url.clone(),
            sheet_name: intake.sheet_name.clone(),
            resume_content: extraction.as_text().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub posting_id: Value,
    pub resume_text: String,
    pub external_response: Value,
}
