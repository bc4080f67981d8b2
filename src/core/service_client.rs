// src/core/service_client.rs
//! HTTP client for the external add-resumes service

use anyhow::Context;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::core::ResumeSink;
use crate::error::IntakeError;
use crate::types::ResumeRecord;

const ADD_RESUMES_ENDPOINT: &str = "/add_resumes";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, ADD_RESUMES_ENDPOINT)
    }

    /// POSTs the record as JSON and returns whatever JSON the service answers with
    pub async fn send_resume(&self, record: &ResumeRecord) -> Result<serde_json::Value, IntakeError> {
        let url = self.endpoint_url();
        info!("Sending data to external endpoint: {}", url);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| IntakeError::ForwardTransport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Intake service error response: {}", error_text);
            return Err(IntakeError::Forward {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| IntakeError::ForwardTransport(format!("invalid JSON response: {}", e)))?;

        info!("Data sent successfully");
        Ok(body)
    }
}

#[rocket::async_trait]
impl ResumeSink for ServiceClient {
    async fn submit(&self, record: &ResumeRecord) -> Result<serde_json::Value, IntakeError> {
        self.send_resume(record).await
    }
}
