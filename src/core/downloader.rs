// src/core/downloader.rs
//! Single-shot document download into memory

use anyhow::Context;
use std::time::Duration;
use tracing::{error, info};

use crate::core::DocumentSource;
use crate::error::IntakeError;
use crate::extract::Document;
use crate::utils::file_name_from_url;

pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub async fn download(&self, url: &str) -> Result<Document, IntakeError> {
        info!("Starting document download: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Failed to download document: {}", e);
            IntakeError::download(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to download document, status {}", status);
            return Err(IntakeError::download(format!("status {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| IntakeError::download(format!("failed to read body: {}", e)))?;

        let file_name = file_name_from_url(url);
        info!(
            "Document downloaded successfully: {} ({} bytes)",
            file_name,
            bytes.len()
        );

        Ok(Document::new(file_name, bytes.to_vec()))
    }
}

#[rocket::async_trait]
impl DocumentSource for Downloader {
    async fn fetch(&self, url: &str) -> Result<Document, IntakeError> {
        self.download(url).await
    }
}
