// src/qa/chat_client.rs
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tracing::{error, info};

use super::types::{ChatRequest, ChatResponse, UploadedFile};

const FILES_ENDPOINT: &str = "/files";
const CHAT_ENDPOINT: &str = "/chat/completions";
const FILE_PURPOSE: &str = "assistants";

pub struct ChatClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload a local file and return its provider-side id
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let form = Form::new()
            .text("purpose", FILE_PURPOSE)
            .part("file", Part::bytes(content).file_name(file_name.clone()));

        info!("Uploading {} to files API", file_name);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, FILES_ENDPOINT))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("Failed to send file upload request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Files API error {}: {}", status, error_text);
            anyhow::bail!("Files API returned error {}: {}", status, error_text);
        }

        let uploaded: UploadedFile = response
            .json()
            .await
            .context("Failed to parse file upload response")?;

        info!(
            "Uploaded file id {} ({})",
            uploaded.id,
            uploaded.filename.as_deref().unwrap_or(&file_name)
        );
        Ok(uploaded.id)
    }

    pub async fn ask_about_file(&self, model: &str, file_id: &str, question: &str) -> Result<String> {
        let request = ChatRequest::about_file(model, file_id, question);

        info!("Sending chat completion request with model {}", model);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_ENDPOINT))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send chat completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Chat API error {}: {}", status, error_text);
            anyhow::bail!("Chat API returned error {}: {}", status, error_text);
        }

        let chat: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        chat.answer()
            .context("Chat completion response contained no answer")
    }
}
