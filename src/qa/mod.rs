// src/qa/mod.rs
//! Ask a chat model one question about a downloaded resume

pub mod chat_client;
pub mod types;

pub use chat_client::ChatClient;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::Downloader;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_QUESTION: &str = "Summarize this candidate's experience and key skills.";

#[derive(Debug, Clone)]
pub struct QaConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub resume_url: String,
    pub question: String,
    pub download_dir: PathBuf,
}

/// Download, upload, ask. Returns the model's answer.
pub async fn run(config: &QaConfig) -> Result<String> {
    let local_path = download_resume(&config.resume_url, &config.download_dir).await?;

    let client = ChatClient::new(config.api_key.clone(), config.api_base.clone())?;
    let file_id = client.upload_file(&local_path).await?;

    client
        .ask_about_file(&config.model, &file_id, &config.question)
        .await
}

/// Store the resume under `dir`, named after the URL's last path segment
pub async fn download_resume(url: &str, dir: &Path) -> Result<PathBuf> {
    let document = Downloader::new(None)?.download(url).await?;

    let file_name = if document.file_name.is_empty() {
        "resume".to_string()
    } else {
        document.file_name
    };

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, &document.bytes)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    info!("Saved resume to {}", path.display());
    Ok(path)
}
