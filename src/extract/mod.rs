// src/extract/mod.rs
//! Extension-driven text extraction for downloaded documents

pub mod docx;
pub mod html;
pub mod ocr;
pub mod pdf;

pub use ocr::OcrConfig;

use tracing::{debug, info, warn};

use crate::error::IntakeError;
use crate::utils::get_file_extension;

pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";

/// Downloaded document, held in memory until its text is extracted
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Html,
    Text,
    Image,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "html" => Some(Self::Html),
            "txt" => Some(Self::Text),
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        get_file_extension(file_name).and_then(|ext| Self::from_extension(&ext))
    }
}

/// Outcome of extraction. An unrecognized extension is a normal result, not an
/// error; it renders as [`UNSUPPORTED_FORMAT`] wherever text is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Unsupported { extension: Option<String> },
}

impl Extraction {
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Unsupported { .. } => UNSUPPORTED_FORMAT,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unsupported { .. } => UNSUPPORTED_FORMAT.to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    ocr: OcrConfig,
}

impl Extractor {
    pub fn new(ocr: OcrConfig) -> Self {
        Self { ocr }
    }

    pub fn extract(&self, document: &Document) -> Result<Extraction, IntakeError> {
        let extension = get_file_extension(&document.file_name);
        info!(
            "Detected file extension: {}",
            extension.as_deref().unwrap_or("<none>")
        );

        let Some(format) = extension.as_deref().and_then(DocumentFormat::from_extension) else {
            warn!("Unsupported file format: {}", document.file_name);
            return Ok(Extraction::Unsupported { extension });
        };

        let bytes = document.bytes.as_slice();
        let text = match format {
            DocumentFormat::Pdf => pdf::extract_text(bytes)?,
            DocumentFormat::Docx => docx::extract_text(bytes)?,
            DocumentFormat::Html => html::extract_text(bytes)?,
            DocumentFormat::Text => decode_utf8(bytes)?,
            DocumentFormat::Image => ocr::extract_text(bytes, &self.ocr)?,
        };

        debug!("{:?} conversion completed ({} chars)", format, text.len());
        Ok(Extraction::Text(text))
    }

    /// Runs [`Extractor::extract`] on the blocking pool; parsers and OCR are CPU bound.
    pub async fn extract_owned(&self, document: Document) -> Result<Extraction, IntakeError> {
        let extractor = self.clone();
        tokio::task::spawn_blocking(move || extractor.extract(&document))
            .await
            .map_err(|e| IntakeError::Task(e.to_string()))?
    }
}

pub(crate) fn decode_utf8(bytes: &[u8]) -> Result<String, IntakeError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| IntakeError::parsing(format!("'utf-8' codec can't decode document: {}", e)))
}
