// src/extract/ocr.rs
//! Image OCR through the tesseract command line tool

use image::ImageFormat;
use std::process::Command;
use tracing::{debug, warn};

use crate::error::IntakeError;

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Executable name or path of tesseract
    pub command: String,
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

/// Decodes the buffer as an image and runs OCR over it.
pub fn extract_text(bytes: &[u8], config: &OcrConfig) -> Result<String, IntakeError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| IntakeError::parsing(format!("cannot identify image file: {}", e)))?;

    // tesseract only reads from disk; normalize everything to PNG first
    let scratch = tempfile::Builder::new()
        .prefix("resume_ocr_")
        .suffix(".png")
        .tempfile()
        .map_err(|e| IntakeError::Ocr(format!("failed to create temp file: {}", e)))?;

    image
        .save_with_format(scratch.path(), ImageFormat::Png)
        .map_err(|e| IntakeError::Ocr(format!("failed to write image: {}", e)))?;

    debug!(
        "Running {} on {} ({}x{})",
        config.command,
        scratch.path().display(),
        image.width(),
        image.height()
    );

    let output = Command::new(&config.command)
        .arg(scratch.path())
        .arg("stdout")
        .arg("-l")
        .arg(&config.language)
        .output()
        .map_err(|e| IntakeError::Ocr(format!("failed to run {}: {}", config.command, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!("{} exited with {}: {}", config.command, output.status, stderr);
        return Err(IntakeError::Ocr(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_undecodable_image_is_parsing_error() {
        let err = extract_text(b"GIF89a-not-really", &OcrConfig::default()).unwrap_err();
        assert!(matches!(err, IntakeError::Parsing(_)));
    }

    #[test]
    fn test_missing_ocr_binary_is_reported() {
        let config = OcrConfig {
            command: "definitely-not-a-real-tesseract-binary".to_string(),
            ..OcrConfig::default()
        };
        let err = extract_text(&png_bytes(), &config).unwrap_err();
        assert!(matches!(err, IntakeError::Ocr(_)));
    }
}
