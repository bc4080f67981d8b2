// src/extract/html.rs
use crate::error::IntakeError;

use super::decode_utf8;

const RENDER_WIDTH: usize = 78;

/// Decodes the buffer as UTF-8 and renders the markup as plain text.
pub fn extract_text(bytes: &[u8]) -> Result<String, IntakeError> {
    let html = decode_utf8(bytes)?;
    html2text::from_read(html.as_bytes(), RENDER_WIDTH)
        .map_err(|e| IntakeError::parsing(format!("failed to convert HTML to text: {}", e)))
}
