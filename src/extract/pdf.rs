// src/extract/pdf.rs
use crate::error::IntakeError;

/// Extracts text from an in-memory PDF, page by page, in page order.
pub fn extract_text(bytes: &[u8]) -> Result<String, IntakeError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| IntakeError::parsing(format!("failed to extract text from PDF: {}", e)))?;
    Ok(pages.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal PDF with one line of Helvetica text per page and a valid xref table
    fn pdf_with_pages(lines: &[&str]) -> Vec<u8> {
        let font_id = 3 + 2 * lines.len();
        let kids: Vec<String> = (0..lines.len())
            .map(|i| format!("{} 0 R", 3 + 2 * i))
            .collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                lines.len()
            ),
        ];
        for (i, line) in lines.iter().enumerate() {
            let content = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", line);
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                font_id,
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ));
        }
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
        }

        let xref_start = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_start
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[test]
    fn test_pages_concatenated_in_order() {
        let bytes = pdf_with_pages(&["First page text", "Second page text"]);
        let text = extract_text(&bytes).unwrap();

        let first = text.find("First page text").expect("page 1 text");
        let second = text.find("Second page text").expect("page 2 text");
        assert!(first < second);
    }
}
