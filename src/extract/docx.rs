// src/extract/docx.rs
//! Paragraph text from the main part of a WordprocessingML package

use std::io::{Cursor, Read};

use roxmltree::Node;
use zip::ZipArchive;

use crate::error::IntakeError;

const DOCUMENT_PART: &str = "word/document.xml";
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Reads body paragraphs in document order and joins them with newlines.
pub fn extract_text(bytes: &[u8]) -> Result<String, IntakeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| IntakeError::parsing(format!("failed to open DOCX as ZIP: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| IntakeError::parsing(format!("DOCX has no {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| IntakeError::parsing(format!("failed to read {}: {}", DOCUMENT_PART, e)))?;

    paragraphs_from_xml(&xml)
}

fn paragraphs_from_xml(xml: &str) -> Result<String, IntakeError> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| IntakeError::parsing(format!("malformed {}: {}", DOCUMENT_PART, e)))?;

    let Some(body) = doc.root_element().children().find(|n| is_w(n, "body")) else {
        return Ok(String::new());
    };

    let paragraphs: Vec<String> = body
        .children()
        .filter(|n| is_w(n, "p"))
        .map(paragraph_text)
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        // paragraph properties and text box contents are not paragraph text
        if node
            .ancestors()
            .any(|a| is_w(&a, "pPr") || is_w(&a, "txbxContent"))
        {
            continue;
        }
        match node.tag_name().name() {
            "t" if is_w(&node, "t") => text.push_str(node.text().unwrap_or_default()),
            "tab" if is_w(&node, "tab") => text.push('\t'),
            "br" | "cr" if node.tag_name().namespace() == Some(WORDML_NS) => text.push('\n'),
            _ => {}
        }
    }
    text
}

fn is_w(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WORDML_NS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn document_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            WORDML_NS, body
        )
    }

    fn docx_bytes(body: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml(body).as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let bytes = docx_bytes(
            "<w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space=\"preserve\"> Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Rust &amp; Go</w:t></w:r></w:p>\
             <w:p/>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Jane Doe\nRust & Go\n");
    }

    #[test]
    fn test_tab_stops_are_not_text() {
        let bytes = docx_bytes(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>Skills</w:t><w:tab/><w:t>Rust</w:t><w:br/><w:t>SQL</w:t></w:r></w:p>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Skills\tRust\nSQL");
    }

    #[test]
    fn test_text_box_contents_are_skipped() {
        let bytes = docx_bytes(
            "<w:p><w:r><w:t>Experience</w:t></w:r>\
             <w:r><w:pict><w:txbxContent><w:p><w:r><w:t>sidebar</w:t></w:r></w:p></w:txbxContent></w:pict></w:r>\
             <w:r><w:t> 2019-2024</w:t></w:r></w:p>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Experience 2019-2024");
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let bytes = docx_bytes(
            "<w:p><w:r><w:t>Summary</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Summary");
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_text(&bytes),
            Err(IntakeError::Parsing(_))
        ));
    }
}
