//! Text extraction from resume documents

use crate::error::{Result, ScreenerError};
use regex::Regex;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub trait TextExtractor {
    /// Decode the raw document bytes into plain text (case preserved).
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ScreenerError::extraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads the WordprocessingML parts of a .docx archive: headers, body, then footers.
pub struct DocxExtractor {
    header_regex: Regex,
    footer_regex: Regex,
    break_regex: Regex,
    tab_regex: Regex,
    tag_regex: Regex,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    const BODY_PART: &'static str = "word/document.xml";

    pub fn new() -> Self {
        Self {
            header_regex: Regex::new(r"^word/header\d*\.xml$").expect("Invalid header regex"),
            footer_regex: Regex::new(r"^word/footer\d*\.xml$").expect("Invalid footer regex"),
            break_regex: Regex::new(r"<w:(?:br|cr)\b[^>]*/>").expect("Invalid break regex"),
            tab_regex: Regex::new(r"<w:tab/>").expect("Invalid tab regex"),
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid tag regex"),
        }
    }

    fn part_names(&self, archive: &ZipArchive<Cursor<&[u8]>>) -> Result<Vec<String>> {
        let names: Vec<&str> = archive.file_names().collect();
        if !names.contains(&Self::BODY_PART) {
            return Err(ScreenerError::extraction(
                "Archive has no word/document.xml; not a Word document",
            ));
        }

        let mut headers: Vec<String> = names
            .iter()
            .filter(|n| self.header_regex.is_match(n))
            .map(|n| n.to_string())
            .collect();
        let mut footers: Vec<String> = names
            .iter()
            .filter(|n| self.footer_regex.is_match(n))
            .map(|n| n.to_string())
            .collect();
        headers.sort();
        footers.sort();

        let mut parts = headers;
        parts.push(Self::BODY_PART.to_string());
        parts.extend(footers);
        Ok(parts)
    }

    fn xml_to_text(&self, xml: &str) -> String {
        let text = xml.replace("</w:p>", "\n");
        let text = self.break_regex.replace_all(&text, "\n");
        let text = self.tab_regex.replace_all(&text, "\t");
        let text = self.tag_regex.replace_all(&text, "");

        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ScreenerError::extraction(format!("Failed to open DOCX archive: {}", e)))?;

        let mut sections = Vec::new();
        for name in self.part_names(&archive)? {
            let mut xml = String::new();
            archive
                .by_name(&name)
                .map_err(|e| ScreenerError::extraction(format!("Missing DOCX part {}: {}", name, e)))?
                .read_to_string(&mut xml)
                .map_err(|e| ScreenerError::extraction(format!("Failed to read {}: {}", name, e)))?;
            sections.push(self.xml_to_text(&xml));
        }

        Ok(sections.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn paragraph(text: &str) -> String {
        format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", text)
    }

    #[test]
    fn test_pdf_text_keeps_case() {
        let bytes = include_bytes!("../../tests/fixtures/sample_resume.pdf");
        let text = PdfExtractor.extract(bytes).unwrap();
        assert!(text.contains("Jane Doe"), "text was {:?}", text);
        assert!(text.contains("Java"));
        assert!(text.contains("Python"));
    }

    #[test]
    fn test_docx_body_paragraphs() {
        let body = format!(
            "<?xml version=\"1.0\"?><w:document><w:body>{}{}</w:body></w:document>",
            paragraph("Jane Doe"),
            paragraph("Rust &amp; Python<w:tab/>5 years")
        );
        let bytes = build_docx(&[("word/document.xml", body.as_str())]);

        let text = DocxExtractor::new().extract(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Python\t5 years\n");
    }

    #[test]
    fn test_docx_headers_and_footers_order() {
        let body = format!("<w:document><w:body>{}</w:body></w:document>", paragraph("body"));
        let header = format!("<w:hdr>{}</w:hdr>", paragraph("header"));
        let footer = format!("<w:ftr>{}</w:ftr>", paragraph("footer"));
        let bytes = build_docx(&[
            ("word/footer1.xml", footer.as_str()),
            ("word/document.xml", body.as_str()),
            ("word/header1.xml", header.as_str()),
        ]);

        let text = DocxExtractor::new().extract(&bytes).unwrap();
        let header_pos = text.find("header").unwrap();
        let body_pos = text.find("body").unwrap();
        let footer_pos = text.find("footer").unwrap();
        assert!(header_pos < body_pos && body_pos < footer_pos);
    }

    #[test]
    fn test_line_breaks() {
        let body = "<w:document><w:body><w:p><w:r><w:t>a</w:t><w:br w:type=\"page\"/><w:t>b</w:t></w:r></w:p></w:body></w:document>";
        let bytes = build_docx(&[("word/document.xml", body)]);
        let text = DocxExtractor::new().extract(&bytes).unwrap();
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_zip_without_body_is_rejected() {
        let bytes = build_docx(&[("readme.txt", "hello")]);
        let result = DocxExtractor::new().extract(&bytes);
        assert!(matches!(result, Err(ScreenerError::ExtractionFailed { .. })));
    }

    #[test]
    fn test_garbage_bytes_fail_docx_extraction() {
        let garbage = b"definitely not an archive";
        assert!(matches!(
            DocxExtractor::new().extract(garbage),
            Err(ScreenerError::ExtractionFailed { .. })
        ));
    }
}
