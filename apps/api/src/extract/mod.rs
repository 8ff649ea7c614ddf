//! Document Extractor — converts an uploaded resume into plain text.
//!
//! Exactly two formats are supported, selected by the declared MIME type.
//! Anything else is an explicit error rather than silent empty text.

use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

pub mod handlers;

/// MIME type of PDF uploads.
pub const PDF_MIME: &str = "application/pdf";
/// MIME type of DOCX uploads (OOXML word-processing documents).
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document type '{0}'; upload a PDF or DOCX resume")]
    UnsupportedFormat(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Failed to read DOCX archive: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("Failed to read DOCX document XML: {0}")]
    DocxXml(#[from] quick_xml::Error),

    #[error("DOCX archive has no word/document.xml")]
    DocxMissingDocument,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts plain text from an uploaded document. Pure function of the
/// bytes and the declared MIME type.
pub fn extract_text(bytes: &[u8], declared_mime: &str) -> Result<String, ExtractError> {
    match declared_mime {
        PDF_MIME => extract_pdf(bytes),
        DOCX_MIME => extract_docx(bytes),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}

/// DOCX is a ZIP container; the visible text lives in `word/document.xml`
/// as `<w:t>` runs grouped into `<w:p>` paragraphs.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut document_xml = String::new();
    {
        let mut entry = match archive.by_name("word/document.xml") {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(ExtractError::DocxMissingDocument)
            }
            Err(e) => return Err(e.into()),
        };
        entry.read_to_string(&mut document_xml)?;
    }

    let mut reader = Reader::from_str(&document_xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Event::Text(t) if in_text_run => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}
