//! Text acquisition: turns uploaded bytes into plain text for the parser.
//!
//! The format is picked from the filename extension. PDF and DOCX decoding is
//! delegated to `pdf-extract` and `docx-rs`; plain text is decoded best-effort.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("document contains no text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = filename.to_lowercase();
        if name.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if name.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else if name.ends_with(".txt") {
            Some(DocumentFormat::Text)
        } else {
            None
        }
    }
}

static HORIZONTAL_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid whitespace regex"));

/// Collapses runs of spaces/tabs and normalises line endings to `\n`.
pub fn clean_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    HORIZONTAL_SPACE_RE.replace_all(&text, " ").into_owned()
}

pub fn extract_text(data: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_filename(filename)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(filename.to_string()))?;

    let raw = match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        DocumentFormat::Docx => docx_text(data)?,
        DocumentFormat::Text => decode_text(data),
    };

    let text = clean_text(&raw);
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    tracing::debug!(?format, chars = text.len(), "text extracted");
    Ok(text)
}

fn docx_text(data: &[u8]) -> Result<String, ExtractionError> {
    use docx_rs::DocumentChild;

    let docx = docx_rs::read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let mut text = String::new();
            push_paragraph_text(&p.children, &mut text);
            paragraphs.push(text);
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Run text of a paragraph, including runs nested in hyperlinks.
fn push_paragraph_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    use docx_rs::{ParagraphChild, RunChild};

    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        out.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}

/// UTF-16 when a byte-order mark says so, otherwise UTF-8 with a Latin-1
/// fallback. Latin-1 maps every byte, so this never fails.
pub fn decode_text(data: &[u8]) -> String {
    match data {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => match std::str::from_utf8(data) {
            Ok(s) => s.trim_start_matches('\u{FEFF}').to_string(),
            Err(_) => data.iter().map(|&b| char::from(b)).collect(),
        },
    }
}

fn decode_utf16(data: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units = data.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
