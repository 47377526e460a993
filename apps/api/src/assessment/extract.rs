//! Resume text extraction and upload media-type gates.

use std::path::Path;

use crate::errors::AppError;

/// Fallback text stored when a PDF parses but yields nothing extractable.
pub const EMPTY_PDF_TEXT: &str = "Unable to extract text from PDF";

/// PDF-to-text extraction seam. The production implementation wraps
/// `pdf-extract`; tests substitute a fixed-output fake.
pub trait ResumeTextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, AppError>;
}

pub struct PdfTextExtractor;

impl ResumeTextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, AppError> {
        let text = pdf_extract::extract_text(path).map_err(|e| {
            tracing::error!("PDF extraction error: {e}");
            AppError::FileProcessing("Failed to extract resume content".to_string())
        })?;

        if text.trim().is_empty() {
            return Ok(EMPTY_PDF_TEXT.to_string());
        }
        Ok(text)
    }
}

// Media-type gates applied while multipart parts stream in, before any
// bytes are buffered.

pub fn is_pdf(content_type: Option<&str>) -> bool {
    content_type == Some("application/pdf")
}

pub fn is_image(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.starts_with("image/"))
        .unwrap_or(false)
}

pub fn is_audio(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.starts_with("audio/") || ct.contains("webm"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_gate_requires_exact_type() {
        assert!(is_pdf(Some("application/pdf")));
        assert!(!is_pdf(Some("application/octet-stream")));
        assert!(!is_pdf(Some("text/plain")));
        assert!(!is_pdf(None));
    }

    #[test]
    fn test_image_gate_accepts_any_image_subtype() {
        assert!(is_image(Some("image/jpeg")));
        assert!(is_image(Some("image/png")));
        assert!(!is_image(Some("application/pdf")));
        assert!(!is_image(None));
    }

    #[test]
    fn test_audio_gate_accepts_webm_containers() {
        assert!(is_audio(Some("audio/mpeg")));
        assert!(is_audio(Some("video/webm")));
        assert!(is_audio(Some("audio/webm")));
        assert!(!is_audio(Some("image/png")));
        assert!(!is_audio(None));
    }
}
