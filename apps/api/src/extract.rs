//! Document-to-plain-text extraction. The analysis pipeline treats the
//! result as an opaque string; this module is the only place that knows
//! about binary formats.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Spools an uploaded payload to a scoped temp file. The artifact is
/// removed when the handle drops, on success and failure paths alike.
pub fn spool_to_temp(data: &[u8]) -> Result<NamedTempFile, AppError> {
    let mut file = NamedTempFile::new()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not create temp file: {e}")))?;
    file.write_all(data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not spool upload: {e}")))?;
    Ok(file)
}

/// Extracts plain text from the spooled document based on its extension
/// (already validated and lowercased by the handler).
pub fn extract_text(path: &Path, extension: &str) -> Result<String, AppError> {
    match extension {
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| AppError::Extraction(format!("Could not read PDF: {e}"))),
        "txt" => std::fs::read_to_string(path)
            .map_err(|e| AppError::Extraction(format!("Could not read text file: {e}"))),
        "doc" | "docx" => Err(AppError::Extraction(
            "Text extraction is not implemented for this file type yet".to_string(),
        )),
        other => Err(AppError::Validation(format!(
            "Unsupported file type: .{other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_roundtrip_through_spool() {
        let spooled = spool_to_temp(b"plain text resume body").unwrap();
        let text = extract_text(spooled.path(), "txt").unwrap();
        assert_eq!(text, "plain text resume body");
    }

    #[test]
    fn test_docx_reports_extraction_failure() {
        let spooled = spool_to_temp(b"irrelevant").unwrap();
        let err = extract_text(spooled.path(), "docx").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_unknown_extension_is_a_validation_error() {
        let spooled = spool_to_temp(b"irrelevant").unwrap();
        let err = extract_text(spooled.path(), "exe").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let spooled = spool_to_temp(b"bytes").unwrap();
        let path = spooled.path().to_path_buf();
        assert!(path.exists());
        drop(spooled);
        assert!(!path.exists());
    }
}
