use super::entity::{DocumentUpload, ACCEPTED_MIME_TYPES, MAX_DOCUMENT_BYTES};
use crate::domain::{DomainError, DomainResult};

/// Validates all DocumentUpload invariants
pub fn validate_document(document: &DocumentUpload) -> DomainResult<()> {
    validate_size(document)?;
    validate_mime_type(document)?;
    Ok(())
}

/// Size must not exceed the upload limit
fn validate_size(document: &DocumentUpload) -> DomainResult<()> {
    if document.size_bytes > MAX_DOCUMENT_BYTES {
        return Err(DomainError::FileTooLarge {
            size_bytes: document.size_bytes,
            limit_bytes: MAX_DOCUMENT_BYTES,
        });
    }
    Ok(())
}

/// Mime type must be one of the accepted document formats
fn validate_mime_type(document: &DocumentUpload) -> DomainResult<()> {
    if !ACCEPTED_MIME_TYPES.contains(&document.mime_type.as_str()) {
        return Err(DomainError::UnsupportedFile(document.mime_type.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn document(size_bytes: u64, mime_type: &str) -> DocumentUpload {
        DocumentUpload {
            name: "upload".to_string(),
            size_bytes,
            mime_type: mime_type.to_string(),
            path: PathBuf::from("/tmp/upload"),
        }
    }

    #[test]
    fn test_valid_document() {
        assert!(validate_document(&document(1024, "text/plain")).is_ok());
        assert!(validate_document(&document(1024, "application/pdf")).is_ok());
    }

    #[test]
    fn test_size_at_limit_is_accepted() {
        assert!(validate_document(&document(MAX_DOCUMENT_BYTES, "text/plain")).is_ok());
    }

    #[test]
    fn test_oversized_document_fails() {
        let result = validate_document(&document(11 * 1024 * 1024, "application/pdf"));

        match result {
            Err(DomainError::FileTooLarge {
                size_bytes,
                limit_bytes,
            }) => {
                assert_eq!(size_bytes, 11 * 1024 * 1024);
                assert_eq!(limit_bytes, MAX_DOCUMENT_BYTES);
            }
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_executable_mime_fails() {
        let result = validate_document(&document(1024, "application/x-msdownload"));

        match result {
            Err(DomainError::UnsupportedFile(mime)) => {
                assert_eq!(mime, "application/x-msdownload");
            }
            other => panic!("Expected UnsupportedFile, got {:?}", other),
        }
    }

    #[test]
    fn test_size_checked_before_mime() {
        // An oversized file with a bad mime reports the size problem first
        let result = validate_document(&document(MAX_DOCUMENT_BYTES + 1, "image/png"));
        assert!(matches!(result, Err(DomainError::FileTooLarge { .. })));
    }
}
