use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::catalog::{Domain, Language};

/// Maximum accepted document size (10 MiB)
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Mime types a document upload may carry
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/pdf",
];

/// A document chosen through the file picker.
/// Byte content stays on disk; the workflow only carries the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// File name as shown to the user
    pub name: String,

    /// Size in bytes, as reported by the picker
    pub size_bytes: u64,

    /// Mime type, declared or inferred from the extension
    pub mime_type: String,

    /// Absolute path on disk, for extraction adapters
    pub path: PathBuf,
}

/// The source content of a translation request.
/// Exactly one variant is active; switching sources replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSource {
    #[default]
    Empty,
    Text {
        content: String,
    },
    Document {
        document: DocumentUpload,
    },
}

impl InputSource {
    /// True when there is nothing translatable: no document and no
    /// non-blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            InputSource::Empty => true,
            InputSource::Text { content } => content.trim().is_empty(),
            InputSource::Document { .. } => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Empty => "empty",
            InputSource::Text { .. } => "text",
            InputSource::Document { .. } => "document",
        }
    }
}

/// Immutable snapshot handed to the provider.
/// Built at the moment translate() is accepted; later input edits never
/// reach an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub language: Language,
    pub domain: Domain,
    pub input: InputSource,
}

/// Resolution of a translation request.
/// A Failure carries the provider's message verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationOutcome {
    Success {
        translated_text: String,
        detected_source_language: Option<String>,
    },
    Failure {
        message: String,
    },
}

/// Infer a document mime type from its file extension.
/// Mirrors the picker's accept list; unknown extensions map to None.
pub fn infer_mime_type(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => Some("text/plain"),
        Some("doc") => Some("application/msword"),
        Some("docx") => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        Some("pdf") => Some("application/pdf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        assert!(InputSource::Empty.is_empty());
        assert!(InputSource::Text {
            content: "".to_string()
        }
        .is_empty());
        assert!(InputSource::Text {
            content: "   \n\t".to_string()
        }
        .is_empty());
        assert!(!InputSource::Text {
            content: "Hello".to_string()
        }
        .is_empty());

        let document = DocumentUpload {
            name: "report.pdf".to_string(),
            size_bytes: 2048,
            mime_type: "application/pdf".to_string(),
            path: PathBuf::from("/tmp/report.pdf"),
        };
        assert!(!InputSource::Document { document }.is_empty());
    }

    #[test]
    fn test_mime_inference() {
        assert_eq!(
            infer_mime_type(Path::new("/tmp/notes.txt")),
            Some("text/plain")
        );
        assert_eq!(
            infer_mime_type(Path::new("report.docx")),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        );
        assert_eq!(
            infer_mime_type(Path::new("scan.pdf")),
            Some("application/pdf")
        );
        assert_eq!(infer_mime_type(Path::new("setup.exe")), None);
        assert_eq!(infer_mime_type(Path::new("no_extension")), None);
    }
}
