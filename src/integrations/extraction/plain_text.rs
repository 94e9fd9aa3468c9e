// src/integrations/extraction/plain_text.rs
//
// Plain-text document extractor.
//
// Only text/plain documents are handled in-repo. Word and PDF extraction
// needs a real parsing backend and reports UnsupportedFormat until one is
// wired in.

use async_trait::async_trait;

use crate::domain::DocumentUpload;
use crate::providers::{DocumentTextExtractor, ExtractionError};

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentTextExtractor for PlainTextExtractor {
    async fn extract_text(&self, document: &DocumentUpload) -> Result<String, ExtractionError> {
        if document.mime_type != "text/plain" {
            return Err(ExtractionError::UnsupportedFormat {
                mime_type: document.mime_type.clone(),
            });
        }

        tokio::fs::read_to_string(&document.path)
            .await
            .map_err(|e| ExtractionError::Read(e.to_string()))
    }
}
