// src/providers/mod.rs
//
// Consumed ports.
//
// ARCHITECTURE:
// - The workflow core talks to translation and extraction through these
//   traits only; concrete adapters live in integrations/
// - Adapters never see or mutate workflow state
// - Every failure is recoverable and carries a displayable message

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DocumentUpload, TranslationRequest};

/// What a provider hands back for a successful request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub translated_text: String,
    pub detected_source_language: Option<String>,
}

/// Ways a provider call can fail.
/// The workflow core collapses all of them into a single recoverable
/// failure, preserving the message for display.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Ways turning a document into text can fail
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Cannot extract text from '{mime_type}' documents")]
    UnsupportedFormat { mime_type: String },

    #[error("Failed to read document: {0}")]
    Read(String),
}

/// External translation engine.
///
/// Invoked at most once per accepted translate() call, with the immutable
/// request snapshot taken at acceptance time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<ProviderResponse, ProviderError>;
}

/// Turns an attached document into plain text a provider can translate.
/// Document byte content is opaque to the workflow core; only adapters
/// behind this trait ever read it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract_text(&self, document: &DocumentUpload) -> Result<String, ExtractionError>;
}
