use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Domain, Language};
use crate::domain::request::{DocumentUpload, InputSource, TranslationOutcome, TranslationRequest};
use crate::domain::{DomainError, DomainResult};

/// The state a translation session moves through.
/// Owned by TranslationService; mutated only through the methods below.
/// Never persisted: the workflow dies with the UI session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationWorkflow {
    /// Currently selected target language (always a catalog member)
    pub language: Language,

    /// Currently selected subject domain (always a catalog member)
    pub domain: Domain,

    /// Source text or document for the next request
    pub input: InputSource,

    /// Outcome of the most recent provider call, if any
    pub last_result: Option<TranslationOutcome>,

    /// True only between an accepted translate() and its resolution
    pub translating: bool,
}

impl TranslationWorkflow {
    /// Create a workflow with the given default selections and no input.
    pub fn new(language: Language, domain: Domain) -> Self {
        Self {
            language,
            domain,
            input: InputSource::Empty,
            last_result: None,
            translating: false,
        }
    }

    /// Caller must have resolved `language` from the catalog.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Caller must have resolved `domain` from the catalog.
    pub fn select_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    /// Replace the input with free text, dropping any attached document.
    /// Empty text is accepted; it fails the presence check at translate time.
    pub fn set_text_input(&mut self, content: String) {
        self.input = InputSource::Text { content };
    }

    /// Replace the input with a validated document, dropping any text.
    pub fn set_document_input(&mut self, document: DocumentUpload) {
        self.input = InputSource::Document { document };
    }

    pub fn clear_input(&mut self) {
        self.input = InputSource::Empty;
    }

    /// Accept a translate() call.
    ///
    /// Both preconditions are checked before any state changes; a rejected
    /// call has no side effects. On acceptance the workflow is marked as
    /// translating and the immutable request snapshot is returned.
    pub fn begin_translation(&mut self) -> DomainResult<TranslationRequest> {
        if self.translating {
            return Err(DomainError::RequestInProgress);
        }
        if self.input.is_empty() {
            return Err(DomainError::NoInputProvided);
        }

        self.translating = true;
        Ok(TranslationRequest {
            language: self.language.clone(),
            domain: self.domain.clone(),
            input: self.input.clone(),
        })
    }

    /// Resolve the in-flight request with the provider outcome.
    pub fn finish_translation(&mut self, outcome: TranslationOutcome) {
        self.translating = false;
        self.last_result = Some(outcome);
    }
}
