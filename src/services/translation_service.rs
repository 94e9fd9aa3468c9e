// src/services/translation_service.rs
//
// Translation Service - the workflow controller
//
// Owns the TranslationWorkflow behind a mutex, resolves selections against
// the catalogs, validates document uploads, and runs accepted requests
// against the injected provider exactly once each.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::catalog::{find_domain, find_language, Domain, Language};
use crate::domain::{
    validate_document, DocumentUpload, DomainError, TranslationOutcome, TranslationWorkflow,
};
use crate::error::AppResult;
use crate::events::{
    DocumentAttached, EventBus, TranslationCompleted, TranslationFailed, TranslationRequested,
};
use crate::providers::TranslationProvider;

#[derive(Debug, Clone)]
pub struct AttachDocumentRequest {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

pub struct TranslationService {
    workflow: Mutex<TranslationWorkflow>,
    provider: Arc<dyn TranslationProvider>,
    event_bus: Arc<EventBus>,
}

impl TranslationService {
    pub fn new(
        default_language: Language,
        default_domain: Domain,
        provider: Arc<dyn TranslationProvider>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            workflow: Mutex::new(TranslationWorkflow::new(default_language, default_domain)),
            provider,
            event_bus,
        }
    }

    /// Snapshot of the current workflow for the rendering layer.
    pub fn workflow_state(&self) -> TranslationWorkflow {
        self.workflow.lock().unwrap().clone()
    }

    pub fn select_language(&self, code: &str) -> AppResult<Language> {
        let language = find_language(code).ok_or_else(|| {
            DomainError::InvalidSelection(format!("unknown language code '{}'", code))
        })?;

        let mut workflow = self.workflow.lock().unwrap();
        workflow.select_language(language.clone());
        Ok(language)
    }

    pub fn select_domain(&self, id: &str) -> AppResult<Domain> {
        let domain = find_domain(id)
            .ok_or_else(|| DomainError::InvalidSelection(format!("unknown domain id '{}'", id)))?;

        let mut workflow = self.workflow.lock().unwrap();
        workflow.select_domain(domain.clone());
        Ok(domain)
    }

    /// Replace the input with free text. Any attached document is dropped.
    pub fn set_text_input(&self, content: String) -> AppResult<()> {
        let mut workflow = self.workflow.lock().unwrap();
        workflow.set_text_input(content);
        Ok(())
    }

    /// Validate and attach a document, replacing any text input.
    /// A rejected document leaves the prior input untouched.
    pub fn attach_document(&self, request: AttachDocumentRequest) -> AppResult<()> {
        let document = DocumentUpload {
            name: request.name,
            size_bytes: request.size_bytes,
            mime_type: request.mime_type,
            path: request.path,
        };

        validate_document(&document)?;

        {
            let mut workflow = self.workflow.lock().unwrap();
            workflow.set_document_input(document.clone());
        }

        self.event_bus.emit(DocumentAttached::new(
            document.name,
            document.size_bytes,
            document.mime_type,
        ));

        Ok(())
    }

    pub fn clear_input(&self) -> AppResult<()> {
        let mut workflow = self.workflow.lock().unwrap();
        workflow.clear_input();
        Ok(())
    }

    /// Run one translation request against the provider.
    ///
    /// The lock is held only to transition state; the provider call runs
    /// against the acceptance-time snapshot, so input edits during flight
    /// are accepted and affect only future requests. Precondition failures
    /// (no input, request already in flight) return an error without
    /// touching the provider; provider failures resolve the request as a
    /// recorded Failure outcome.
    pub async fn translate(&self) -> AppResult<TranslationOutcome> {
        let request = {
            let mut workflow = self.workflow.lock().unwrap();
            workflow.begin_translation()?
        };

        self.event_bus.emit(TranslationRequested::new(
            request.language.code.clone(),
            request.domain.id.clone(),
            request.input.kind().to_string(),
        ));

        let outcome = match self.provider.translate(request.clone()).await {
            Ok(response) => TranslationOutcome::Success {
                translated_text: response.translated_text,
                detected_source_language: response.detected_source_language,
            },
            Err(e) => {
                log::warn!("provider call failed: {}", e);
                TranslationOutcome::Failure {
                    message: e.to_string(),
                }
            }
        };

        {
            let mut workflow = self.workflow.lock().unwrap();
            workflow.finish_translation(outcome.clone());
        }

        match &outcome {
            TranslationOutcome::Success {
                translated_text, ..
            } => {
                self.event_bus.emit(TranslationCompleted::new(
                    request.language.code.clone(),
                    translated_text.chars().count(),
                ));
            }
            TranslationOutcome::Failure { message } => {
                self.event_bus.emit(TranslationFailed::new(
                    request.language.code.clone(),
                    message.clone(),
                ));
            }
        }

        Ok(outcome)
    }
}
