// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{
    Domain, InputSource, Language, TranslationOutcome, TranslationWorkflow,
};

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDto {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainDto {
    pub id: String,
    pub name: String,
}

// ============================================================================
// INPUT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDto {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Active input as the UI renders it; `kind` is "empty", "text" or "document"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSourceDto {
    pub kind: String,
    pub text: Option<String>,
    pub document: Option<DocumentDto>,
}

/// Incoming document selection from the file picker.
/// The mime type is optional; the command infers it from the extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachDocumentDto {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
    pub path: String,
}

// ============================================================================
// WORKFLOW DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcomeDto {
    pub status: String, // "success" or "failure"
    pub translated_text: Option<String>,
    pub detected_source_language: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStateDto {
    pub language: LanguageDto,
    pub domain: DomainDto,
    pub input: InputSourceDto,
    pub last_result: Option<TranslationOutcomeDto>,
    pub translating: bool,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Language> for LanguageDto {
    fn from(language: Language) -> Self {
        Self {
            code: language.code,
            name: language.name,
        }
    }
}

impl From<Domain> for DomainDto {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
        }
    }
}

impl From<InputSource> for InputSourceDto {
    fn from(input: InputSource) -> Self {
        match input {
            InputSource::Empty => Self {
                kind: "empty".to_string(),
                text: None,
                document: None,
            },
            InputSource::Text { content } => Self {
                kind: "text".to_string(),
                text: Some(content),
                document: None,
            },
            InputSource::Document { document } => Self {
                kind: "document".to_string(),
                text: None,
                // The on-disk path stays backend-side
                document: Some(DocumentDto {
                    name: document.name,
                    size_bytes: document.size_bytes,
                    mime_type: document.mime_type,
                }),
            },
        }
    }
}

impl From<TranslationOutcome> for TranslationOutcomeDto {
    fn from(outcome: TranslationOutcome) -> Self {
        match outcome {
            TranslationOutcome::Success {
                translated_text,
                detected_source_language,
            } => Self {
                status: "success".to_string(),
                translated_text: Some(translated_text),
                detected_source_language,
                message: None,
            },
            TranslationOutcome::Failure { message } => Self {
                status: "failure".to_string(),
                translated_text: None,
                detected_source_language: None,
                message: Some(message),
            },
        }
    }
}

impl From<TranslationWorkflow> for WorkflowStateDto {
    fn from(workflow: TranslationWorkflow) -> Self {
        Self {
            language: workflow.language.into(),
            domain: workflow.domain.into(),
            input: workflow.input.into(),
            last_result: workflow.last_result.map(TranslationOutcomeDto::from),
            translating: workflow.translating,
        }
    }
}
