// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod request;
pub mod workflow;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalogs
pub use catalog::{domains, find_domain, find_language, languages, Domain, Language};

// Request Domain
pub use request::{
    infer_mime_type, validate_document, DocumentUpload, InputSource, TranslationOutcome,
    TranslationRequest, ACCEPTED_MIME_TYPES, MAX_DOCUMENT_BYTES,
};

// Workflow Domain
pub use workflow::{validate_workflow, TranslationWorkflow};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("File too large: {size_bytes} bytes (limit {limit_bytes})")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("No input provided")]
    NoInputProvided,

    #[error("A translation request is already in progress")]
    RequestInProgress,

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
