// src/lib.rs
// BhashaSetu - Domain-aware English to Indian language translator
//
// Architecture:
// - Domain-centric: catalogs, input sources and the workflow state machine
//   live in domain/; all business rules are validated there
// - Ports and adapters: translation and extraction are consumed through
//   providers/ traits; HTTP and filesystem adapters live in integrations/
// - Event-driven: the service publishes workflow facts on a synchronous bus
// - Explicit: no implicit behavior, no magic
// - Application Layer: thin Tauri commands over DTOs

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod providers;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    domains,
    find_domain,
    find_language,
    infer_mime_type,
    languages,
    validate_document,
    validate_workflow,
    // Catalogs
    Domain,
    // Request
    DocumentUpload,
    InputSource,
    Language,
    TranslationOutcome,
    TranslationRequest,
    // Workflow
    TranslationWorkflow,
    ACCEPTED_MIME_TYPES,
    MAX_DOCUMENT_BYTES,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_audit_handlers,
    DocumentAttached,
    DomainEvent,
    EventBus,
    EventLogEntry,
    TranslationCompleted,
    TranslationFailed,
    TranslationRequested,
};

// ============================================================================
// PUBLIC API - Ports
// ============================================================================

pub use providers::{
    DocumentTextExtractor, ExtractionError, ProviderError, ProviderResponse, TranslationProvider,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AttachDocumentRequest, TranslationService};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{AppConfig, ProviderSettings};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{GoogleTranslateClient, PlainTextExtractor};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
