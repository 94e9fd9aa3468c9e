// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod translation_service;


// Re-export all services and their types
pub use translation_service::{AttachDocumentRequest, TranslationService};
