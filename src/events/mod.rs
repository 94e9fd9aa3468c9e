// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    DocumentAttached,
    TranslationCompleted,
    TranslationFailed,
    TranslationRequested,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_audit_handlers;

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
