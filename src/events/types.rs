// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// INPUT EVENTS
// ============================================================================

/// Emitted when a document passes validation and becomes the active input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAttached {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl DocumentAttached {
    pub fn new(name: String, size_bytes: u64, mime_type: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
            size_bytes,
            mime_type,
        }
    }
}

impl DomainEvent for DocumentAttached {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DocumentAttached" }
}

// ============================================================================
// TRANSLATION EVENTS
// ============================================================================

/// Emitted when a translate() call is accepted and its snapshot is taken
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub language_code: String,
    pub domain_id: String,
    pub input_kind: String, // "text" or "document"
}

impl TranslationRequested {
    pub fn new(language_code: String, domain_id: String, input_kind: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            language_code,
            domain_id,
            input_kind,
        }
    }
}

impl DomainEvent for TranslationRequested {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationRequested" }
}

/// Emitted when the provider resolves a request successfully
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub language_code: String,
    pub translated_chars: usize,
}

impl TranslationCompleted {
    pub fn new(language_code: String, translated_chars: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            language_code,
            translated_chars,
        }
    }
}

impl DomainEvent for TranslationCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationCompleted" }
}

/// Emitted when the provider call fails; the message is kept verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub language_code: String,
    pub message: String,
}

impl TranslationFailed {
    pub fn new(language_code: String, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            language_code,
            message,
        }
    }
}

impl DomainEvent for TranslationFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationFailed" }
}
