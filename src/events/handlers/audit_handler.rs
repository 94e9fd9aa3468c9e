// events/handlers/audit_handler.rs
//
// Audit handler: logs the lifecycle of every translation request so a
// session can be reconstructed from the log output alone.
//
// CRITICAL RULES:
// - Only observes; never mutates workflow state
// - Uses closure-based subscription (EventHandler is internal to bus)

use crate::events::types::{DocumentAttached, TranslationCompleted, TranslationFailed, TranslationRequested};
use crate::events::EventBus;

/// Registers the audit handlers with the event bus.
pub fn register_audit_handlers(bus: &EventBus) {
    bus.subscribe::<DocumentAttached, _>(|event| {
        log::info!(
            "document attached: '{}' ({} bytes, {})",
            event.name,
            event.size_bytes,
            event.mime_type
        );
    });

    bus.subscribe::<TranslationRequested, _>(|event| {
        log::info!(
            "translation requested: {} / {} ({})",
            event.language_code,
            event.domain_id,
            event.input_kind
        );
    });

    bus.subscribe::<TranslationCompleted, _>(|event| {
        log::info!(
            "translation completed: {} chars into '{}'",
            event.translated_chars,
            event.language_code
        );
    });

    bus.subscribe::<TranslationFailed, _>(|event| {
        log::warn!(
            "translation failed for '{}': {}",
            event.language_code,
            event.message
        );
    });

    println!("[AUDIT] Handlers registered");
}
