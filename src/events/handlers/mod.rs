// events/handlers/mod.rs
//
// Event Handlers - INTERNAL MODULE
//
// Handlers use closure-based subscription via EventBus::subscribe.

pub mod audit_handler;

// Only export the registration function, not handler internals
pub use audit_handler::register_audit_handlers;
