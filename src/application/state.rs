// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::TranslationService;

/// Application state managed by Tauri.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub translation_service: Arc<TranslationService>,
}
