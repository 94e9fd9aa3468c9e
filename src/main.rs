// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

// Direct imports for the Tauri command handler macro
use bhashasetu::application::commands::*;
use bhashasetu::application::state::AppState;
use bhashasetu::config::AppConfig;
use bhashasetu::domain::{domains, find_domain, find_language, languages};
use bhashasetu::events::{register_audit_handlers, EventBus};
use bhashasetu::integrations::{GoogleTranslateClient, PlainTextExtractor};
use bhashasetu::providers::TranslationProvider;
use bhashasetu::services::TranslationService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. CONFIGURATION
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load settings, using defaults: {}", e);
        AppConfig::default()
    });

    // 2. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());

    // 3. INTEGRATIONS
    let extractor = Arc::new(PlainTextExtractor::new());
    let provider: Arc<dyn TranslationProvider> =
        Arc::new(GoogleTranslateClient::new(&config.provider).with_extractor(extractor));

    // 4. SERVICES
    // Unknown configured defaults fall back to the first catalog entry.
    let default_language =
        find_language(&config.default_language).unwrap_or_else(|| languages().remove(0));
    let default_domain =
        find_domain(&config.default_domain).unwrap_or_else(|| domains().remove(0));

    let translation_service = Arc::new(TranslationService::new(
        default_language,
        default_domain,
        provider,
        event_bus.clone(),
    ));

    // 5. EVENT HANDLER REGISTRATION (WIRING)
    register_audit_handlers(&event_bus);

    // 6. APPLICATION STATE
    let app_state = AppState {
        event_bus,
        translation_service,
    };

    // 7. TAURI BOOTSTRAP
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            list_languages,
            list_domains,
            get_workflow_state,
            select_language,
            select_domain,
            set_text_input,
            attach_document,
            clear_input,
            translate,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
