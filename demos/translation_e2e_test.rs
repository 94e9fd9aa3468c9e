// demos/translation_e2e_test.rs
//
// E2E VALIDATION TEST: Text Translation Happy Path
//
// PURPOSE:
// - Wire the full stack with a canned provider (no network)
// - Drive the exact user journey: select language, select domain, enter
//   text, translate
// - Prove the provider sees the acceptance-time snapshot and the outcome
//   lands in workflow state
//
// VALIDATION:
// - Provider receives { language: ta, domain: medical, input: Text("Hello") }
// - last_result is the provider's success, translating flag is down
// - Event log records the request and the completion

use std::sync::Arc;

use async_trait::async_trait;

use bhashasetu::domain::{find_domain, find_language, InputSource, TranslationOutcome, TranslationRequest};
use bhashasetu::events::{register_audit_handlers, EventBus};
use bhashasetu::providers::{ProviderError, ProviderResponse, TranslationProvider};
use bhashasetu::services::TranslationService;

/// Provider with a fixed answer; asserts on the snapshot it receives
struct CannedProvider;

#[async_trait]
impl TranslationProvider for CannedProvider {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        println!(
            "[PROVIDER] Received snapshot: language='{}', domain='{}', input='{}'",
            request.language.code,
            request.domain.id,
            request.input.kind()
        );

        assert_eq!(request.language.code, "ta");
        assert_eq!(request.domain.id, "medical");
        assert_eq!(
            request.input,
            InputSource::Text {
                content: "Hello".to_string()
            }
        );

        Ok(ProviderResponse {
            translated_text: "வணக்கம்".to_string(),
            detected_source_language: Some("en".to_string()),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== TRANSLATION E2E TEST ===");
    println!("Purpose: Validate the full select/enter/translate journey");
    println!();

    // =========================================================================
    // 1. BOOTSTRAP
    // =========================================================================
    println!("[SETUP] Wiring service with canned provider...");

    let event_bus = Arc::new(EventBus::new());
    register_audit_handlers(&event_bus);

    let service = TranslationService::new(
        find_language("hi").unwrap(),
        find_domain("academic").unwrap(),
        Arc::new(CannedProvider),
        event_bus.clone(),
    );

    // =========================================================================
    // 2. USER JOURNEY
    // =========================================================================
    println!("[JOURNEY] Selecting Tamil / Healthcare, entering text...");

    service.select_language("ta")?;
    service.select_domain("medical")?;
    service.set_text_input("Hello".to_string())?;

    let outcome = service.translate().await?;

    // =========================================================================
    // 3. VALIDATION
    // =========================================================================
    println!("[VALIDATE] Checking outcome and workflow state...");

    assert_eq!(
        outcome,
        TranslationOutcome::Success {
            translated_text: "வணக்கம்".to_string(),
            detected_source_language: Some("en".to_string()),
        }
    );

    let state = service.workflow_state();
    assert_eq!(state.last_result, Some(outcome));
    assert!(!state.translating);

    let log = event_bus.event_log();
    let types: Vec<&str> = log.iter().map(|e| e.event_type.as_str()).collect();
    assert!(types.contains(&"TranslationRequested"));
    assert!(types.contains(&"TranslationCompleted"));

    println!();
    println!("RESULT: PASS");
    Ok(())
}
