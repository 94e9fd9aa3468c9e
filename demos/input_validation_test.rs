// demos/input_validation_test.rs
//
// VALIDATION TEST: Invalid Input Handling
//
// PURPOSE:
// - Prove the workflow gracefully rejects invalid operations
// - Case 1: Unknown language code → InvalidSelection, state unchanged
// - Case 2: Oversized document → FileTooLarge, prior input untouched
// - Case 3: Executable mime type → UnsupportedFile, prior input untouched
// - Case 4: translate() with no input → NoInputProvided, provider untouched
// - No panic in any case; the provider is never launched

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use bhashasetu::domain::{find_domain, find_language, InputSource, TranslationRequest};
use bhashasetu::events::EventBus;
use bhashasetu::providers::{ProviderError, ProviderResponse, TranslationProvider};
use bhashasetu::services::{AttachDocumentRequest, TranslationService};

/// Provider that must never be reached
struct RejectingProvider;

#[async_trait]
impl TranslationProvider for RejectingProvider {
    async fn translate(
        &self,
        _request: TranslationRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        panic!("Provider must not be invoked by any rejected operation");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== INPUT VALIDATION TEST ===");
    println!("Purpose: Validate graceful rejection of invalid workflow operations");
    println!();

    let service = TranslationService::new(
        find_language("hi").unwrap(),
        find_domain("academic").unwrap(),
        Arc::new(RejectingProvider),
        Arc::new(EventBus::new()),
    );

    // =========================================================================
    // CASE 1: Unknown language code
    // =========================================================================
    println!("[CASE 1] Selecting unknown language 'xx'...");

    let result = service.select_language("xx");
    assert!(result.is_err(), "unknown code must be rejected");
    assert_eq!(service.workflow_state().language.code, "hi");
    println!("[CASE 1] Rejected, selection unchanged: OK");

    // =========================================================================
    // CASE 2: Oversized document
    // =========================================================================
    println!("[CASE 2] Attaching an 11 MiB document...");

    service.set_text_input("keep me".to_string())?;
    let result = service.attach_document(AttachDocumentRequest {
        name: "big.pdf".to_string(),
        size_bytes: 11 * 1024 * 1024,
        mime_type: "application/pdf".to_string(),
        path: PathBuf::from("/tmp/big.pdf"),
    });
    assert!(result.is_err(), "oversized document must be rejected");
    assert_eq!(
        service.workflow_state().input,
        InputSource::Text {
            content: "keep me".to_string()
        }
    );
    println!("[CASE 2] Rejected, prior input untouched: OK");

    // =========================================================================
    // CASE 3: Executable mime type
    // =========================================================================
    println!("[CASE 3] Attaching an executable...");

    let result = service.attach_document(AttachDocumentRequest {
        name: "setup.exe".to_string(),
        size_bytes: 1024,
        mime_type: "application/x-msdownload".to_string(),
        path: PathBuf::from("/tmp/setup.exe"),
    });
    assert!(result.is_err(), "executable mime must be rejected");
    assert_eq!(
        service.workflow_state().input,
        InputSource::Text {
            content: "keep me".to_string()
        }
    );
    println!("[CASE 3] Rejected, prior input untouched: OK");

    // =========================================================================
    // CASE 4: translate() with no usable input
    // =========================================================================
    println!("[CASE 4] Translating with blank input...");

    service.set_text_input("   ".to_string())?;
    let result = service.translate().await;
    assert!(result.is_err(), "blank input must be rejected");
    assert!(!service.workflow_state().translating);
    println!("[CASE 4] Rejected without reaching the provider: OK");

    println!();
    println!("RESULT: PASS");
    Ok(())
}
