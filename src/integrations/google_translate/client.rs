// src/integrations/google_translate/client.rs
//
// Google Translate integration (unofficial free endpoint)
//
// ARCHITECTURE:
// - HTTP adapter behind the TranslationProvider port
// - Handles rate limiting, timeouts, response parsing
// - Document inputs are reduced to plain text through the extractor port
// - Maps external failures -> ProviderError (NO workflow mutation)
//
// For production volumes the official Cloud Translation API would replace
// the endpoint; the port contract stays the same.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderSettings;
use crate::domain::{InputSource, TranslationRequest};
use crate::providers::{
    DocumentTextExtractor, ExtractionError, ProviderError, ProviderResponse, TranslationProvider,
};

/// Rate limiter state
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new() -> Self {
        Self {
            last_request: Instant::now() - Duration::from_secs(60),
            min_interval: Duration::from_millis(1000), // 1 request per second
        }
    }

    fn wait_if_needed(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            std::thread::sleep(self.min_interval - elapsed);
        }
        self.last_request = Instant::now();
    }
}

/// Google Translate API Client
pub struct GoogleTranslateClient {
    base_url: String,
    http_client: Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    extractor: Option<Arc<dyn DocumentTextExtractor>>,
}

impl GoogleTranslateClient {
    /// Create a new client from provider settings
    pub fn new(settings: &ProviderSettings) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.endpoint.clone(),
            http_client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new())),
            extractor: None,
        }
    }

    /// Attach an extractor so document inputs can be translated
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentTextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Reduce the request input to the text the endpoint will receive
    async fn source_text(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        match &request.input {
            InputSource::Text { content } => Ok(content.clone()),
            InputSource::Document { document } => {
                let extractor = self.extractor.as_ref().ok_or_else(|| {
                    ProviderError::Extraction(ExtractionError::UnsupportedFormat {
                        mime_type: document.mime_type.clone(),
                    })
                })?;
                Ok(extractor.extract_text(document).await?)
            }
            // begin_translation never lets an empty input through
            InputSource::Empty => Ok(String::new()),
        }
    }

    /// Parse the endpoint's nested-array response.
    ///
    /// Shape: [[["<translated>", "<source>", ...], ...], _, "<detected>"]
    fn parse_response(json: &serde_json::Value, fallback: &str) -> ProviderResponse {
        let mut translated = String::new();

        if let Some(segments) = json.get(0).and_then(|v| v.as_array()) {
            for segment in segments {
                if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
                    translated.push_str(text);
                }
            }
        }

        let detected = json
            .get(2)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        if translated.is_empty() {
            // Endpoint answered but with nothing parseable; echo the source
            ProviderResponse {
                translated_text: fallback.to_string(),
                detected_source_language: None,
            }
        } else {
            ProviderResponse {
                translated_text: translated,
                detected_source_language: detected,
            }
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let text = self.source_text(&request).await?;

        // Rate limiting
        {
            let mut limiter = self.rate_limiter.lock().unwrap();
            limiter.wait_if_needed();
        }

        let url = format!(
            "{}?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            request.language.code,
            urlencoding::encode(&text)
        );

        log::debug!(
            "translating {} chars into '{}' ({})",
            text.chars().count(),
            request.language.code,
            request.domain.id
        );

        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Translation request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::QuotaExceeded(format!(
                "Translation endpoint throttled the request: {}",
                status
            )));
        }
        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(ProviderError::UnsupportedLanguage(format!(
                "Endpoint rejected target language '{}'",
                request.language.code
            )));
        }
        if !status.is_success() {
            return Err(ProviderError::Network(format!(
                "Translation endpoint returned status: {}",
                status
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            ProviderError::Network(format!("Failed to parse translation response: {}", e))
        })?;

        Ok(Self::parse_response(&json, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = GoogleTranslateClient::new(&ProviderSettings::default());
        assert_eq!(
            client.base_url,
            "https://translate.googleapis.com/translate_a/single"
        );
        assert!(client.extractor.is_none());
    }

    #[test]
    fn test_parse_response_joins_segments() {
        let payload = json!([
            [["नमस्ते ", "Hello ", null], ["दुनिया", "world", null]],
            null,
            "en"
        ]);

        let response = GoogleTranslateClient::parse_response(&payload, "Hello world");
        assert_eq!(response.translated_text, "नमस्ते दुनिया");
        assert_eq!(response.detected_source_language, Some("en".to_string()));
    }

    #[test]
    fn test_parse_response_falls_back_to_source() {
        let payload = json!([[], null, null]);

        let response = GoogleTranslateClient::parse_response(&payload, "Hello");
        assert_eq!(response.translated_text, "Hello");
        assert_eq!(response.detected_source_language, None);
    }

    // Note: Real endpoint tests would live in an integration suite and use
    // mocked responses or test against the live API.
}
