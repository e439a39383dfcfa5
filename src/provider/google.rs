// Google Translate web endpoint client

use super::TranslationProvider;
use crate::config::ProviderConfig;
use crate::error::{GatewayError, ProviderError, Result};
use crate::models::languages;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Client for the `translate_a/single` endpoint used by the public web widget.
///
/// Holds a pooled `reqwest::Client`, which is cheap to share across tasks.
pub struct GoogleTranslator {
    http_client: Client,
    endpoint: String,
    timeout_seconds: u64,
}

impl GoogleTranslator {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let http_client = builder
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), TRANSLATE_PATH),
            timeout_seconds: config.timeout_seconds,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.timeout_seconds)
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> std::result::Result<String, ProviderError> {
        let sl = languages::normalize(source, "source", true)?;
        let tl = languages::normalize(target, "target", false)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        debug!(
            "Calling Google translate: {} -> {} ({} chars)",
            languages::name_of(sl).unwrap_or(sl),
            languages::name_of(tl).unwrap_or(tl),
            text.chars().count()
        );

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", sl),
                ("tl", tl),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Google translate error: HTTP {} - {}", status, error_text);
            return Err(match status.as_u16() {
                429 => ProviderError::RateLimited(error_text),
                code @ 500..=599 => {
                    ProviderError::Unavailable(format!("HTTP {}: {}", code, error_text))
                }
                code => ProviderError::Upstream {
                    status: code,
                    message: error_text,
                },
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        parse_translation(&body)
    }
}

/// Extract the translated text from the nested-array payload.
///
/// The payload looks like `[[["hola","hello",null,null,10], ...], null, "en", ...]`;
/// each inner array is one sentence segment, translated text first.
fn parse_translation(body: &str) -> std::result::Result<String, ProviderError> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Response parsing error: {}", e)))?;

    let segments = parsed
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::InvalidResponse("missing translation segments".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        // Trailing transliteration segments carry a null translation
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    Ok(translated)
}
