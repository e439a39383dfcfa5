//! The translation gateway: one pass-through call per request.
//!
//! `Gateway` owns the shared provider handle and applies the optional
//! per-call timeout. It performs no retries, batching or caching; each call
//! is independent of every other.

use crate::error::{ProviderError, Result};
use crate::metrics;
use crate::models::{TranslationRequest, TranslationResult};
use crate::provider::TranslationProvider;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn TranslationProvider>,
    timeout: Option<Duration>,
}

impl Gateway {
    /// `timeout_seconds = 0` leaves the provider call unbounded.
    pub fn new(provider: Arc<dyn TranslationProvider>, timeout_seconds: u64) -> Self {
        let timeout = (timeout_seconds > 0).then(|| Duration::from_secs(timeout_seconds));
        Self { provider, timeout }
    }

    pub fn provider(&self) -> &dyn TranslationProvider {
        self.provider.as_ref()
    }

    /// Forward one request to the provider and wrap its output verbatim.
    pub async fn translate(&self, req: &TranslationRequest) -> Result<TranslationResult> {
        let provider_name = self.provider.name();
        debug!(
            "Translating {} chars: {} -> {} via {}",
            req.text.chars().count(),
            req.source,
            req.target,
            provider_name
        );

        let start = Instant::now();
        let call = self.provider.translate(&req.text, &req.source, &req.target);
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(limit.as_secs())),
            },
            None => call.await,
        };
        let elapsed = start.elapsed().as_secs_f64();

        match outcome {
            Ok(translated_text) => {
                metrics::record_provider_call(provider_name, "success", elapsed);
                Ok(TranslationResult { translated_text })
            }
            Err(e) => {
                metrics::record_provider_call(provider_name, e.error_type(), elapsed);
                error!("Translation provider {} failed: {}", provider_name, e);
                Err(e.into())
            }
        }
    }
}
