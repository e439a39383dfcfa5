//! Translation provider abstraction.
//!
//! The gateway never talks to a translation backend directly. It holds one
//! `Arc<dyn TranslationProvider>` built at start-up and shared by every
//! request, so implementations must be `Send + Sync` and safe to call
//! concurrently.
//!
//! # Providers
//!
//! - `google`: the public Google Translate web endpoint.

mod google;

pub use google::GoogleTranslator;

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{ProviderError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// A black-box translation capability.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short identifier used in logs, metrics and `/health`.
    fn name(&self) -> &str;

    /// Where the provider sends requests, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Translate `text` from `source` to `target`.
    ///
    /// A single attempt: implementations must not retry.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> std::result::Result<String, ProviderError>;
}

/// Build the provider selected in configuration.
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn TranslationProvider>> {
    match config.kind {
        ProviderKind::Google => Ok(Arc::new(GoogleTranslator::new(config)?)),
    }
}
