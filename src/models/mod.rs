// Wire models for the /translate endpoint

pub mod languages;

use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
///
/// All three fields are required. Language codes are opaque here; only the
/// provider decides whether it understands them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}
