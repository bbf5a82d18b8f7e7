//! # AI Recommendation Adapter
//!
//! Thin client for the Gemini `generateContent` endpoint, covering the two
//! calls this crate makes:
//!
//! - [`GeminiClient::validate_credential`]: a minimal probe that proves the
//!   credential works (output capped to a few tokens).
//! - [`GeminiClient::recommend`]: one JSON round-trip asking the "nutrition
//!   coach" for a dish from the fixed catalog.
//!
//! # Failure layers
//! The adapter swallows transport, status, and parse failures on the
//! recommendation call and substitutes a uniformly random catalog item with a
//! generic apology reason. The only error it surfaces is a blank credential,
//! which callers treat as their own failure path (machine back to Idle plus a
//! user-facing alert). No retries, no client-side timeout.

pub mod wire;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::Catalog;
use wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ThinkingConfig};

/// Production endpoint for the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for both the validation probe and full recommendations; the two
/// differ only in generation config.
pub const MODEL: &str = "gemini-3-flash-preview";

/// Credentials shorter than this are rejected without a network call.
pub const MIN_CREDENTIAL_LEN: usize = 20;

/// Reason attached to the adapter-internal random fallback.
pub const FALLBACK_REASON: &str =
    "The AI coach is slow to respond right now, but this dish fits today's condition perfectly!";

/// The structured answer the model is instructed to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Display name of a catalog dish. Constrained by the prompt, not
    /// validated here; the selection machine does the final matching.
    pub menu_name: String,
    pub reason: String,
}

/// Credential validation failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CredentialError {
    /// Rejected before any network call.
    #[error("Credential is too short (minimum {MIN_CREDENTIAL_LEN} characters)")]
    TooShort,

    /// The probe call failed or returned nothing.
    #[error("Credential rejected: {0}")]
    Rejected(String),
}

/// Recommendation failures that reach the caller.
///
/// Everything past the credential check is handled inside the adapter by the
/// random fallback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecommendError {
    #[error("A credential is required for AI recommendations")]
    MissingCredential,
}

/// Client for the external generative-AI service.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    catalog: Catalog,
}

impl GeminiClient {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_base_url(catalog, DEFAULT_BASE_URL)
    }

    /// Points the client at a different endpoint. Used by tests.
    pub fn with_base_url(catalog: Catalog, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Checks that the credential actually works.
    ///
    /// Credentials shorter than [`MIN_CREDENTIAL_LEN`] are rejected without a
    /// network call. Otherwise a minimal probe request must yield a non-empty
    /// text response; any failure or empty answer is invalid.
    pub async fn validate_credential(&self, credential: &str) -> Result<(), CredentialError> {
        let credential = credential.trim();
        if credential.len() < MIN_CREDENTIAL_LEN {
            warn!("Credential rejected: too short");
            return Err(CredentialError::TooShort);
        }

        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user("Hi")],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(10),
                thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
                ..GenerationConfig::default()
            }),
        };

        match self.generate(credential, &request).await {
            Ok(_) => Ok(()),
            Err(e) => {
                info!("If the key looks correct, check that the Gemini API is enabled for the project");
                Err(CredentialError::Rejected(e))
            }
        }
    }

    /// Asks the coach for one dish from the catalog, given free-text context.
    ///
    /// On transport or parse failure this returns a uniformly random catalog
    /// item with a generic apology reason instead of an error.
    pub async fn recommend(
        &self,
        condition: &str,
        credential: &str,
    ) -> Result<Recommendation, RecommendError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(RecommendError::MissingCredential);
        }

        let system_instruction = format!(
            "You are the dedicated nutrition coach of the Green FC professional football team. \
             Recommend the single dish best suited to today's training situation and the \
             players' condition.\n\
             Rules:\n\
             1. You must pick exactly one of these dishes: {}.\n\
             2. Use an encouraging, professional tone.\n\
             3. Respond only with JSON of the form {{\"menuName\": \"...\", \"reason\": \"...\"}}.",
            self.catalog.names_joined()
        );

        let request = GenerateContentRequest {
            system_instruction: Some(Content::text(&system_instruction)),
            contents: vec![Content::user(&format!("Situation: {condition}"))],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(serde_json::json!({
                    "type": "OBJECT",
                    "properties": {
                        "menuName": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["menuName", "reason"]
                })),
                ..GenerationConfig::default()
            }),
        };

        let text = match self.generate(credential, &request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Recommendation call failed, serving a random pick");
                return Ok(self.fallback());
            }
        };

        match serde_json::from_str::<Recommendation>(&text) {
            Ok(recommendation) => Ok(recommendation),
            Err(e) => {
                warn!(error = %e, "Recommendation response was not the expected JSON");
                Ok(self.fallback())
            }
        }
    }

    fn fallback(&self) -> Recommendation {
        Recommendation {
            menu_name: self.catalog.random().name.clone(),
            reason: FALLBACK_REASON.to_string(),
        }
    }

    /// One `generateContent` round-trip, returning the first text part.
    async fn generate(
        &self,
        credential: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", credential)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    "Request timeout: the API took too long to respond".to_string()
                } else if e.is_connect() {
                    "Connection error: unable to reach the API".to_string()
                } else {
                    format!("Network error: {e}")
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => "Authentication failed: check your API key".to_string(),
                403 => "Access forbidden: is the API enabled for this key?".to_string(),
                429 => "Rate limited by the API".to_string(),
                code => format!("API returned status {code}"),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("Malformed API response: {e}"))?;

        match body.first_text() {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err("API response contained no text".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 (discard) has no listener, so calls fail fast without touching
    // the real service.
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

    fn client() -> GeminiClient {
        GeminiClient::with_base_url(Catalog::standard(), DEAD_ENDPOINT)
    }

    #[tokio::test]
    async fn short_credential_is_rejected_without_a_network_call() {
        let result = client().validate_credential("0123456789012345678").await;
        assert_eq!(result, Err(CredentialError::TooShort));

        // Trimming happens before the length check.
        let result = client().validate_credential("   padded-but-short   ").await;
        assert_eq!(result, Err(CredentialError::TooShort));
    }

    #[tokio::test]
    async fn unreachable_service_invalidates_the_credential() {
        let result = client().validate_credential(&"k".repeat(32)).await;
        assert!(matches!(result, Err(CredentialError::Rejected(_))));
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_a_random_pick() {
        let gemini = client();
        let recommendation = gemini
            .recommend("Everyone is exhausted today.", &"k".repeat(32))
            .await
            .expect("fallback should not raise");

        assert!(gemini.catalog().by_name(&recommendation.menu_name).is_some());
        assert!(!recommendation.reason.is_empty());
    }

    #[tokio::test]
    async fn blank_credential_is_the_only_surfaced_error() {
        let result = client().recommend("cold and rainy", "   ").await;
        assert_eq!(result, Err(RecommendError::MissingCredential));
    }

    #[test]
    fn recommendation_uses_the_wire_field_names() {
        let parsed: Recommendation =
            serde_json::from_str(r#"{"menuName":"Kimchi Jjigae","reason":"Warm and hearty."}"#)
                .unwrap();
        assert_eq!(parsed.menu_name, "Kimchi Jjigae");
        assert_eq!(parsed.reason, "Warm and hearty.");
    }
}
