//! OpenAI-compatible chat-completion client.
//!
//! One POST to `{base_url}/v1/chat/completions` per fallback invocation.
//! No retry, no backoff, no caching; each call is a billed request. The
//! client relies on the transport's default timeout behavior.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use concierge_core::config::ModelConfig;
use concierge_core::error::ConciergeError;

use crate::service::CompletionService;

/// Sampling temperature sent with every request. Fixed, not configurable.
pub const TEMPERATURE: f64 = 0.7;

/// Output cap in tokens sent with every request. Fixed, not configurable.
pub const MAX_OUTPUT_TOKENS: u32 = 150;

/// Completion service backed by a hosted OpenAI-compatible endpoint.
pub struct OpenAiCompletion {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompletion {
    /// Build a client from the model section of the configuration.
    ///
    /// The API key is read once from the environment variable named in the
    /// config. A missing key does not fail construction; it surfaces later
    /// as a caught completion error, matching how an invalid key behaves.
    pub fn from_config(config: &ModelConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "API key environment variable not set; fallback completions will fail"
            );
        }
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionService for OpenAiCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, ConciergeError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ConciergeError::Completion("API key not configured".to_string()))?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_text },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS,
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(model = %self.model, "Requesting fallback completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConciergeError::Completion(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ConciergeError::Completion(format!(
                "endpoint returned {}: {}",
                status, detail
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ConciergeError::Completion(format!("invalid response body: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ConciergeError::Completion("response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
