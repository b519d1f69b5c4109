//! The dispatcher: rule table first, fallback on miss.
//!
//! Both assistant variants run this engine; they differ only in the rule
//! table and the [`FallbackBehavior`] they are built with.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use concierge_llm::service::DynCompletionService;
use concierge_llm::{OpenAiCompletion, PROPERTY_CONTEXT};
use concierge_rules::{property, storefront, RuleTable};

/// What answers when no rule matches.
pub enum FallbackBehavior {
    /// Delegate to a hosted completion model; any failure becomes the fixed
    /// apology string.
    Model {
        service: Box<dyn DynCompletionService>,
        system_prompt: String,
        apology: String,
    },
    /// Return a fixed clarification line.
    Canned(String),
}

/// Where a reply came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// A rule table hit.
    Rule,
    /// The hosted model's completion.
    Model,
    /// The model fallback failed; the fixed apology was returned.
    Apology,
    /// The static no-match clarification (storefront).
    Default,
}

/// A computed reply plus its provenance.
#[derive(Clone, Debug)]
pub struct EngineReply {
    pub text: String,
    pub source: ReplySource,
    /// Name of the matching rule, when `source` is `Rule`.
    pub rule: Option<String>,
}

/// Rule dispatcher with a fallback path.
pub struct ChatEngine {
    rules: RuleTable,
    fallback: FallbackBehavior,
}

impl ChatEngine {
    /// Build an engine from an explicit rule table and fallback.
    pub fn new(rules: RuleTable, fallback: FallbackBehavior) -> Self {
        Self { rules, fallback }
    }

    /// The property-leasing assistant: built-in property rules, model
    /// fallback seeded with the fixed property context.
    pub fn property(service: Box<dyn DynCompletionService>) -> Self {
        Self::new(
            property::rules(),
            FallbackBehavior::Model {
                service,
                system_prompt: PROPERTY_CONTEXT.to_string(),
                apology: property::APOLOGY.to_string(),
            },
        )
    }

    /// The property assistant wired to the hosted OpenAI-compatible client.
    pub fn property_with_client(config: &concierge_core::config::ModelConfig) -> Self {
        Self::property(Box::new(OpenAiCompletion::from_config(config)))
    }

    /// The storefront assistant: built-in storefront rules, static fallback.
    pub fn storefront() -> Self {
        Self::new(
            storefront::rules(),
            FallbackBehavior::Canned(storefront::DEFAULT_REPLY.to_string()),
        )
    }

    /// Compute the reply for one user message.
    ///
    /// The rule table sees lower-cased text; the fallback model receives
    /// the raw text untouched. A rule hit never consults the fallback.
    pub async fn respond(&self, text: &str) -> EngineReply {
        if let Some(rule) = self.rules.first_match(text) {
            return EngineReply {
                text: rule.response.clone(),
                source: ReplySource::Rule,
                rule: Some(rule.name.clone()),
            };
        }

        match &self.fallback {
            FallbackBehavior::Model {
                service,
                system_prompt,
                apology,
            } => match service.complete_boxed(system_prompt, text).await {
                Ok(completion) => {
                    debug!("Fallback completion returned");
                    EngineReply {
                        text: completion,
                        source: ReplySource::Model,
                        rule: None,
                    }
                }
                Err(e) => {
                    // One apology regardless of cause: network, auth, and
                    // quota failures all look the same to the user.
                    warn!(error = %e, "Fallback completion failed");
                    EngineReply {
                        text: apology.clone(),
                        source: ReplySource::Apology,
                        rule: None,
                    }
                }
            },
            FallbackBehavior::Canned(reply) => EngineReply {
                text: reply.clone(),
                source: ReplySource::Default,
                rule: None,
            },
        }
    }
}
