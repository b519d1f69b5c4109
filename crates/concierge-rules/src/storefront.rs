//! Built-in rule table for the e-commerce storefront assistant.
//!
//! Seven plain substring-OR rules. Unlike the property assistant there is
//! no model fallback; an unmatched message gets [`DEFAULT_REPLY`].

use crate::rule::{Rule, RuleTable, Trigger};

/// Fixed clarification line returned when no rule matches.
pub const DEFAULT_REPLY: &str = "I'm not sure I understand. Could you rephrase that or ask about returns, shipping, or cancellations?";

/// Build the storefront assistant's rule table.
pub fn rules() -> RuleTable {
    RuleTable::new(vec![
        Rule::new(
            "returns",
            Trigger::any(["return", "refund", "doesn't fit", "too small"]),
            "Sure! To start a return or refund, please visit your order history and select the item.",
        ),
        Rule::new(
            "shipping",
            Trigger::any(["shipping", "delivery", "did not receive"]),
            "Standard shipping takes 3\u{2013}5 business days. You\u{2019}ll receive tracking info once it ships.",
        ),
        Rule::new(
            "cancel",
            Trigger::any(["cancel"]),
            "To cancel an order, go to your orders page and click 'Cancel' next to the item.",
        ),
        Rule::new(
            "support_hours",
            Trigger::any(["hours", "open", "representative"]),
            "Our support team is available 24/7 via chat and email!",
        ),
        Rule::new(
            "human_agent",
            Trigger::any(["agent", "human"]),
            "I\u{2019}ll connect you with a human agent. Please hold on a moment...",
        ),
        Rule::new(
            "greeting",
            Trigger::any(["hello", "hi", "hey"]),
            "Hi there! \u{1f44b} How can I assist you today?",
        ),
        Rule::new(
            "thanks",
            Trigger::any(["thank", "thank you"]),
            "You're very welcome! Let me know if there's anything else I can help with.",
        ),
    ])
}
