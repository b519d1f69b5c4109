//! Trigger expressions and the ordered rule table.
//!
//! Matching is deliberately plain substring containment on lower-cased
//! input. A keyword like "hours" inside an unrelated longer word still
//! triggers; that looseness is intentional.

use tracing::debug;

/// A boolean trigger expression over case-normalized substring tests.
///
/// The leaf forms cover the two shapes the rule tables actually use: a set
/// of alternatives (`Any`) and a set of required co-occurring terms (`All`).
/// The nested forms compose them for the handful of compound conditions,
/// e.g. ("late" AND "payment") OR "late fee".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Matches if any keyword occurs as a substring of the input.
    Any(Vec<String>),
    /// Matches if every keyword occurs as a substring of the input.
    All(Vec<String>),
    /// Matches if any sub-trigger matches.
    AnyOf(Vec<Trigger>),
    /// Matches if every sub-trigger matches.
    AllOf(Vec<Trigger>),
}

impl Trigger {
    /// Substring-OR over the given keywords.
    pub fn any<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Trigger::Any(keywords.into_iter().map(Into::into).collect())
    }

    /// Substring-AND over the given keywords.
    pub fn all<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Trigger::All(keywords.into_iter().map(Into::into).collect())
    }

    /// OR over sub-triggers.
    pub fn any_of<I>(triggers: I) -> Self
    where
        I: IntoIterator<Item = Trigger>,
    {
        Trigger::AnyOf(triggers.into_iter().collect())
    }

    /// AND over sub-triggers.
    pub fn all_of<I>(triggers: I) -> Self
    where
        I: IntoIterator<Item = Trigger>,
    {
        Trigger::AllOf(triggers.into_iter().collect())
    }

    /// Evaluate this trigger against already lower-cased input.
    ///
    /// Empty keyword or trigger lists never match: a rule must state at
    /// least one condition to fire.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::Any(keywords) => keywords.iter().any(|k| normalized.contains(k.as_str())),
            Trigger::All(keywords) => {
                !keywords.is_empty()
                    && keywords.iter().all(|k| normalized.contains(k.as_str()))
            }
            Trigger::AnyOf(triggers) => triggers.iter().any(|t| t.matches(normalized)),
            Trigger::AllOf(triggers) => {
                !triggers.is_empty() && triggers.iter().all(|t| t.matches(normalized))
            }
        }
    }
}

/// One entry of a rule table: a named trigger paired with its canned
/// response, returned verbatim on match.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Short identifier used in logs and match reporting.
    pub name: String,
    /// The trigger expression.
    pub trigger: Trigger,
    /// The fixed response returned when the trigger matches.
    pub response: String,
}

impl Rule {
    /// Create a new rule.
    pub fn new(name: impl Into<String>, trigger: Trigger, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trigger,
            response: response.into(),
        }
    }
}

/// An ordered collection of rules evaluated first-match-wins.
///
/// Declaration order is the precedence order. When two rules could both
/// match an input, the earlier one answers; there is no other overlap
/// resolution.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from rules in their declaration order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the first rule matching the given raw user text.
    ///
    /// The input is lower-cased here; triggers always see normalized text.
    /// Returns `None` when no rule matches, which is not an error: the
    /// caller routes that case to its fallback.
    pub fn first_match(&self, text: &str) -> Option<&Rule> {
        let normalized = text.to_lowercase();
        let hit = self.rules.iter().find(|r| r.trigger.matches(&normalized));
        if let Some(rule) = hit {
            debug!(rule = %rule.name, "Rule matched");
        }
        hit
    }
}
