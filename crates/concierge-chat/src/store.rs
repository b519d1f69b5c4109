//! The append-only conversation store.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Who produced a conversation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

/// One exchanged message. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
    /// Epoch seconds at append time.
    pub timestamp: i64,
}

/// Ordered sequence of conversation entries for one session.
///
/// Created empty at session start. `append` is the only way entries get in;
/// they are never edited or individually removed. `clear` empties the whole
/// store and exists for the storefront variant's explicit clear action.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<ConversationEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, stamped with the current time.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(ConversationEntry {
            speaker,
            text: text.into(),
            timestamp: Local::now().timestamp(),
        });
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    /// The most recent user/bot pair (or fewer entries early on).
    ///
    /// The property assistant's UI renders only this slice.
    pub fn last_exchange(&self) -> &[ConversationEntry] {
        let start = self.entries.len().saturating_sub(2);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry (storefront clear action).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
