//! The conversation log that study aids are derived from.

use serde::Serialize;

/// Prefix of every user entry.
pub const USER_PREFIX: &str = "User: ";

/// Prefix of every bot entry.
pub const BOT_PREFIX: &str = "Bot: ";

/// Ordered log of alternating `User: ` and `Bot: ` entries.
///
/// Entries can only be added a turn at a time, so the log always has an even
/// length and strictly alternates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one exchange.
    pub fn push_turn(&mut self, user: &str, bot: &str) {
        self.entries.push(format!("{USER_PREFIX}{user}"));
        self.entries.push(format!("{BOT_PREFIX}{bot}"));
    }

    /// All entries, prefixes included.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of completed exchanges.
    pub fn turns(&self) -> usize {
        self.entries.len() / 2
    }

    /// Number of entries (twice the number of turns).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
