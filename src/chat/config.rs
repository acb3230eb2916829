//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling the session.  The API endpoint and key are not
//! here; they come from the environment through
//! [`GeminiConfig::from_env`](crate::GeminiConfig::from_env).

use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::types::{Complexity, Tone};

/// Default number of exchanges before study aids are generated.
pub const DEFAULT_TURNS: usize = 10;

/// Command-line arguments for the chatquiz tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Number of exchanges before the study aids.
    #[arrrg(optional, "Exchanges before study aids (default: 10)", "TURNS")]
    pub turns: Option<u32>,

    /// Explanation style for the questions.
    #[arrrg(optional, "Explanation style: easy, hard, normal", "LEVEL")]
    pub complexity: Option<String>,

    /// Tone of the generated article.
    #[arrrg(optional, "Article tone: formal, casual, neutral", "TONE")]
    pub tone: Option<String>,

    /// YAML synonym list replacing the built-in one.
    #[arrrg(optional, "YAML synonym file (default: built-in list)", "PATH")]
    pub thesaurus: Option<String>,

    /// Seed for option shuffling.
    #[arrrg(optional, "Seed for deterministic shuffling", "SEED")]
    pub seed: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Resolved configuration for a study session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Exchanges before the study aids are produced.
    pub turns: usize,

    /// Explanation style.
    pub complexity: Complexity,

    /// Article tone.
    pub tone: Tone,

    /// Whether to use ANSI colors in output.
    pub use_color: bool,

    /// Synonym file; `None` selects the built-in list.
    pub thesaurus_path: Option<PathBuf>,

    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Turns: 10
    /// - Complexity: normal
    /// - Tone: neutral
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            complexity: Complexity::Normal,
            tone: Tone::Neutral,
            use_color: true,
            thesaurus_path: None,
            seed: None,
        }
    }

    /// Sets the number of exchanges.
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Sets the explanation style.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets the article tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the synonym file.
    pub fn with_thesaurus_path(mut self, path: Option<PathBuf>) -> Self {
        self.thesaurus_path = path;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    /// Unrecognized complexity or tone values fall back to the defaults.
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            turns: args.turns.map(|t| t as usize).unwrap_or(DEFAULT_TURNS),
            complexity: args
                .complexity
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            tone: args.tone.and_then(|s| s.parse().ok()).unwrap_or_default(),
            use_color: !args.no_color,
            thesaurus_path: args.thesaurus.map(PathBuf::from),
            seed: args.seed,
        }
    }
}
