//! Synonym lookup for distractor generation.
//!
//! [`Thesaurus`] is the lexical database seam.  [`MemoryThesaurus`] is the
//! only implementation: a word list loaded from YAML, with a small built-in
//! list compiled into the crate.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const BUILTIN: &str = include_str!("thesaurus.yaml");

/// A source of synonyms.
pub trait Thesaurus {
    /// Candidate replacements for `word`, possibly empty.
    ///
    /// Unknown words yield an empty list; this is not an error.
    fn synonyms(&self, word: &str) -> Vec<String>;
}

/// An in-memory word -> synonyms map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThesaurus {
    words: HashMap<String, Vec<String>>,
}

impl MemoryThesaurus {
    /// An empty thesaurus; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The word list shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN)
    }

    /// Parse a YAML mapping of `word: [synonym, ...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_yaml::from_str(yaml)?;
        let mut thesaurus = Self::new();
        for (word, synonyms) in raw {
            thesaurus.insert(&word, synonyms);
        }
        Ok(thesaurus)
    }

    /// Load a YAML word list from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            Error::thesaurus(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Add synonyms for `word`, merging with any already present.
    pub fn insert(&mut self, word: &str, synonyms: impl IntoIterator<Item = String>) {
        let key = normalize(word);
        if key.is_empty() {
            return;
        }
        let entry = self.words.entry(key.clone()).or_default();
        for synonym in synonyms {
            let synonym = synonym.trim().to_string();
            if synonym.is_empty() || synonym.to_lowercase() == key || entry.contains(&synonym) {
                continue;
            }
            entry.push(synonym);
        }
    }

    /// Number of words with at least one synonym.
    pub fn len(&self) -> usize {
        self.words.values().filter(|s| !s.is_empty()).count()
    }

    /// Returns true if no word has a synonym.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Thesaurus for MemoryThesaurus {
    fn synonyms(&self, word: &str) -> Vec<String> {
        self.words
            .get(&normalize(word))
            .cloned()
            .unwrap_or_default()
    }
}

/// Lowercase and strip surrounding punctuation, so "Fast," looks up "fast".
fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_loads() {
        let thesaurus = MemoryThesaurus::builtin().unwrap();
        assert!(!thesaurus.is_empty());
        assert!(thesaurus.synonyms("fast").contains(&"quick".to_string()));
    }

    #[test]
    fn lookup_normalizes_case_and_punctuation() {
        let thesaurus = MemoryThesaurus::from_yaml_str("fast: [quick, rapid]").unwrap();
        assert_eq!(thesaurus.synonyms("Fast,"), vec!["quick", "rapid"]);
        assert_eq!(thesaurus.synonyms("\"FAST\""), vec!["quick", "rapid"]);
        assert!(thesaurus.synonyms("slow").is_empty());
        assert!(thesaurus.synonyms("...").is_empty());
    }

    #[test]
    fn word_is_never_its_own_synonym() {
        let mut thesaurus = MemoryThesaurus::new();
        thesaurus.insert("Run", vec!["run".to_string(), "sprint".to_string()]);
        thesaurus.insert("run", vec!["sprint".to_string(), "dash".to_string()]);
        assert_eq!(thesaurus.synonyms("run"), vec!["sprint", "dash"]);
    }

    #[test]
    fn bad_yaml_is_a_thesaurus_error() {
        let err = MemoryThesaurus::from_yaml_str("fast: quick: rapid").unwrap_err();
        assert!(matches!(err, Error::Thesaurus { .. }));
    }

    #[test]
    fn missing_file_is_a_thesaurus_error() {
        let err = MemoryThesaurus::from_file("/nonexistent/chatquiz/words.yaml").unwrap_err();
        assert!(matches!(err, Error::Thesaurus { .. }));
    }
}
