//! Article generation: summarize the transcript, then adjust its tone.
//!
//! The summarization model sits behind the [`Summarizer`] trait.  It is
//! handed to an [`ArticleWriter`] once at startup; a model that failed to
//! load is kept as its error so every later article request reports it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::observability::{ARTICLE_FAILURES, ARTICLE_SUMMARIES};
use crate::types::Tone;
use crate::utils::text::{truncate_at_word, truncate_chars};

/// The summarizer never sees more than this many characters of transcript.
pub const MAX_INPUT_CHARS: usize = 1024;

/// Printed in place of the article when summarization fails.
pub const ARTICLE_FALLBACK: &str = "Could not generate article due to an error.";

const INACCURACY_WARNING: &str = "Warning: This content may contain inaccuracies.";
const NO_ISSUES: &str = "Fact-checked: No issues found.";

/// Output bounds for a summary, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    /// Shortest acceptable summary.
    pub min_length: usize,
    /// Longest acceptable summary.
    pub max_length: usize,
    /// Whether the model may sample; the article path always disables it.
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            min_length: 200,
            max_length: 300,
            do_sample: false,
        }
    }
}

/// A local summarization model.
pub trait Summarizer: Send + Sync {
    /// Condense `text` within the bounds of `params`.
    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String>;
}

/// Deterministic extractive summarizer.
///
/// Sentences are scored by the average corpus frequency of their content
/// words.  The best sentences are taken until `min_length` is reached, put
/// back in their original order and clipped at a word boundary to
/// `max_length`.  Text already shorter than `min_length` is returned whole.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    /// Creates the summarizer.
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        if params.max_length == 0 || params.min_length > params.max_length {
            return Err(Error::summarization(format!(
                "invalid summary bounds {}..={}",
                params.min_length, params.max_length
            )));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::summarization("nothing to summarize"));
        }
        if text.chars().count() <= params.min_length {
            return Ok(text.to_string());
        }

        let sentences = split_sentences(text);
        let frequencies = word_frequencies(text);
        let mut ranked: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| (idx, sentence_score(sentence, &frequencies)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut chosen = Vec::new();
        let mut length = 0;
        for (idx, _) in ranked {
            chosen.push(idx);
            length += sentences[idx].chars().count() + 1;
            if length > params.min_length {
                break;
            }
        }
        chosen.sort_unstable();

        let summary = chosen
            .iter()
            .map(|idx| sentences[*idx])
            .collect::<Vec<_>>()
            .join(" ");
        Ok(truncate_at_word(&summary, params.max_length).to_string())
    }
}

/// Produces articles from transcripts.
pub struct ArticleWriter {
    summarizer: std::result::Result<Box<dyn Summarizer>, Error>,
    params: SummaryParams,
}

impl ArticleWriter {
    /// Creates a writer around a loaded summarizer.
    pub fn new(summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            summarizer: Ok(summarizer),
            params: SummaryParams::default(),
        }
    }

    /// Creates a writer whose summarizer failed to load.  Every article
    /// request returns `error`.
    pub fn unavailable(error: Error) -> Self {
        Self {
            summarizer: Err(error),
            params: SummaryParams::default(),
        }
    }

    /// Overrides the summary bounds.
    pub fn with_params(mut self, params: SummaryParams) -> Self {
        self.params = params;
        self
    }

    /// Returns true if a summarizer is loaded.
    pub fn is_available(&self) -> bool {
        self.summarizer.is_ok()
    }

    /// Summarize the transcript and apply `tone` to the summary.
    pub fn generate_article(&self, transcript: &[String], tone: Tone) -> Result<String> {
        let input = summarizer_input(transcript);
        let result = match &self.summarizer {
            Ok(summarizer) => summarizer.summarize(&input, &self.params),
            Err(err) => Err(err.clone()),
        };
        match result {
            Ok(summary) => {
                ARTICLE_SUMMARIES.click();
                Ok(adjust_tone(&summary, tone))
            }
            Err(err) => {
                ARTICLE_FAILURES.click();
                Err(err)
            }
        }
    }
}

/// The transcript joined with single spaces and cut to [`MAX_INPUT_CHARS`].
pub fn summarizer_input(transcript: &[String]) -> String {
    let joined = transcript.join(" ");
    truncate_chars(&joined, MAX_INPUT_CHARS).to_string()
}

/// Rewrite stock phrases to match `tone`.  Every occurrence is replaced.
pub fn adjust_tone(article: &str, tone: Tone) -> String {
    match tone {
        Tone::Formal => article.replace("I think", "It is believed"),
        Tone::Casual => article.replace(
            "In recent discussions",
            "Hey, so here's what we've been chatting about",
        ),
        Tone::Neutral => article.to_string(),
    }
}

/// Flag content that mentions "incorrect", in any case.
pub fn fact_check(content: &str) -> &'static str {
    if content.to_lowercase().contains("incorrect") {
        INACCURACY_WARNING
    } else {
        NO_ISSUES
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn content_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 3)
        .map(str::to_lowercase)
}

fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for word in content_words(text) {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

fn sentence_score(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let mut total = 0usize;
    let mut count = 0usize;
    for word in content_words(sentence) {
        total += frequencies.get(&word).copied().unwrap_or(0);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
