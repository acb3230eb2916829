//! Core study session.
//!
//! This module provides the `StudySession` struct which owns the transcript,
//! forwards each user line to the chat backend and turns the finished
//! conversation into study aids.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::article::{ARTICLE_FALLBACK, ArticleWriter, fact_check};
use crate::chat::config::ChatConfig;
use crate::client::ChatBackend;
use crate::error::Result;
use crate::mcq::generate_mcq_batch;
use crate::render::Renderer;
use crate::thesaurus::Thesaurus;
use crate::transcript::Transcript;
use crate::types::McqItem;

/// Questions and article derived from a transcript.
#[derive(Debug, Clone)]
pub struct StudyAids {
    /// At most three questions.
    pub mcqs: Vec<McqItem>,
    /// User entry that had no bot reply and stopped question building.
    pub unpaired_entry: Option<usize>,
    /// The article, or why it could not be written.
    pub article: Result<String>,
}

impl StudyAids {
    /// The article text, or the fixed fallback when summarization failed.
    pub fn article_text(&self) -> &str {
        match &self.article {
            Ok(article) => article,
            Err(_) => ARTICLE_FALLBACK,
        }
    }

    /// Fact-check verdict for [`StudyAids::article_text`].
    pub fn verdict(&self) -> &'static str {
        fact_check(self.article_text())
    }

    /// Print the questions, then the article with its verdict.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.print_info("\nGenerating MCQs based on the chat history:");
        if let Some(index) = self.unpaired_entry {
            renderer.print_error(&format!(
                "Error generating MCQs: entry {index} has no bot reply"
            ));
        }
        for (idx, item) in self.mcqs.iter().enumerate() {
            renderer.print_mcq(idx + 1, item);
        }

        renderer.print_info("Generating Article based on the chat history:");
        if let Err(err) = &self.article {
            renderer.print_error(&format!("Error generating article: {err}"));
        }
        renderer.print_article(self.article_text(), self.verdict());
    }
}

/// A chat session that records exchanges and derives study aids from them.
pub struct StudySession<B: ChatBackend> {
    backend: B,
    config: ChatConfig,
    transcript: Transcript,
    thesaurus: Box<dyn Thesaurus + Send + Sync>,
    articles: ArticleWriter,
    rng: StdRng,
}

impl<B: ChatBackend> StudySession<B> {
    /// Creates a session.  The RNG is seeded from `config.seed` when set.
    pub fn new(
        backend: B,
        config: ChatConfig,
        thesaurus: Box<dyn Thesaurus + Send + Sync>,
        articles: ArticleWriter,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            backend,
            config,
            transcript: Transcript::new(),
            thesaurus,
            articles,
            rng,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Exchanges left before the study aids.
    pub fn turns_remaining(&self) -> usize {
        self.config.turns.saturating_sub(self.transcript.turns())
    }

    /// Returns true once the configured number of exchanges is reached.
    pub fn is_finished(&self) -> bool {
        self.turns_remaining() == 0
    }

    /// Send one user line and record the exchange.
    ///
    /// A backend error does not end the conversation: its message is shown
    /// and recorded as the bot's turn.
    pub async fn exchange(&mut self, input: &str, renderer: &mut dyn Renderer) -> String {
        let reply = match self.backend.reply(input).await {
            Ok(text) => {
                renderer.print_reply(&text);
                text
            }
            Err(err) => {
                let message = err.to_string();
                renderer.print_error(&message);
                message
            }
        };
        self.transcript.push_turn(input, &reply);
        reply
    }

    /// Build the questions and the article from the transcript.
    pub fn study_aids(&mut self) -> StudyAids {
        let batch = generate_mcq_batch(
            self.transcript.entries(),
            self.config.complexity,
            &*self.thesaurus,
            &mut self.rng,
        );
        let article = self
            .articles
            .generate_article(self.transcript.entries(), self.config.tone);
        StudyAids {
            mcqs: batch.items,
            unpaired_entry: batch.unpaired_entry,
            article,
        }
    }

    /// Build the study aids and print them.
    pub fn present(&mut self, renderer: &mut dyn Renderer) -> StudyAids {
        let aids = self.study_aids();
        aids.render(renderer);
        aids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ExtractiveSummarizer, Summarizer, SummaryParams};
    use crate::error::Error;
    use crate::thesaurus::MemoryThesaurus;
    use crate::types::{Complexity, Tone};

    struct Echo;

    #[async_trait::async_trait]
    impl ChatBackend for Echo {
        async fn reply(&self, input: &str) -> Result<String> {
            if input == "fail" {
                Err(Error::configuration("API URL or API key not set."))
            } else {
                Ok(format!("You said {input}."))
            }
        }
    }

    struct Fixed(&'static str);

    impl Summarizer for Fixed {
        fn summarize(&self, _: &str, _: &SummaryParams) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Default)]
    struct Capture {
        lines: Vec<String>,
    }

    impl Renderer for Capture {
        fn print_reply(&mut self, text: &str) {
            self.lines.push(format!("reply:{text}"));
        }

        fn print_error(&mut self, error: &str) {
            self.lines.push(format!("error:{error}"));
        }

        fn print_info(&mut self, info: &str) {
            self.lines.push(format!("info:{info}"));
        }

        fn print_mcq(&mut self, number: usize, item: &McqItem) {
            self.lines.push(format!("mcq{number}:{}", item.correct_answer));
        }

        fn print_article(&mut self, article: &str, verdict: &str) {
            self.lines.push(format!("article:{article}"));
            self.lines.push(format!("verdict:{verdict}"));
        }
    }

    fn session(config: ChatConfig, articles: ArticleWriter) -> StudySession<Echo> {
        StudySession::new(
            Echo,
            config.with_seed(Some(1)),
            Box::new(MemoryThesaurus::new()),
            articles,
        )
    }

    #[tokio::test]
    async fn exchanges_fill_the_transcript() {
        let mut session = session(
            ChatConfig::new().with_turns(2),
            ArticleWriter::new(Box::new(ExtractiveSummarizer::new())),
        );
        let mut renderer = Capture::default();
        assert_eq!(session.turns_remaining(), 2);

        let reply = session.exchange("hi", &mut renderer).await;
        assert_eq!(reply, "You said hi.");
        assert!(!session.is_finished());
        session.exchange("fail", &mut renderer).await;
        assert!(session.is_finished());

        assert_eq!(
            session.transcript().entries(),
            &[
                "User: hi".to_string(),
                "Bot: You said hi.".to_string(),
                "User: fail".to_string(),
                "Bot: Error: API URL or API key not set.".to_string(),
            ]
        );
        assert_eq!(
            renderer.lines,
            vec![
                "reply:You said hi.".to_string(),
                "error:Error: API URL or API key not set.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn study_aids_follow_config() {
        let mut session = session(
            ChatConfig::new()
                .with_complexity(Complexity::Hard)
                .with_tone(Tone::Formal),
            ArticleWriter::new(Box::new(Fixed("I think it was incorrect."))),
        );
        let mut renderer = Capture::default();
        for input in ["a", "b", "c", "d"] {
            session.exchange(input, &mut renderer).await;
        }

        let aids = session.study_aids();
        assert_eq!(aids.mcqs.len(), 3);
        assert!(aids.mcqs[0].explanation.contains("comprehensively addressed"));
        assert_eq!(aids.article_text(), "It is believed it was incorrect.");
        assert_eq!(
            aids.verdict(),
            "Warning: This content may contain inaccuracies."
        );
    }

    #[tokio::test]
    async fn present_falls_back_when_summarizer_missing() {
        let mut session = session(
            ChatConfig::new(),
            ArticleWriter::unavailable(Error::summarization("model not loaded")),
        );
        let mut renderer = Capture::default();
        session.exchange("hi", &mut renderer).await;
        renderer.lines.clear();

        let aids = session.present(&mut renderer);
        assert!(aids.article.is_err());
        assert_eq!(
            renderer.lines,
            vec![
                "info:\nGenerating MCQs based on the chat history:".to_string(),
                "mcq1:You said hi.".to_string(),
                "info:Generating Article based on the chat history:".to_string(),
                "error:Error generating article: Summarization error: model not loaded"
                    .to_string(),
                "article:Could not generate article due to an error.".to_string(),
                "verdict:Fact-checked: No issues found.".to_string(),
            ]
        );
    }

    #[test]
    fn empty_session_still_presents() {
        let mut session = session(
            ChatConfig::new(),
            ArticleWriter::new(Box::new(ExtractiveSummarizer::new())),
        );
        let mut renderer = Capture::default();
        let aids = session.present(&mut renderer);
        assert!(aids.mcqs.is_empty());
        assert_eq!(aids.unpaired_entry, None);
        assert_eq!(aids.article_text(), ARTICLE_FALLBACK);
    }

    #[test]
    fn unpaired_entry_is_reported_before_questions() {
        let entries = vec![
            "User: first".to_string(),
            "Bot: one".to_string(),
            "User: dangling".to_string(),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let batch = generate_mcq_batch(
            &entries,
            Complexity::Normal,
            &MemoryThesaurus::new(),
            &mut rng,
        );
        let aids = StudyAids {
            mcqs: batch.items,
            unpaired_entry: batch.unpaired_entry,
            article: Ok("Short and clear.".to_string()),
        };
        let mut renderer = Capture::default();
        aids.render(&mut renderer);
        assert_eq!(
            renderer.lines,
            vec![
                "info:\nGenerating MCQs based on the chat history:".to_string(),
                "error:Error generating MCQs: entry 2 has no bot reply".to_string(),
                "mcq1:one".to_string(),
                "info:Generating Article based on the chat history:".to_string(),
                "article:Short and clear.".to_string(),
                "verdict:Fact-checked: No issues found.".to_string(),
            ]
        );
    }
}
