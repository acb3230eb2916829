//! Console output for the chat and the study aids.
//!
//! This module provides a renderer trait and a plain-text implementation
//! with optional ANSI styling.

use std::io::{self, Stdout, Write};

use crate::types::McqItem;

/// ANSI escape code for bright blue text (used for bot replies).
const ANSI_BLUE: &str = "\x1b[94m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for green text (used for correct answers).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering session output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Capturing output in tests
pub trait Renderer: Send {
    /// Print a bot reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print one multiple-choice question; `number` starts at 1.
    fn print_mcq(&mut self, number: usize, item: &McqItem);

    /// Print the article followed by its fact-check verdict.
    fn print_article(&mut self, article: &str, verdict: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer<W: Write + Send = Stdout> {
    out: W,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer on stdout with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer on stdout with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            out: io::stdout(),
            use_color,
        }
    }
}

impl<W: Write + Send> PlainTextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn with_writer(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Consumes the renderer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    // Console write failures are not actionable here.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> Renderer for PlainTextRenderer<W> {
    fn print_reply(&mut self, text: &str) {
        let text = self.styled(ANSI_BLUE, text);
        self.line(&text);
    }

    fn print_error(&mut self, error: &str) {
        let text = self.styled(ANSI_RED, error);
        self.line(&text);
    }

    fn print_info(&mut self, info: &str) {
        self.line(info);
    }

    fn print_mcq(&mut self, number: usize, item: &McqItem) {
        self.line(&format!("Q{number}: {}", item.question));
        for option in &item.options {
            self.line(&format!(" - {option}"));
        }
        let answer = self.styled(ANSI_GREEN, &item.correct_answer);
        self.line(&format!("Correct Answer: {answer}"));
        self.line(&format!("Explanation: {}\n", item.explanation));
    }

    fn print_article(&mut self, article: &str, verdict: &str) {
        self.line(article);
        self.line(verdict);
    }
}
