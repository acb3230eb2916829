//! Interactive study chat.
//!
//! This binary chats with a generative model for a fixed number of turns,
//! then prints multiple-choice questions and a short article drawn from the
//! conversation.
//!
//! # Usage
//!
//! ```bash
//! export API_URL=https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent
//! export API_KEY=...
//!
//! # Ten turns, default explanations and tone
//! chatquiz
//!
//! # Shorter session with detailed explanations and a formal article
//! chatquiz --turns 3 --complexity hard --tone formal
//!
//! # Reproducible option order, custom synonyms, no colors
//! chatquiz --seed 42 --thesaurus words.yaml --no-color
//! ```
//!
//! Ctrl+C or Ctrl+D ends the conversation early; the study aids are still
//! produced from the turns so far.

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use chatquiz::chat::{ChatArgs, ChatConfig, PlainTextRenderer, Renderer, StudySession};
use chatquiz::{ArticleWriter, ExtractiveSummarizer, GeminiClient, GeminiConfig, MemoryThesaurus};

/// Main entry point for the chatquiz application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("chatquiz [OPTIONS]");
    let config = ChatConfig::from(args);
    let mut renderer = PlainTextRenderer::with_color(config.use_color);

    let client = GeminiClient::new(GeminiConfig::from_env())?;
    let thesaurus = match &config.thesaurus_path {
        Some(path) => MemoryThesaurus::from_file(path),
        None => MemoryThesaurus::builtin(),
    }
    .unwrap_or_else(|err| {
        renderer.print_error(&format!("{err}; continuing without synonyms"));
        MemoryThesaurus::new()
    });
    let articles = ArticleWriter::new(Box::new(ExtractiveSummarizer::new()));

    let mut session = StudySession::new(client, config, Box::new(thesaurus), articles);
    let mut rl = DefaultEditor::new()?;

    while !session.is_finished() {
        match rl.readline("User: ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                session.exchange(&line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    session.present(&mut renderer);
    Ok(())
}
