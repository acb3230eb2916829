// Public modules
pub mod article;
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod distractors;
pub mod error;
pub mod mcq;
pub mod observability;
pub mod render;
pub mod thesaurus;
pub mod transcript;
pub mod types;
pub mod utils;

// Re-exports
pub use article::{
    ARTICLE_FALLBACK, ArticleWriter, ExtractiveSummarizer, Summarizer, SummaryParams,
    adjust_tone, fact_check,
};
pub use client::{ChatBackend, GeminiClient, GeminiConfig};
pub use client_logger::ClientLogger;
pub use distractors::{SPARE_FILLER, generate_distractors};
pub use error::{Error, Result};
pub use mcq::{McqBatch, generate_explanation, generate_mcq_batch, generate_mcqs};
pub use observability::register_biometrics;
pub use render::{PlainTextRenderer, Renderer};
pub use thesaurus::{MemoryThesaurus, Thesaurus};
pub use transcript::Transcript;
pub use types::*;
