//! The interactive study chat.
//!
//! A fixed number of exchanges with the generative API, then multiple-choice
//! questions and an article derived from the transcript.
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: turn handling and study-aid generation

mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use config::{ChatArgs, ChatConfig, DEFAULT_TURNS};
pub use session::{StudyAids, StudySession};
