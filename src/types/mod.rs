// Public modules
pub mod complexity;
pub mod generate_content;
pub mod mcq_item;
pub mod tone;

// Re-exports
pub use complexity::Complexity;
pub use generate_content::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
};
pub use mcq_item::McqItem;
pub use tone::Tone;
