use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single piece of text inside a content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    /// The text of this part; absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// An ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// The parts making up this content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Body of a `generateContent` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateContentRequest {
    /// The conversation contents; this client only ever sends one.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a single user utterance.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(text)],
            }],
        }
    }
}

/// One generated alternative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// Generated content, if the candidate carries any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Body of a successful `generateContent` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateContentResponse {
    /// Generated alternatives, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Each missing level of the response is reported as a serialization
    /// error naming what was absent.
    pub fn first_text(&self) -> Result<&str> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| Error::serialization("response has no candidates", None))?;
        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| Error::serialization("first candidate has no content", None))?;
        let part = content
            .parts
            .first()
            .ok_or_else(|| Error::serialization("first candidate has no parts", None))?;
        part.text
            .as_deref()
            .ok_or_else(|| Error::serialization("first part has no text", None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_wire_shape() {
        let request = GenerateContentRequest::from_text("What is Rust?");
        assert_eq!(
            to_value(&request).unwrap(),
            json!({"contents": [{"parts": [{"text": "What is Rust?"}]}]})
        );
    }

    #[test]
    fn first_text_extracts_nested_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "A language."}, {"text": "ignored"}], "role": "model"},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "second"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 4}
        }))
        .unwrap();
        assert_eq!(response.first_text().unwrap(), "A language.");
    }

    #[test]
    fn missing_levels_are_errors() {
        let cases = [
            (json!({}), "no candidates"),
            (json!({"candidates": []}), "no candidates"),
            (json!({"candidates": [{}]}), "no content"),
            (json!({"candidates": [{"content": {}}]}), "no parts"),
            (json!({"candidates": [{"content": {"parts": [{}]}}]}), "no text"),
        ];
        for (value, expected) in cases {
            let response: GenerateContentResponse = serde_json::from_value(value).unwrap();
            let err = response.first_text().unwrap_err();
            assert!(err.is_serialization());
            assert!(err.to_string().contains(expected), "{err}");
        }
    }
}
