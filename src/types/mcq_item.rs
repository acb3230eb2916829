use serde::{Deserialize, Serialize};

/// A multiple-choice question derived from one user/bot exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct McqItem {
    /// The question text.
    pub question: String,

    /// The correct answer and its distractors, in shuffled order.
    pub options: Vec<String>,

    /// The option that answers the question.
    pub correct_answer: String,

    /// Why the correct answer is correct.
    pub explanation: String,
}

impl McqItem {
    /// Position of the correct answer within `options`.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn serializes_with_field_names() {
        let item = McqItem {
            question: "What did the bot say in response to: 'hi'?".to_string(),
            options: vec!["A".to_string(), "hello".to_string()],
            correct_answer: "hello".to_string(),
            explanation: "The correct answer is 'hello'.".to_string(),
        };
        assert_eq!(item.correct_index(), Some(1));
        assert_eq!(
            to_value(&item).unwrap(),
            json!({
                "question": "What did the bot say in response to: 'hi'?",
                "options": ["A", "hello"],
                "correct_answer": "hello",
                "explanation": "The correct answer is 'hello'."
            })
        );
    }
}
