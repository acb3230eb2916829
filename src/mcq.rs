//! Multiple-choice questions built from a conversation transcript.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::distractors::generate_distractors;
use crate::observability::{MCQ_ITEMS, MCQ_PAIRING_ABORTS};
use crate::thesaurus::Thesaurus;
use crate::transcript::{BOT_PREFIX, USER_PREFIX};
use crate::types::{Complexity, McqItem};

/// At most this many questions are returned.
pub const MAX_MCQS: usize = 3;

/// Explanation text for `correct_answer` in the requested style.
pub fn generate_explanation(correct_answer: &str, complexity: Complexity) -> String {
    match complexity {
        Complexity::Easy => format!(
            "The correct answer is '{correct_answer}' because it is a simple response."
        ),
        Complexity::Hard => format!(
            "The correct response was '{correct_answer}' as it comprehensively addressed the user's query with detail."
        ),
        Complexity::Normal => format!("The correct answer is '{correct_answer}'."),
    }
}

/// Questions built from a transcript, plus where pairing stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqBatch {
    /// At most [`MAX_MCQS`] questions.
    pub items: Vec<McqItem>,
    /// Index of a user entry with no bot entry after it, if pairing stopped
    /// there.
    pub unpaired_entry: Option<usize>,
}

/// Turn consecutive (user, bot) entries into questions.
///
/// Entries are paired as 0&1, 2&3, ...; every occurrence of the `User: ` and
/// `Bot: ` prefixes is removed and the rest trimmed.  A user entry without a
/// following bot entry stops pairing; the questions already built are kept
/// and the entry's index is reported in [`McqBatch::unpaired_entry`].
/// Every pair is turned into a question before the list is cut to
/// [`MAX_MCQS`].
pub fn generate_mcq_batch<T, R>(
    transcript: &[String],
    complexity: Complexity,
    thesaurus: &T,
    rng: &mut R,
) -> McqBatch
where
    T: Thesaurus + ?Sized,
    R: Rng + ?Sized,
{
    let mut questions = Vec::new();
    let mut unpaired_entry = None;
    for index in (0..transcript.len()).step_by(2) {
        let Some(bot_entry) = transcript.get(index + 1) else {
            MCQ_PAIRING_ABORTS.click();
            unpaired_entry = Some(index);
            break;
        };
        let user_message = transcript[index].replace(USER_PREFIX, "");
        let bot_response = bot_entry.replace(BOT_PREFIX, "");
        questions.push(build_item(
            user_message.trim(),
            bot_response.trim(),
            complexity,
            thesaurus,
            rng,
        ));
    }
    questions.truncate(MAX_MCQS);
    MCQ_ITEMS.count(questions.len() as u64);
    McqBatch {
        items: questions,
        unpaired_entry,
    }
}

/// [`generate_mcq_batch`] without the pairing report.
pub fn generate_mcqs<T, R>(
    transcript: &[String],
    complexity: Complexity,
    thesaurus: &T,
    rng: &mut R,
) -> Vec<McqItem>
where
    T: Thesaurus + ?Sized,
    R: Rng + ?Sized,
{
    generate_mcq_batch(transcript, complexity, thesaurus, rng).items
}

fn build_item<T, R>(
    user_message: &str,
    correct_answer: &str,
    complexity: Complexity,
    thesaurus: &T,
    rng: &mut R,
) -> McqItem
where
    T: Thesaurus + ?Sized,
    R: Rng + ?Sized,
{
    let mut options = vec![correct_answer.to_string()];
    options.extend(generate_distractors(correct_answer, thesaurus, rng));
    options.shuffle(rng);
    McqItem {
        question: format!("What did the bot say in response to: '{user_message}'?"),
        options,
        correct_answer: correct_answer.to_string(),
        explanation: generate_explanation(correct_answer, complexity),
    }
}
