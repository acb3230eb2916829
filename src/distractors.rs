//! Plausible-but-wrong answer options.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::observability::DISTRACTORS_GENERATED;
use crate::thesaurus::Thesaurus;

/// Generic wrong answers mixed into every distractor pool.
pub const FILLER_DISTRACTORS: [&str; 3] = [
    "An unrelated response.",
    "A completely different answer.",
    "A vague statement.",
];

/// Joins the pool only when the answer itself is one of the fillers.
pub const SPARE_FILLER: &str = "An off-topic remark.";

/// Number of distractors attached to each question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Build up to [`DISTRACTOR_COUNT`] wrong answers for `correct_answer`.
///
/// Every whitespace-delimited word with synonyms yields one candidate: the
/// answer with that word's first occurrence swapped for a randomly chosen
/// synonym.  The fillers join the pool, the pool is shuffled and the first
/// three are kept.  Candidates identical to the answer or to each other are
/// dropped, so the result never contains the correct answer; a filler
/// dropped that way is replaced by [`SPARE_FILLER`].
pub fn generate_distractors<T, R>(correct_answer: &str, thesaurus: &T, rng: &mut R) -> Vec<String>
where
    T: Thesaurus + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<String> = Vec::new();
    for word in correct_answer.split_whitespace() {
        let synonyms = thesaurus.synonyms(word);
        let Some(synonym) = synonyms.choose(rng) else {
            continue;
        };
        let distractor = correct_answer.replacen(word, &substitute(word, synonym), 1);
        if distractor != correct_answer && !candidates.contains(&distractor) {
            DISTRACTORS_GENERATED.click();
            candidates.push(distractor);
        }
    }

    let mut skipped_filler = false;
    for filler in FILLER_DISTRACTORS {
        if filler == correct_answer {
            skipped_filler = true;
        } else if !candidates.iter().any(|c| c == filler) {
            candidates.push(filler.to_string());
        }
    }
    if skipped_filler && !candidates.iter().any(|c| c == SPARE_FILLER) {
        candidates.push(SPARE_FILLER.to_string());
    }

    candidates.shuffle(rng);
    candidates.truncate(DISTRACTOR_COUNT);
    candidates
}

/// Swap the alphanumeric core of `token` for `synonym`, keeping surrounding
/// punctuation and a leading capital.
fn substitute(token: &str, synonym: &str) -> String {
    let core = token.trim_matches(|c: char| !c.is_alphanumeric());
    if core.is_empty() {
        return synonym.to_string();
    }
    let synonym = if core.starts_with(char::is_uppercase) {
        capitalize(synonym)
    } else {
        synonym.to_string()
    };
    token.replacen(core, &synonym, 1)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
