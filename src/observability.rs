use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("chatquiz.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("chatquiz.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("chatquiz.client.request_duration_seconds");

pub(crate) static MCQ_ITEMS: Counter = Counter::new("chatquiz.mcq.items");
pub(crate) static MCQ_PAIRING_ABORTS: Counter = Counter::new("chatquiz.mcq.pairing_aborts");
pub(crate) static DISTRACTORS_GENERATED: Counter =
    Counter::new("chatquiz.distractors.generated");

pub(crate) static ARTICLE_SUMMARIES: Counter = Counter::new("chatquiz.article.summaries");
pub(crate) static ARTICLE_FAILURES: Counter = Counter::new("chatquiz.article.failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&MCQ_ITEMS);
    collector.register_counter(&MCQ_PAIRING_ABORTS);
    collector.register_counter(&DISTRACTORS_GENERATED);

    collector.register_counter(&ARTICLE_SUMMARIES);
    collector.register_counter(&ARTICLE_FAILURES);
}
