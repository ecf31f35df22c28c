use tracing::{debug, warn};

use super::query::MoodQuery;
use crate::client::TextGenerator;
use crate::error::RejectionReason;
use crate::models::GenerationRequest;
use crate::prompts;

/// Token budget for the one-word verdict
const CLASSIFICATION_MAX_TOKENS: u32 = 5;

/// Verdict on a free-text mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    Accepted(String),
    Rejected(RejectionReason),
}

/// What the generator's verdict text amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Affirmative,
    Other,
    Missing,
}

/// Decides whether free text plausibly expresses a human emotional state
#[derive(Debug, Default, Clone)]
pub struct MoodClassifier;

impl MoodClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `raw` with at most one call to `generator`.
    ///
    /// Blank input is rejected before anything is sent. Only an exact `YES` is accepted.
    pub fn classify<G>(&self, generator: &G, raw: &str) -> ClassificationResult
    where
        G: TextGenerator + ?Sized,
    {
        let query = match MoodQuery::parse(raw) {
            Ok(query) => query,
            Err(reason) => return ClassificationResult::Rejected(reason),
        };

        let request = GenerationRequest {
            prompt: prompts::classification_prompt(query.as_str()),
            max_new_tokens: CLASSIFICATION_MAX_TOKENS,
        };

        let response = match generator.generate(&request) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Mood classification call failed");
                return ClassificationResult::Rejected(RejectionReason::UpstreamFailure);
            }
        };

        let signal = interpret_signal(&response.text);
        debug!(mood = %query.as_str(), reply = %response.text.trim(), ?signal, "Classified mood");

        match signal {
            Signal::Affirmative => ClassificationResult::Accepted(query.normalized()),
            Signal::Other => ClassificationResult::Rejected(RejectionReason::NotEmotional),
            Signal::Missing => ClassificationResult::Rejected(RejectionReason::Unparseable),
        }
    }
}

fn interpret_signal(reply: &str) -> Signal {
    let cleaned = reply.trim().trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '.' | '!' | '`' | '*')
    });

    if cleaned.eq_ignore_ascii_case("yes") {
        return Signal::Affirmative;
    }

    let has_verdict_word = cleaned
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case("yes") || word.eq_ignore_ascii_case("no"));

    if has_verdict_word {
        Signal::Other
    } else {
        Signal::Missing
    }
}
