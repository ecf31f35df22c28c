use tracing::debug;

use super::lines::parse_lines;
use super::structured::{StructuredOutcome, parse_structured};
use super::{ExtractorConfig, Playlist};
use crate::error::{ExtractError, ExtractionFailure};
use crate::models::SongEntry;

/// Turns generated text into a bounded playlist
///
/// Strategies are tried in order and the first one that yields any song wins:
/// the whole response as a JSON song list, then the embedded `[...]` fragment,
/// then line-by-line layouts. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct PlaylistExtractor {
    config: ExtractorConfig,
}

impl PlaylistExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn extract(&self, raw: &str) -> Result<Playlist, ExtractError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ExtractionFailure::EmptyResponse.into());
        }

        let mut saw_malformed = false;

        let unfenced = strip_code_fence(text);
        match parse_structured(unfenced, &self.config) {
            StructuredOutcome::Entries(entries) => return self.finish(entries, "structured"),
            StructuredOutcome::Rejected(message) => {
                return Err(ExtractError::UpstreamRejected { message });
            }
            StructuredOutcome::Malformed => saw_malformed = true,
            StructuredOutcome::NotStructured => {}
        }

        if let Some(fragment) = embedded_list(text).filter(|f| f.trim() != unfenced.trim()) {
            match parse_structured(fragment, &self.config) {
                StructuredOutcome::Entries(entries) => {
                    return self.finish(entries, "embedded structured");
                }
                StructuredOutcome::Rejected(message) => {
                    return Err(ExtractError::UpstreamRejected { message });
                }
                StructuredOutcome::Malformed => saw_malformed = true,
                StructuredOutcome::NotStructured => {}
            }
        }

        let entries = parse_lines(text, &self.config);
        if !entries.is_empty() {
            return self.finish(entries, "line heuristics");
        }

        debug!(saw_malformed, "No songs could be extracted from response");
        if saw_malformed {
            Err(ExtractionFailure::MalformedStructuredPayload.into())
        } else {
            Err(ExtractionFailure::NoParseableLines.into())
        }
    }

    fn finish(&self, entries: Vec<SongEntry>, strategy: &str) -> Result<Playlist, ExtractError> {
        let parsed = entries.len();
        let playlist = Playlist::from_entries(entries, self.config.target_length)
            .ok_or(ExtractionFailure::NoParseableLines)?;

        debug!(
            strategy,
            parsed,
            kept = playlist.len(),
            "Extracted playlist from response"
        );
        Ok(playlist)
    }
}

/// Contents of the first markdown code fence, or the whole text if there is none
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };

    let after_open = &text[open + 3..];
    // Skip the info string, e.g. "json"
    let body_start = after_open.find('\n').map(|i| i + 1).unwrap_or(after_open.len());
    let body = &after_open[body_start..];

    match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    }
}

/// From the first `[` to the last `]`
fn embedded_list(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}
