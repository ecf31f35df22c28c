use crate::config::{DEFAULT_SEARCH_URL, DEFAULT_TARGET_LENGTH};

/// Settings that shape how generated text becomes a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Maximum number of songs kept; extra parsed songs are dropped, never padded
    pub target_length: usize,
    /// Prefix for synthesized links; the encoded "title artist" query is appended
    pub search_url: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}
