use serde::{Deserialize, Serialize};

/// A single song recommendation parsed from generated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongEntry {
    title: String,
    artist: String,
    link: String,
}

impl SongEntry {
    /// Build an entry, returning `None` if any field is blank after trimming
    pub fn new(title: &str, artist: &str, link: &str) -> Option<Self> {
        let (title, artist, link) = (title.trim(), artist.trim(), link.trim());
        if title.is_empty() || artist.is_empty() || link.is_empty() {
            return None;
        }

        Some(SongEntry {
            title: title.to_string(),
            artist: artist.to_string(),
            link: link.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

/// A rendered prompt ready to be sent to the text generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Upper bound on generated tokens; classification needs far fewer than a playlist
    pub max_new_tokens: u32,
}

/// The generator's textual output with any transport envelope already removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    pub text: String,
}

/// Request body for the hosted text-generation inference endpoint
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

/// Response envelope returned by the inference endpoint
///
/// The endpoint answers with a list of generations, but some deployments return a
/// bare object, and failures come back as `{"error": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceEnvelope {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

impl InferenceEnvelope {
    /// Unwrap the first generation's text, or the endpoint's error message
    pub fn into_text(self) -> Result<String, String> {
        match self {
            InferenceEnvelope::Batch(generations) => generations
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or_else(|| "empty generation list".to_string()),
            InferenceEnvelope::Single(generation) => Ok(generation.generated_text),
            InferenceEnvelope::Error { error } => Err(error),
        }
    }
}
