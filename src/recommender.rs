use serde::Serialize;
use tracing::{info, warn};

use crate::client::TextGenerator;
use crate::config::Config;
use crate::error::{RecommendError, RejectionReason};
use crate::models::GenerationRequest;
use crate::mood::{ClassificationResult, MoodClassifier, MoodQuery, Preset};
use crate::playlist::{ExtractorConfig, Playlist, PlaylistExtractor};
use crate::prompts;
use crate::session::SessionContext;

/// Where a mood came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodInput {
    Preset(Preset),
    /// "Surprise Me": a random preset
    Surprise,
    FreeText(String),
}

/// A playlist together with the mood it was generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub mood: String,
    pub playlist: Playlist,
}

#[derive(Debug, Clone)]
pub struct RecommenderSettings {
    pub classifier_enabled: bool,
    /// Substitute this preset for non-emotional text instead of rejecting it
    pub fallback_mood: Option<Preset>,
    pub max_new_tokens: u32,
    pub extractor: ExtractorConfig,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            classifier_enabled: true,
            fallback_mood: None,
            max_new_tokens: 400,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl From<&Config> for RecommenderSettings {
    fn from(config: &Config) -> Self {
        Self {
            classifier_enabled: config.classifier_enabled,
            fallback_mood: config.fallback_mood,
            max_new_tokens: config.max_new_tokens,
            extractor: ExtractorConfig {
                target_length: config.target_length,
                search_url: config.search_url.clone(),
            },
        }
    }
}

/// Runs one interaction: resolve the mood, generate, extract
pub struct Recommender<G> {
    generator: G,
    classifier: Option<MoodClassifier>,
    fallback_mood: Option<Preset>,
    max_new_tokens: u32,
    extractor: PlaylistExtractor,
}

impl<G: TextGenerator> Recommender<G> {
    pub fn new(generator: G, settings: RecommenderSettings) -> Self {
        Self {
            generator,
            classifier: settings.classifier_enabled.then(MoodClassifier::new),
            fallback_mood: settings.fallback_mood,
            max_new_tokens: settings.max_new_tokens,
            extractor: PlaylistExtractor::new(settings.extractor),
        }
    }

    /// Produce a playlist for `input`, recording the outcome in `session`
    pub fn recommend(
        &self,
        session: &mut SessionContext,
        input: MoodInput,
    ) -> Result<Recommendation, RecommendError> {
        let result = self
            .resolve_mood(input)
            .map_err(RecommendError::Rejected)
            .and_then(|mood| {
                let playlist = self.generate_playlist(&mood)?;
                Ok(Recommendation { mood, playlist })
            });

        match &result {
            Ok(recommendation) => {
                session.record_success(&recommendation.mood, &recommendation.playlist)
            }
            Err(e) => {
                warn!(error = %e, "Recommendation failed");
                session.record_failure(e);
            }
        }

        result
    }

    /// Presets are trusted as-is; free text goes through the classifier when enabled
    pub fn resolve_mood(&self, input: MoodInput) -> Result<String, RejectionReason> {
        let raw = match input {
            MoodInput::Preset(preset) => return Ok(preset.label().to_string()),
            MoodInput::Surprise => return Ok(Preset::surprise().label().to_string()),
            MoodInput::FreeText(raw) => raw,
        };

        let Some(classifier) = &self.classifier else {
            return MoodQuery::parse(&raw).map(|query| query.normalized());
        };

        match classifier.classify(&self.generator, &raw) {
            ClassificationResult::Accepted(mood) => Ok(mood),
            ClassificationResult::Rejected(RejectionReason::NotEmotional) => {
                match self.fallback_mood {
                    Some(preset) => {
                        info!(fallback = %preset, "Text is not a mood, using fallback preset");
                        Ok(preset.label().to_string())
                    }
                    None => Err(RejectionReason::NotEmotional),
                }
            }
            ClassificationResult::Rejected(reason) => Err(reason),
        }
    }

    fn generate_playlist(&self, mood: &str) -> Result<Playlist, RecommendError> {
        let request = GenerationRequest {
            prompt: prompts::playlist_prompt(mood, self.extractor.config().target_length),
            max_new_tokens: self.max_new_tokens,
        };

        info!(mood, "Requesting playlist");
        let response = self.generator.generate(&request)?;
        let playlist = self.extractor.extract(&response.text)?;
        Ok(playlist)
    }
}
