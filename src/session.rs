use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::error::RecommendError;
use crate::playlist::Playlist;

/// How many recent moods the session remembers
pub const PAST_MOODS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PastMood {
    pub mood: String,
    pub at: DateTime<Local>,
}

/// Per-user state carried between interactions.
///
/// Owned by the caller and handed to each recommendation call; the core keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current_mood: Option<String>,
    last_playlist: Option<Playlist>,
    last_error: Option<RecommendError>,
    past_moods: VecDeque<PastMood>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_mood(&self) -> Option<&str> {
        self.current_mood.as_deref()
    }

    pub fn last_playlist(&self) -> Option<&Playlist> {
        self.last_playlist.as_ref()
    }

    pub fn last_error(&self) -> Option<&RecommendError> {
        self.last_error.as_ref()
    }

    /// Most recent first
    pub fn past_moods(&self) -> impl Iterator<Item = &PastMood> {
        self.past_moods.iter()
    }

    pub(crate) fn record_success(&mut self, mood: &str, playlist: &Playlist) {
        self.current_mood = Some(mood.to_string());
        self.last_playlist = Some(playlist.clone());
        self.last_error = None;

        let repeated = self
            .past_moods
            .front()
            .is_some_and(|last| last.mood.eq_ignore_ascii_case(mood));
        if !repeated {
            self.past_moods.push_front(PastMood {
                mood: mood.to_string(),
                at: Local::now(),
            });
            self.past_moods.truncate(PAST_MOODS_LIMIT);
        }
    }

    /// A failed interaction leaves the previous mood and playlist on display
    pub(crate) fn record_failure(&mut self, error: &RecommendError) {
        self.last_error = Some(error.clone());
    }
}
