use serde::Serialize;

use crate::models::SongEntry;

/// An ordered, non-empty list of recommendations; the first song is "now playing"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    songs: Vec<SongEntry>,
}

impl Playlist {
    /// Keep at most `target_length` entries in their original order.
    ///
    /// Returns `None` when there is nothing to keep: an empty playlist is a failure.
    pub fn from_entries(mut songs: Vec<SongEntry>, target_length: usize) -> Option<Self> {
        songs.truncate(target_length);
        if songs.is_empty() {
            return None;
        }
        Some(Playlist { songs })
    }

    pub fn songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn now_playing(&self) -> &SongEntry {
        &self.songs[0]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.songs.len()
    }
}
