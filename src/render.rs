use std::fmt::Write as _;

use crate::mood::Preset;
use crate::recommender::Recommendation;
use crate::session::SessionContext;

/// Song cards for the terminal; the first card is marked as now playing
pub fn render_cards(recommendation: &Recommendation) -> String {
    let mut out = String::new();
    let heading = format!("Recommended for {}", recommendation.mood);
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", "=".repeat(heading.chars().count()));

    let now_playing = recommendation.playlist.now_playing();
    for (i, song) in recommendation.playlist.songs().iter().enumerate() {
        let marker = if std::ptr::eq(song, now_playing) { "▶ Now playing" } else { "" };
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}. {} {}", i + 1, song.title(), marker);
        let _ = writeln!(out, "     {}", song.artist());
        let _ = writeln!(out, "     🎧 Listen: {}", song.link());
    }

    out
}

pub fn render_presets() -> String {
    Preset::ALL
        .iter()
        .map(|preset| format!("  {} {}", preset.icon(), preset.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_history(session: &SessionContext) -> String {
    let lines: Vec<String> = session
        .past_moods()
        .map(|past| format!("  - {} ({})", past.mood, past.at.format("%H:%M")))
        .collect();

    let mut out = if lines.is_empty() {
        "No moods yet.".to_string()
    } else {
        format!("Past Moods\n{}", lines.join("\n"))
    };

    if let Some(error) = session.last_error() {
        let _ = write!(out, "\nLast attempt failed: {error}");
    }
    out
}

/// The playlist currently on display, if any
pub fn render_last(session: &SessionContext) -> Option<String> {
    let mood = session.current_mood()?;
    let playlist = session.last_playlist()?;
    Some(render_cards(&Recommendation {
        mood: mood.to_string(),
        playlist: playlist.clone(),
    }))
}
