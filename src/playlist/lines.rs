use std::sync::LazyLock;

use regex::Regex;

use super::config::ExtractorConfig;
use super::links::resolve_link;
use super::structured::record_to_entry;
use crate::models::SongEntry;

/// Longest title or artist accepted from a free-form line; longer fields are prose
const MAX_FIELD_CHARS: usize = 120;

/// Most words either side of a dash-separated line may have
const MAX_DASH_FIELD_WORDS: usize = 8;

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}[.)]\s*|[-*•·+]\s+|#{1,6}\s+)").expect("list marker regex is valid")
});

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]\((https?://[^)\s]+)\)").expect("markdown link regex is valid")
});

static QUOTED_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^["“'‘](?P<title>.+?)["”'’]\s*,?\s+(?i:by)\s+(?P<rest>.+)$"#)
        .expect("quoted title regex is valid")
});

static DASH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–—]\s+").expect("dash separator regex is valid"));

/// Fields split out of one line, before cleaning
struct RawFields<'a> {
    title: &'a str,
    artist: &'a str,
    link: Option<&'a str>,
}

/// Parse every line that matches a known song layout, in order
pub(super) fn parse_lines(text: &str, config: &ExtractorConfig) -> Vec<SongEntry> {
    text.lines()
        .filter_map(|line| parse_line(line, config))
        .collect()
}

/// Try each layout in priority order; a line matching none is skipped
pub(super) fn parse_line(line: &str, config: &ExtractorConfig) -> Option<SongEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("```") || line.ends_with(':') {
        return None;
    }

    // Opening bracket or inline body of a JSON list
    if line.starts_with('[') {
        return None;
    }

    // A lone JSON record, e.g. from a list cut off before its closing bracket
    if line.starts_with('{') {
        let record = line.trim_end_matches([',', ']']);
        return serde_json::from_str::<serde_json::Value>(record)
            .ok()
            .and_then(|value| record_to_entry(&value, config));
    }

    let line = strip_list_markers(line).replace("**", "");
    let line = MARKDOWN_LINK.replace_all(&line, "$1");

    let fields = split_pipe(&line)
        .or_else(|| split_quoted_by(&line))
        .or_else(|| split_dashes(&line))?;

    build_entry(fields, config)
}

fn strip_list_markers(line: &str) -> &str {
    let mut rest = line;
    // Nested markers like "- 1. " need two passes
    for _ in 0..2 {
        match LIST_MARKER.find(rest) {
            Some(marker) => rest = rest[marker.end()..].trim_start(),
            None => break,
        }
    }
    rest
}

fn split_pipe(line: &str) -> Option<RawFields<'_>> {
    let inner = line.trim().trim_matches('|');
    let fields: Vec<&str> = inner.split('|').map(str::trim).collect();
    if fields.len() != 3 {
        return None;
    }

    // Markdown table header and separator rows
    if fields[0].eq_ignore_ascii_case("title") && fields[1].eq_ignore_ascii_case("artist") {
        return None;
    }
    if fields
        .iter()
        .all(|f| f.chars().all(|c| matches!(c, '-' | ':' | ' ')))
    {
        return None;
    }

    Some(RawFields {
        title: fields[0],
        artist: fields[1],
        link: Some(fields[2]),
    })
}

fn split_quoted_by(line: &str) -> Option<RawFields<'_>> {
    let captures = QUOTED_BY.captures(line)?;
    let title = captures.name("title")?.as_str();
    let (artist, link) = split_trailing_link(captures.name("rest")?.as_str());

    Some(RawFields {
        title,
        artist,
        link,
    })
}

fn split_dashes(line: &str) -> Option<RawFields<'_>> {
    let mut parts: Vec<&str> = DASH_SEPARATOR.split(line).collect();

    let has_link = parts.len() > 2 && parts.last().is_some_and(|last| last.contains("http"));
    let link = if has_link { parts.pop() } else { None };

    if parts.len() < 2 {
        return None;
    }

    // "Title - Artist (https://...)" keeps the link inside the artist part
    let (artist, inline_link) = split_trailing_link(parts[1]);
    if reads_like_prose(parts[0], artist) {
        return None;
    }

    Some(RawFields {
        title: parts[0],
        artist,
        link: link.or(inline_link),
    })
}

/// A sentence split at a dash, e.g. "Here are some songs - enjoy them!"
fn reads_like_prose(title: &str, artist: &str) -> bool {
    let artist = artist.trim();
    let title_words = title.split_whitespace().count();
    let artist_words = artist.split_whitespace().count();

    title_words > MAX_DASH_FIELD_WORDS
        || artist_words > MAX_DASH_FIELD_WORDS
        || (artist.ends_with(['!', '?']) && artist_words > 1)
        || (artist.ends_with('.') && artist_words > 2)
}

/// Separate "Artist - https://..." or "Artist (https://...)" into its two halves
fn split_trailing_link(text: &str) -> (&str, Option<&str>) {
    match text.find("http") {
        Some(start) if start > 0 => {
            let artist = text[..start].trim_end_matches(|c: char| {
                c.is_whitespace() || matches!(c, '-' | '–' | '—' | '|' | '(' | '[' | '<' | ':' | ',')
            });
            (artist, Some(&text[start..]))
        }
        _ => (text, None),
    }
}

fn build_entry(fields: RawFields<'_>, config: &ExtractorConfig) -> Option<SongEntry> {
    let title = clean_field(fields.title);
    let artist = clean_field(fields.artist);
    if title.is_empty()
        || artist.is_empty()
        || title.chars().count() > MAX_FIELD_CHARS
        || artist.chars().count() > MAX_FIELD_CHARS
    {
        return None;
    }

    let link = resolve_link(fields.link, &config.search_url, title, artist);
    SongEntry::new(title, artist, &link)
}

fn clean_field(field: &str) -> &str {
    field
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '“' | '”' | '‘' | '’' | '*' | '_' | '`'))
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<(String, String, String)> {
        parse_line(line, &ExtractorConfig::default()).map(|e| {
            (
                e.title().to_string(),
                e.artist().to_string(),
                e.link().to_string(),
            )
        })
    }

    #[test]
    fn test_pipe_layout() {
        let (title, artist, link) = parse("1. Levitating | Dua Lipa | https://youtu.be/TUVcZfQe-Kw").unwrap();
        assert_eq!(title, "Levitating");
        assert_eq!(artist, "Dua Lipa");
        assert_eq!(link, "https://youtu.be/TUVcZfQe-Kw");

        // Markdown table rows
        assert!(parse("| Title | Artist | Link |").is_none());
        assert!(parse("|---|---|---|").is_none());
        assert!(parse("| Holocene | Bon Iver | |").is_some());

        // Only exactly three fields count as the pipe layout
        assert!(parse("a | b").is_none());
    }

    #[test]
    fn test_quoted_by_layout() {
        let (title, artist, _) = parse("2. \"Stand by Me\" by Ben E. King").unwrap();
        assert_eq!(title, "Stand by Me");
        assert_eq!(artist, "Ben E. King");

        let (title, artist, link) = parse("- “Don't Stop Me Now” BY Queen - https://youtu.be/HgzGwKwLmgM").unwrap();
        assert_eq!(title, "Don't Stop Me Now");
        assert_eq!(artist, "Queen");
        assert_eq!(link, "https://youtu.be/HgzGwKwLmgM");
    }

    #[test]
    fn test_dash_layout() {
        let (title, artist, _) = parse("3) Motion Sickness - Phoebe Bridgers").unwrap();
        assert_eq!(title, "Motion Sickness");
        assert_eq!(artist, "Phoebe Bridgers");

        let (title, artist, link) = parse("**Heat Waves** – Glass Animals – https://youtu.be/mRD0-GxqHVo").unwrap();
        assert_eq!(title, "Heat Waves");
        assert_eq!(artist, "Glass Animals");
        assert_eq!(link, "https://youtu.be/mRD0-GxqHVo");

        let (_, artist, link) = parse("Breathe Me - Sia [Listen](https://youtu.be/ghPcYqn0p4Y)").unwrap();
        assert_eq!(artist, "Sia");
        assert_eq!(link, "https://youtu.be/ghPcYqn0p4Y");
    }

    #[test]
    fn test_skips_prose_and_fences() {
        assert!(parse("Here are five songs for your mood:").is_none());
        assert!(parse("I hope these help you feel better!").is_none());
        assert!(parse("```json").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("[").is_none());
        assert!(parse(r#"["Golden Hour - JVKE", "Good Days - SZA"]"#).is_none());
    }

    #[test]
    fn test_dash_prose_is_skipped() {
        assert!(parse("Here are songs for you - enjoy them all!").is_none());
        assert!(parse("Music heals - don't you think?").is_none());
        assert!(parse("These picks lean mellow - they should fit a slow evening.").is_none());
        assert!(parse("1. I picked these because they all share the same warm tone - Various Artists").is_none());

        // Punctuation in a short artist name is not a sentence
        let (_, artist, _) = parse("Last Christmas - Wham!").unwrap();
        assert_eq!(artist, "Wham!");
    }

    #[test]
    fn test_lone_json_record() {
        let (title, artist, _) = parse(r#"{"title": "Sunday Best", "artist": "Surfaces", "link": ""},"#).unwrap();
        assert_eq!(title, "Sunday Best");
        assert_eq!(artist, "Surfaces");
    }
}
