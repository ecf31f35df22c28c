use serde_json::{Map, Value};

use super::config::ExtractorConfig;
use super::lines::parse_line;
use super::links::resolve_link;
use crate::models::SongEntry;

/// Result of reading text as a JSON song list
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum StructuredOutcome {
    Entries(Vec<SongEntry>),
    /// First record carried an `error` key
    Rejected(String),
    /// Looked like a song list but yielded no usable record
    Malformed,
    NotStructured,
}

/// Keys under which a wrapping object may carry the song list
const LIST_KEYS: [&str; 4] = ["songs", "playlist", "recommendations", "tracks"];

pub(super) fn parse_structured(text: &str, config: &ExtractorConfig) -> StructuredOutcome {
    let trimmed = text.trim();
    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) if opens_record_list(trimmed) => return StructuredOutcome::Malformed,
        Err(_) => return StructuredOutcome::NotStructured,
    };

    match value {
        Value::Array(records) => parse_records(&records, config),
        Value::Object(object) => {
            if let Some(message) = error_message(&object) {
                return StructuredOutcome::Rejected(message);
            }
            LIST_KEYS
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_array))
                .map(|records| parse_records(records, config))
                .unwrap_or(StructuredOutcome::Malformed)
        }
        _ => StructuredOutcome::NotStructured,
    }
}

/// Broken JSON counts as a song list only if it opens like one, not "[that]"
fn opens_record_list(text: &str) -> bool {
    text.starts_with('{')
        || text
            .strip_prefix('[')
            .is_some_and(|rest| rest.trim_start().starts_with(['{', '"']))
}

fn parse_records(records: &[Value], config: &ExtractorConfig) -> StructuredOutcome {
    if let Some(message) = records
        .first()
        .and_then(Value::as_object)
        .and_then(error_message)
    {
        return StructuredOutcome::Rejected(message);
    }

    let entries: Vec<SongEntry> = records
        .iter()
        .filter_map(|record| match record {
            Value::String(line) => parse_line(line, config),
            record => record_to_entry(record, config),
        })
        .collect();

    if entries.is_empty() {
        StructuredOutcome::Malformed
    } else {
        StructuredOutcome::Entries(entries)
    }
}

fn error_message(object: &Map<String, Value>) -> Option<String> {
    object.get("error").map(|error| match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

/// Turn one JSON record into a song, skipping it if title or artist is unusable
pub(super) fn record_to_entry(record: &Value, config: &ExtractorConfig) -> Option<SongEntry> {
    let object = record.as_object()?;

    let title = text_field(object, &["title", "song", "name"])?;
    let artist = text_field(object, &["artist", "artists", "by"])?;
    let link = text_field(object, &["link", "url"]);

    let link = resolve_link(link.as_deref(), &config.search_url, &title, &artist);
    SongEntry::new(&title, &artist, &link)
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let names: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            (!names.is_empty()).then(|| names.join(", "))
        }
        _ => None,
    })
}
