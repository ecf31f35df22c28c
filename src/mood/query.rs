use crate::error::RejectionReason;

/// Longest mood the text box accepts
pub const MAX_MOOD_CHARS: usize = 120;

/// Helper trait for string formatting
pub trait ToTitleCase {
    fn to_title_case(&self) -> String;
}

impl ToTitleCase for str {
    fn to_title_case(&self) -> String {
        self.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A trimmed, length-bounded free-text mood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodQuery(String);

impl MoodQuery {
    /// Trim the input and cap it at [`MAX_MOOD_CHARS`] characters.
    ///
    /// Blank input is rejected here so no external call is ever made for it.
    pub fn parse(raw: &str) -> Result<Self, RejectionReason> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RejectionReason::EmptyInput);
        }

        let capped: String = trimmed.chars().take(MAX_MOOD_CHARS).collect();
        Ok(MoodQuery(capped.trim_end().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form of the mood: title-cased with whitespace runs collapsed
    pub fn normalized(&self) -> String {
        self.0.to_title_case()
    }
}
