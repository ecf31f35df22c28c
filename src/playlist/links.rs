use urlencoding::encode;

/// Deterministic search link for a song the generator gave no usable link for
pub fn synthesize_link(search_url: &str, title: &str, artist: &str) -> String {
    format!("{}{}", search_url, encode(&format!("{title} {artist}")))
}

/// Pull a usable http(s) URL out of a generated link field.
///
/// Tolerates angle brackets, quotes, parentheses and trailing punctuation around the
/// URL. Anything that is not an absolute http(s) URL yields `None`.
pub fn clean_link(raw: &str) -> Option<String> {
    let start = raw.find("http")?;
    let candidate = raw[start..]
        .split_whitespace()
        .next()?
        .trim_end_matches(|c: char| matches!(c, ')' | ']' | '>' | '"' | '\'' | '.' | ',' | ';' | '`'));

    let rest = candidate
        .strip_prefix("https://")
        .or_else(|| candidate.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || !host.contains('.') {
        return None;
    }

    Some(candidate.to_string())
}

/// The cleaned link if there is one, otherwise a synthesized search link
pub fn resolve_link(raw: Option<&str>, search_url: &str, title: &str, artist: &str) -> String {
    raw.and_then(clean_link)
        .unwrap_or_else(|| synthesize_link(search_url, title, artist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEARCH_URL;

    #[test]
    fn test_synthesized_link_is_deterministic_and_encoded() {
        let first = synthesize_link(DEFAULT_SEARCH_URL, "Golden Hour", "JVKE");
        let second = synthesize_link(DEFAULT_SEARCH_URL, "Golden Hour", "JVKE");

        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://www.youtube.com/results?search_query=Golden%20Hour%20JVKE"
        );
        assert!(!first.contains(' '));

        let tricky = synthesize_link(DEFAULT_SEARCH_URL, "What's Up?", "4 Non Blondes & Co");
        assert!(tricky.ends_with("What%27s%20Up%3F%204%20Non%20Blondes%20%26%20Co"));
    }

    #[test]
    fn test_clean_link() {
        assert_eq!(
            clean_link("<https://youtu.be/yxW5yuzVi8w>").as_deref(),
            Some("https://youtu.be/yxW5yuzVi8w")
        );
        assert_eq!(
            clean_link("(https://www.youtube.com/watch?v=abc).").as_deref(),
            Some("https://www.youtube.com/watch?v=abc")
        );
        assert_eq!(clean_link("N/A"), None);
        assert_eq!(clean_link(""), None);
        assert_eq!(clean_link("https://"), None);
        assert_eq!(clean_link("https://localhost"), None);
    }

    #[test]
    fn test_resolve_link_falls_back() {
        assert_eq!(
            resolve_link(Some("https://youtu.be/x1"), DEFAULT_SEARCH_URL, "A", "B"),
            "https://youtu.be/x1"
        );
        assert_eq!(
            resolve_link(Some("not a link"), DEFAULT_SEARCH_URL, "A", "B"),
            synthesize_link(DEFAULT_SEARCH_URL, "A", "B")
        );
        assert_eq!(
            resolve_link(None, DEFAULT_SEARCH_URL, "A", "B"),
            synthesize_link(DEFAULT_SEARCH_URL, "A", "B")
        );
    }
}
