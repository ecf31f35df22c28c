#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::{ExtractError, ExtractionFailure};
    use crate::playlist::links::synthesize_link;

    fn extractor() -> PlaylistExtractor {
        PlaylistExtractor::new(ExtractorConfig::default())
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().iter().map(|s| s.title()).collect()
    }

    const FIVE_SONGS_JSON: &str = r#"[
        {"title": "Walking on Sunshine", "artist": "Katrina and the Waves", "link": "https://youtu.be/iPUmE-tne5U"},
        {"title": "Happy", "artist": "Pharrell Williams", "link": "https://youtu.be/ZbZSe6N_BXs"},
        {"title": "Good as Hell", "artist": "Lizzo", "link": ""},
        {"title": "Uptown Funk", "artist": "Mark Ronson", "link": "https://youtu.be/OPf0YbXqDm0"},
        {"title": "Shake It Off", "artist": "Taylor Swift", "link": "https://youtu.be/nfWlot6h_JM"}
    ]"#;

    #[test]
    fn test_structured_payload_kept_in_order() {
        let playlist = extractor().extract(FIVE_SONGS_JSON).unwrap();

        assert_eq!(
            titles(&playlist),
            vec!["Walking on Sunshine", "Happy", "Good as Hell", "Uptown Funk", "Shake It Off"]
        );
        assert_eq!(playlist.now_playing().artist(), "Katrina and the Waves");
        assert_eq!(playlist.songs()[1].link(), "https://youtu.be/ZbZSe6N_BXs");
        // Blank link is synthesized
        assert_eq!(
            playlist.songs()[2].link(),
            synthesize_link(&ExtractorConfig::default().search_url, "Good as Hell", "Lizzo")
        );
    }

    #[test]
    fn test_fenced_and_embedded_payloads() {
        let fenced = format!("```json\n{FIVE_SONGS_JSON}\n```");
        assert_eq!(extractor().extract(&fenced).unwrap().len(), 5);

        let chatty = format!("Of course! Here is your playlist:\n{FIVE_SONGS_JSON}\nEnjoy the vibes!");
        let playlist = extractor().extract(&chatty).unwrap();
        assert_eq!(playlist.len(), 5);
        assert_eq!(playlist.now_playing().title(), "Walking on Sunshine");
    }

    #[test]
    fn test_seven_lines_truncated_to_target() {
        let response = "1. Song One - Artist A\n\
                        2. Song Two - Artist B\n\
                        3. Song Three - Artist C\n\
                        4. Song Four - Artist D\n\
                        5. Song Five - Artist E\n\
                        6. Song Six - Artist F\n\
                        7. Song Seven - Artist G";

        let playlist = extractor().extract(response).unwrap();
        assert_eq!(
            titles(&playlist),
            vec!["Song One", "Song Two", "Song Three", "Song Four", "Song Five"]
        );

        let six = PlaylistExtractor::new(ExtractorConfig {
            target_length: 6,
            ..ExtractorConfig::default()
        });
        assert_eq!(six.extract(response).unwrap().len(), 6);
    }

    #[test]
    fn test_quoted_by_scenario() {
        let playlist = extractor()
            .extract("1. \"Golden Hour\" by JVKE\n2. \"Good Days\" by SZA")
            .unwrap();

        assert_eq!(playlist.len(), 2);
        let songs = playlist.songs();
        assert_eq!((songs[0].title(), songs[0].artist()), ("Golden Hour", "JVKE"));
        assert_eq!((songs[1].title(), songs[1].artist()), ("Good Days", "SZA"));

        let search_url = &ExtractorConfig::default().search_url;
        assert_eq!(songs[0].link(), synthesize_link(search_url, "Golden Hour", "JVKE"));
        assert_eq!(songs[1].link(), synthesize_link(search_url, "Good Days", "SZA"));
    }

    #[test]
    fn test_error_record_is_rejection() {
        let result = extractor().extract(r#"[{"error":"invalid mood"}]"#);
        assert_eq!(
            result,
            Err(ExtractError::UpstreamRejected {
                message: "invalid mood".to_string()
            })
        );

        let embedded = extractor().extract("Sorry.\n[{\"error\": \"invalid mood\"}]");
        assert!(matches!(embedded, Err(ExtractError::UpstreamRejected { .. })));
    }

    #[test]
    fn test_empty_and_unparseable_responses() {
        assert_eq!(
            extractor().extract(""),
            Err(ExtractError::Failed(ExtractionFailure::EmptyResponse))
        );
        assert_eq!(
            extractor().extract(" \n\n\t "),
            Err(ExtractError::Failed(ExtractionFailure::EmptyResponse))
        );
        assert_eq!(
            extractor().extract("I'm sorry, I can't help with that right now."),
            Err(ExtractError::Failed(ExtractionFailure::NoParseableLines))
        );
        assert_eq!(
            extractor().extract(r#"[{"title": "Cut off", "artist": "#),
            Err(ExtractError::Failed(ExtractionFailure::MalformedStructuredPayload))
        );
    }

    #[test]
    fn test_bracketed_prose_is_not_a_broken_payload() {
        assert_eq!(
            extractor().extract("I can't help with [that] request."),
            Err(ExtractError::Failed(ExtractionFailure::NoParseableLines))
        );
    }

    #[test]
    fn test_prose_preamble_never_plays_first() {
        let playlist = extractor()
            .extract("Here are songs for you - enjoy them all!\n1. Golden Hour - JVKE")
            .unwrap();

        assert_eq!(titles(&playlist), vec!["Golden Hour"]);
        assert_eq!(playlist.now_playing().artist(), "JVKE");
    }

    #[test]
    fn test_string_records_in_json_list() {
        let playlist = extractor()
            .extract(r#"["Golden Hour - JVKE", "Good Days - SZA"]"#)
            .unwrap();

        let songs = playlist.songs();
        assert_eq!(songs.len(), 2);
        assert_eq!((songs[0].title(), songs[0].artist()), ("Golden Hour", "JVKE"));
        assert_eq!((songs[1].title(), songs[1].artist()), ("Good Days", "SZA"));

        let search_url = &ExtractorConfig::default().search_url;
        assert_eq!(songs[1].link(), synthesize_link(search_url, "Good Days", "SZA"));
    }

    #[test]
    fn test_mixed_layouts_skip_noise() {
        let response = "Here are some picks for a rainy afternoon:\n\
                        \n\
                        - Holocene | Bon Iver | https://youtu.be/TWcyIpul8OE\n\
                        - \"Pink + White\" by Frank Ocean\n\
                        - this line is just commentary\n\
                        - Motion Sickness - Phoebe Bridgers - https://youtu.be/9sfYpolGCu8\n\
                        \n\
                        Hope you enjoy them!";

        let playlist = extractor().extract(response).unwrap();
        assert_eq!(titles(&playlist), vec!["Holocene", "Pink + White", "Motion Sickness"]);
        assert_eq!(playlist.songs()[2].link(), "https://youtu.be/9sfYpolGCu8");
    }

    #[test]
    fn test_truncated_json_salvaged_line_by_line() {
        let response = "[\n\
            {\"title\": \"Sunday Best\", \"artist\": \"Surfaces\", \"link\": \"\"},\n\
            {\"title\": \"Banana Pancakes\", \"artist\": \"Jack Johnson\", \"link\": \"\"},\n\
            {\"title\": \"Put Your Records On\", \"artist\": \"Corinne";

        let playlist = extractor().extract(response).unwrap();
        assert_eq!(titles(&playlist), vec!["Sunday Best", "Banana Pancakes"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let response = "1. \"Golden Hour\" by JVKE\n2. Good Days - SZA\n3. Holocene | Bon Iver | n/a";
        let first = extractor().extract(response).unwrap();
        let second = extractor().extract(response).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
