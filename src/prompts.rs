/// Prompt asking the generator for a strict YES/NO verdict on whether the text is a mood
pub fn classification_prompt(mood: &str) -> String {
    format!(
        "[INST] You check whether a short text describes a human feeling or emotional state.\n\
         Answer with exactly one word: YES if it does, NO if it does not.\n\
         Questions, commands, random characters and unrelated statements are NO.\n\n\
         Text: \"{mood}\" [/INST]"
    )
}

/// Prompt asking the generator for `count` song recommendations as a JSON array
pub fn playlist_prompt(mood: &str, count: usize) -> String {
    format!(
        "[INST] You are a music curator. Recommend exactly {count} real, existing songs for \
         someone who feels \"{mood}\".\n\
         Reply with only a JSON array, no explanation and no code fences. Each element must be \
         an object with the keys \"title\", \"artist\" and \"link\", where \"link\" is a YouTube \
         URL for the song or an empty string if you are not sure of it.\n\
         Use a different artist for each song.\n\
         If the text is not a mood or feeling, reply with [{{\"error\": \"invalid mood\"}}] instead. [/INST]"
    )
}
