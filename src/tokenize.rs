/// Punctuation removed from a sentence before it is split into words.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '“', '”', '‘', '’', '—',
];

///Lowercases a sentence and removes punctuation, leaving letters, digits and spaces.
///Line breaks and tabs become spaces.
/// # Example
/// ```
/// use gendered_language::normalize_sentence;
/// assert_eq!(normalize_sentence("The King loved her."), "the king loved her");
/// ```
pub fn normalize_sentence(sentence: &str) -> String {
    sentence
        .to_lowercase()
        .replace(&['\n', '\r', '\t'][..], " ")
        .replace(STRIPPED_PUNCTUATION, "")
}

///Splits a normalized sentence on single spaces. Empty words from repeated spaces are kept so
///word indices line up with the sentence.
pub fn split_words(normalized: &str) -> Vec<String> {
    normalized.split(' ').map(String::from).collect()
}

/// Normalizes a raw sentence and returns `(normalized text, words)`.
pub fn tokenize(sentence: &str) -> (String, Vec<String>) {
    let text = normalize_sentence(sentence);
    let words = split_words(&text);
    (text, words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ascii_and_curly_punctuation() {
        let (text, words) = tokenize(" “Don’t—go,” said the Queen's (old) man!");
        assert_eq!(text, " dontgo said the queens old man");
        assert_eq!(
            words,
            vec!["", "dontgo", "said", "the", "queens", "old", "man"]
        );
    }

    #[test]
    fn keeps_empty_tokens_for_alignment() {
        let words = split_words("he  ran");
        assert_eq!(words, vec!["he", "", "ran"]);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize_sentence("He'd said: \"Run, Mother!\"");
        assert_eq!(normalize_sentence(&once), once);
        assert_eq!(split_words(&once).join(" "), once);
    }

    #[test]
    fn line_breaks_become_spaces() {
        assert_eq!(split_words(&normalize_sentence("her.\nThe")), vec!["her", "the"]);
    }
}
