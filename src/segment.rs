use std::sync::LazyLock;

use regex::Regex;

/// A terminator is a run of periods or a single `:`, `!` or `?`, plus any
/// closing quotes or brackets that directly follow it.
static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:\.+|[:!?])["'”’)\]}]*"#).expect("terminator pattern is valid")
});

///Splits the raw text of one story into sentences, keeping every terminator attached to the sentence it ends.
///A whitespace-only fragment after the last terminator is dropped. Text without any terminator
///(including empty text) comes back as a single sentence.
/// # Example
/// ```
/// use gendered_language::split_sentences;
/// let sentences = split_sentences("The King loved her. \"Go!\" she said");
/// assert_eq!(sentences, vec!["The King loved her.", " \"Go!\"", " she said"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in TERMINATOR.find_iter(text) {
        sentences.push(&text[start..m.end()]);
        start = m.end();
    }
    let rest = &text[start..];
    if !rest.trim().is_empty() {
        sentences.push(rest);
    }
    if sentences.is_empty() {
        sentences.push(text);
    }
    sentences
}

/// Relative position of the `index`-th (1-based) of `total` sentences.
pub fn position_ratio(index: usize, total: usize) -> f64 {
    index as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_each_terminator() {
        let s = split_sentences("One. Two! Three? Four: five");
        assert_eq!(s, vec!["One.", " Two!", " Three?", " Four:", " five"]);
    }

    #[test]
    fn trailing_empty_fragment_is_dropped() {
        assert_eq!(split_sentences("The King loved her."), vec!["The King loved her."]);
        assert_eq!(split_sentences("A. B.  \n"), vec!["A.", " B."]);
    }

    #[test]
    fn closing_characters_stay_with_sentence() {
        let s = split_sentences("He said \"stop.\" Then (she left.) [Done?] {ok!}’ end");
        assert_eq!(
            s,
            vec![
                "He said \"stop.\"",
                " Then (she left.)",
                " [Done?]",
                " {ok!}’",
                " end"
            ]
        );
    }

    #[test]
    fn ellipsis_is_one_terminator() {
        assert_eq!(split_sentences("Wait... what"), vec!["Wait...", " what"]);
    }

    #[test]
    fn degenerate_input_is_one_sentence() {
        assert_eq!(split_sentences("no terminator here"), vec!["no terminator here"]);
        assert_eq!(split_sentences(""), vec![""]);
        assert_eq!(split_sentences("   "), vec!["   "]);
    }

    #[test]
    fn concatenation_rebuilds_text() {
        let text = "Once upon a time. There was a queen! Was she kind? Yes";
        assert_eq!(split_sentences(text).concat(), text);
    }

    #[test]
    fn ratio_is_index_over_total() {
        assert_eq!(position_ratio(1, 4), 0.25);
        assert_eq!(position_ratio(4, 4), 1.0);
    }
}
