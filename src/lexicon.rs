use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Parts of speech that are aggregated. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Adjective,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "verb" => Some(PartOfSpeech::Verb),
            "adjective" => Some(PartOfSpeech::Adjective),
            _ => None,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dictionary record produced by the offline enrichment step.
///
/// Field names of the enrichment output (`simplifiedWord`, `partOfSpeech`)
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub word: String,
    #[serde(alias = "simplifiedWord", default)]
    pub lemma: String,
    #[serde(alias = "partOfSpeech", alias = "partsOfSpeech", default)]
    pub parts_of_speech: Vec<String>,
}

impl LookupEntry {
    pub fn new(word: &str, lemma: &str, parts_of_speech: &[&str]) -> Self {
        LookupEntry {
            word: word.to_string(),
            lemma: lemma.to_string(),
            parts_of_speech: parts_of_speech.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Fallback for a word the dictionary service could not resolve.
    pub fn unresolved(word: &str) -> Self {
        LookupEntry {
            word: word.to_string(),
            lemma: word.to_string(),
            parts_of_speech: Vec::new(),
        }
    }
}

/// A word classified as verb or adjective, with the lemma it counts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub lemma: &'a str,
    pub part_of_speech: PartOfSpeech,
}

/// Read-only word → entry table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LookupEntry>,
}

impl Lexicon {
    /// Builds the table. When a word appears more than once the first entry wins.
    pub fn new(entries: Vec<LookupEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if map.contains_key(&entry.word) {
                log::debug!("ignoring duplicate dictionary entry for {:?}", entry.word);
                continue;
            }
            map.insert(entry.word.clone(), entry);
        }
        Lexicon { entries: map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///Classifies a context word by the first part of speech listed for it.
    ///
    ///Only the primary sense counts: `["noun", "verb"]` is neither verb nor adjective.
    ///Words missing from the table yield `None`. An empty lemma falls back to the word itself.
    /// # Example
    /// ```
    /// use gendered_language::{Lexicon, LookupEntry, PartOfSpeech};
    /// let lexicon = Lexicon::new(vec![LookupEntry::new("loved", "love", &["verb"])]);
    /// let found = lexicon.classify("loved").unwrap();
    /// assert_eq!(found.lemma, "love");
    /// assert_eq!(found.part_of_speech, PartOfSpeech::Verb);
    /// assert!(lexicon.classify("the").is_none());
    /// ```
    pub fn classify<'a>(&'a self, word: &'a str) -> Option<Classified<'a>> {
        let entry = self.entries.get(word)?;
        let part_of_speech = entry
            .parts_of_speech
            .first()
            .and_then(|label| PartOfSpeech::from_label(label))?;
        let lemma = if entry.lemma.is_empty() {
            log::debug!("no lemma for {word:?}, counting the word itself");
            word
        } else {
            entry.lemma.as_str()
        };
        Some(Classified {
            lemma,
            part_of_speech,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new(vec![
            LookupEntry::new("loved", "love", &["verb", "noun"]),
            LookupEntry::new("brave", "brave", &["adjective", "verb"]),
            LookupEntry::new("run", "run", &["noun", "verb"]),
            LookupEntry::new("ran", "", &["verb"]),
            LookupEntry::unresolved("xyzzy"),
            LookupEntry::new("loved", "lovely", &["adjective"]),
        ])
    }

    #[test]
    fn primary_sense_only() {
        let lex = lexicon();
        assert_eq!(
            lex.classify("loved").map(|c| c.part_of_speech),
            Some(PartOfSpeech::Verb)
        );
        assert_eq!(
            lex.classify("brave").map(|c| c.part_of_speech),
            Some(PartOfSpeech::Adjective)
        );
        assert!(lex.classify("run").is_none());
    }

    #[test]
    fn unknown_and_unresolved_words_are_skipped() {
        let lex = lexicon();
        assert!(lex.classify("castle").is_none());
        assert!(lex.classify("xyzzy").is_none());
    }

    #[test]
    fn empty_lemma_falls_back_to_word() {
        let lex = lexicon();
        assert_eq!(lex.classify("ran").map(|c| c.lemma), Some("ran"));
    }

    #[test]
    fn first_duplicate_wins() {
        let lex = lexicon();
        assert_eq!(lex.len(), 5);
        assert_eq!(lex.classify("loved").map(|c| c.lemma), Some("love"));
    }

    #[test]
    fn reads_enrichment_field_names() {
        let json = r#"[{"word":"loved","simplifiedWord":"love","partOfSpeech":["verb"]},
                       {"word":"odd","simplifiedWord":"odd"}]"#;
        let entries: Vec<LookupEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0], LookupEntry::new("loved", "love", &["verb"]));
        assert!(entries[1].parts_of_speech.is_empty());
    }
}
