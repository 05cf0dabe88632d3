use serde::Serialize;

use crate::corpus::Sentence;
use crate::gender::{Gender, GenderWordLists};

/// Words searched on either side of a gendered term.
pub const DEFAULT_SEARCH_DISTANCE: usize = 5;

/// One occurrence of a gendered term and the words around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderedHit {
    pub story: String,
    pub sentence_index: usize,
    pub word_index: usize,
    pub word: String,
    pub gender: Gender,
    /// Non-empty words within the search distance, in sentence order,
    /// without the term itself.
    pub context: Vec<String>,
}

/// Sentences with their gender counts filled in, and every hit found in them.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub sentences: Vec<Sentence>,
    pub hits: Vec<GenderedHit>,
}

///Get the first index of the window and guarantee that it is always >= 0
/// # Example
/// ```
/// use gendered_language::get_index_min;
/// assert_eq!(get_index_min(3, 5), 0);
/// assert_eq!(get_index_min(12, 5), 7);
/// ```
pub fn get_index_min(index: usize, distance: usize) -> usize {
    index.saturating_sub(distance)
}

///Get the end (exclusive) of the window and guarantee that it does not exceed the length of the sentence
/// # Example
/// ```
/// use gendered_language::get_index_max;
/// assert_eq!(get_index_max(1, 5, 4), 4);
/// assert_eq!(get_index_max(1, 5, 20), 7);
/// ```
pub fn get_index_max(index: usize, distance: usize, len: usize) -> usize {
    index.saturating_add(distance).saturating_add(1).min(len)
}

/// Words within `distance` of `index`, skipping the word itself and empty tokens.
pub fn context_window(words: &[String], index: usize, distance: usize) -> Vec<String> {
    let min = get_index_min(index, distance);
    let max = get_index_max(index, distance, words.len());
    let mut near = Vec::with_capacity(max.saturating_sub(min));
    for (number, value) in words.iter().enumerate().take(max).skip(min) {
        if number == index || value.is_empty() {
            continue;
        }
        near.push(value.clone());
    }
    near
}

///Scans every word of every sentence against the gender word lists.
///
///Each match increments the sentence's count for that gender and produces one
///[`GenderedHit`]. Hits are ordered by sentence, then word index, then gender
///(male, female, neutral). A word listed under several genders yields one hit per gender.
pub fn detect_gendered_terms(
    sentences: Vec<Sentence>,
    lists: &GenderWordLists,
    distance: usize,
) -> Detection {
    let mut hits = Vec::new();
    let mut counted = Vec::with_capacity(sentences.len());
    for mut sentence in sentences {
        for (i, word) in sentence.words.iter().enumerate() {
            for gender in lists.matches(word) {
                sentence.counts.increment(gender);
                hits.push(GenderedHit {
                    story: sentence.story.clone(),
                    sentence_index: sentence.index,
                    word_index: i,
                    word: word.clone(),
                    gender,
                    context: context_window(&sentence.words, i, distance),
                });
            }
        }
        counted.push(sentence);
    }
    log::debug!(
        "found {} gendered terms in {} sentences",
        hits.len(),
        counted.len()
    );
    Detection {
        sentences: counted,
        hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{StoryRecord, build_sentences};
    use crate::gender::GenderWordList;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn test_max_min_index() {
        assert_eq!(get_index_min(5, 5), 0);
        assert_eq!(get_index_max(5, 5, 9), 9);
        assert_eq!(get_index_min(0, 5), 0);
        assert_eq!(get_index_max(0, 5, 5), 5);
        assert_eq!(get_index_min(100, 5), 95);
        assert_eq!(get_index_max(100, 5, 103), 103);
        assert_eq!(get_index_max(100, 5, 200), 106);
    }

    #[test]
    fn window_size_follows_clamping() {
        let sentence: Vec<String> = (0..20).map(|n| format!("w{n}")).collect();
        let d = DEFAULT_SEARCH_DISTANCE;
        let len = sentence.len();
        for i in 0..len {
            let window = context_window(&sentence, i, d);
            assert_eq!(window.len(), i.min(d) + d.min(len - 1 - i), "index {i}");
            assert!(!window.contains(&sentence[i]));
        }
    }

    #[test]
    fn window_skips_empty_tokens() {
        let window = context_window(&words(" he  ran"), 1, 5);
        assert_eq!(window, vec!["ran"]);
    }

    #[test]
    fn king_loved_her() {
        let sentences = build_sentences(&StoryRecord::new("Tale", "The King loved her."));
        let detection = detect_gendered_terms(sentences, &GenderWordLists::default(), 5);
        assert_eq!(detection.hits.len(), 2);

        let king = &detection.hits[0];
        assert_eq!(king.word, "king");
        assert_eq!(king.gender, Gender::Male);
        assert_eq!(king.word_index, 1);
        assert_eq!(king.context, vec!["the", "loved", "her"]);

        let her = &detection.hits[1];
        assert_eq!(her.gender, Gender::Female);
        assert_eq!(her.word_index, 3);
        assert_eq!(her.context, vec!["the", "king", "loved"]);

        let counts = detection.sentences[0].counts;
        assert_eq!((counts.male, counts.female, counts.neutral), (1, 1, 0));
    }

    #[test]
    fn overlapping_lists_count_once_per_gender() {
        let lists = GenderWordLists::from_lists(vec![
            GenderWordList::new(Gender::Male, &["monarch"]),
            GenderWordList::new(Gender::Female, &["monarch"]),
        ]);
        let sentences = build_sentences(&StoryRecord::new("T", "The monarch slept."));
        let detection = detect_gendered_terms(sentences, &lists, 5);
        let genders: Vec<Gender> = detection.hits.iter().map(|h| h.gender).collect();
        assert_eq!(genders, vec![Gender::Male, Gender::Female]);
        assert_eq!(detection.sentences[0].counts.total(), 2);
    }

    #[test]
    fn hits_follow_word_order() {
        let sentences = build_sentences(&StoryRecord::new("T", "She told him they were late."));
        let detection = detect_gendered_terms(sentences, &GenderWordLists::default(), 5);
        let found: Vec<(usize, &str)> = detection
            .hits
            .iter()
            .map(|h| (h.word_index, h.word.as_str()))
            .collect();
        assert_eq!(found, vec![(0, "she"), (2, "him"), (3, "they")]);
    }
}
