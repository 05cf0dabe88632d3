use serde::{Deserialize, Serialize};

use crate::gender::GenderCounts;
use crate::segment::{position_ratio, split_sentences};
use crate::tokenize::tokenize;

/// One story of the input corpus, as read from a CSV row or a text file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub title: String,
    #[serde(alias = "story")]
    pub text: String,
}

impl StoryRecord {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        StoryRecord {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A story with the gendered terms found across all of its sentences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub title: String,
    pub text: String,
    pub sentence_count: usize,
    pub counts: GenderCounts,
}

/// A normalized sentence. `story` names the story it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub story: String,
    /// 1-based position in the story.
    pub index: usize,
    pub text: String,
    /// `index / sentences in story`, in (0, 1].
    pub position_ratio: f64,
    pub words: Vec<String>,
    pub counts: GenderCounts,
}

///Segments and tokenizes one story. Counts start at zero; the detector fills them in.
pub fn build_sentences(record: &StoryRecord) -> Vec<Sentence> {
    let raw = split_sentences(&record.text);
    let total = raw.len();
    raw.into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            let (text, words) = tokenize(sentence);
            Sentence {
                story: record.title.clone(),
                index: i + 1,
                text,
                position_ratio: position_ratio(i + 1, total),
                words,
                counts: GenderCounts::default(),
            }
        })
        .collect()
}
