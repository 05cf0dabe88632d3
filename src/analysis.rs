use std::collections::HashSet;

use log::{info, warn};
use serde::Serialize;

use crate::aggregate::{Association, aggregate_associations};
use crate::config::AnalysisOptions;
use crate::corpus::{Sentence, Story, StoryRecord, build_sentences};
use crate::detect::{GenderedHit, detect_gendered_terms};
use crate::gender::{GenderCounts, GenderWordLists};
use crate::lexicon::Lexicon;

/// Everything computed from one corpus. Built once and read by every view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analysis {
    pub stories: Vec<Story>,
    pub sentences: Vec<Sentence>,
    pub hits: Vec<GenderedHit>,
    pub associations: Vec<Association>,
}

impl Analysis {
    pub fn story(&self, title: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.title == title)
    }

    /// Counts over the whole corpus.
    pub fn totals(&self) -> GenderCounts {
        let mut totals = GenderCounts::default();
        for story in &self.stories {
            totals.merge(&story.counts);
        }
        totals
    }
}

///Runs the whole pipeline over an in-memory corpus: segmentation, tokenization,
///gendered-term detection and association counting.
///
///Stories are processed in input order. Associations are keyed by story title, so
///stories sharing a title are merged in the association counts.
/// # Example
/// ```
/// use gendered_language::{
///     AnalysisOptions, GenderWordLists, Lexicon, LookupEntry, StoryRecord, analyze_corpus,
/// };
/// let corpus = vec![StoryRecord::new("Tale", "The King loved her.")];
/// let lexicon = Lexicon::new(vec![LookupEntry::new("loved", "love", &["verb"])]);
/// let analysis = analyze_corpus(
///     &corpus,
///     &lexicon,
///     &GenderWordLists::default(),
///     &AnalysisOptions::default(),
/// );
/// assert_eq!(analysis.stories[0].counts.male, 1);
/// assert_eq!(analysis.associations.len(), 2);
/// ```
pub fn analyze_corpus(
    records: &[StoryRecord],
    lexicon: &Lexicon,
    lists: &GenderWordLists,
    options: &AnalysisOptions,
) -> Analysis {
    let mut seen_titles = HashSet::new();
    let mut stories = Vec::with_capacity(records.len());
    let mut sentences = Vec::new();
    let mut hits = Vec::new();

    for record in records {
        if !seen_titles.insert(record.title.as_str()) {
            warn!(
                "duplicate story title {:?}; its associations merge with the earlier story",
                record.title
            );
        }
        let detection =
            detect_gendered_terms(build_sentences(record), lists, options.search_distance);
        let mut counts = GenderCounts::default();
        for sentence in &detection.sentences {
            counts.merge(&sentence.counts);
        }
        stories.push(Story {
            title: record.title.clone(),
            text: record.text.clone(),
            sentence_count: detection.sentences.len(),
            counts,
        });
        sentences.extend(detection.sentences);
        hits.extend(detection.hits);
    }

    let associations = aggregate_associations(&hits, lexicon);
    info!(
        "analyzed {} stories: {} sentences, {} gendered terms, {} associations",
        stories.len(),
        sentences.len(),
        hits.len(),
        associations.len()
    );
    Analysis {
        stories,
        sentences,
        hits,
        associations,
    }
}
