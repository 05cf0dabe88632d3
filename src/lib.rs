//! # gendered_language
//!
//! Finds gendered pronouns and nouns in a corpus of stories and counts the
//! verbs and adjectives used around them.
//!
//! The pipeline runs once over an in-memory corpus:
//! sentences are split ([`split_sentences`]) and normalized ([`tokenize()`]),
//! gendered terms are detected with a window of surrounding words
//! ([`detect_gendered_terms`]), those words are classified with a
//! precomputed dictionary ([`Lexicon`]) and counted per story, lemma, gender
//! and part of speech ([`aggregate_associations`]). [`analyze_corpus`] runs
//! all of it; the [`views`] module derives what the charts display.

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod gender;
pub mod io;
pub mod lexicon;
pub mod report;
pub mod segment;
pub mod tokenize;
pub mod views;

pub use aggregate::{Association, AssociationCounter, aggregate_associations};
pub use analysis::{Analysis, analyze_corpus};
pub use config::{AnalysisOptions, DEFAULT_BINS, ExportFormat, MAX_BINS};
pub use corpus::{Sentence, Story, StoryRecord, build_sentences};
pub use detect::{
    DEFAULT_SEARCH_DISTANCE, Detection, GenderedHit, context_window, detect_gendered_terms,
    get_index_max, get_index_min,
};
pub use error::{Error, Result};
pub use gender::{Gender, GenderCounts, GenderWordList, GenderWordLists};
pub use io::{
    collect_files, csv_safe_cell, export_analysis, load_corpus, load_lexicon, load_word_lists,
    parse_lexicon, parse_word_lists, read_stories_csv,
};
pub use lexicon::{Classified, Lexicon, LookupEntry, PartOfSpeech};
pub use report::summary;
pub use segment::{position_ratio, split_sentences};
pub use tokenize::{normalize_sentence, split_words, tokenize};
pub use views::StoryFilter;
