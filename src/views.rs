//! Read-only views over an [`Analysis`](crate::Analysis).
//!
//! Every chart reads the same collections and re-filters them whenever the
//! selected story changes, so these functions only borrow their inputs and
//! return fresh values.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::aggregate::Association;
use crate::config::MAX_BINS;
use crate::corpus::{Sentence, Story};
use crate::gender::{Gender, GenderCounts};
use crate::lexicon::PartOfSpeech;

/// Label of the synthetic entry that stands for the whole corpus.
pub const ALL_STORIES: &str = "All Stories";

/// Which part of the corpus a view covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StoryFilter {
    All,
    Title(String),
}

impl StoryFilter {
    pub fn includes(&self, story: &str) -> bool {
        match self {
            StoryFilter::All => true,
            StoryFilter::Title(title) => title == story,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StoryFilter::All => ALL_STORIES,
            StoryFilter::Title(title) => title,
        }
    }
}

impl From<Option<String>> for StoryFilter {
    fn from(title: Option<String>) -> Self {
        match title {
            Some(title) => StoryFilter::Title(title),
            None => StoryFilter::All,
        }
    }
}

/// Sum of the sentence counts covered by `filter`.
pub fn gender_totals(sentences: &[Sentence], filter: &StoryFilter) -> GenderCounts {
    let mut totals = GenderCounts::default();
    for sentence in sentences.iter().filter(|s| filter.includes(&s.story)) {
        totals.merge(&sentence.counts);
    }
    totals
}

/// Gender counts of the sentences around one relative position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionBin {
    pub center: f64,
    pub counts: GenderCounts,
}

///Groups sentence counts by relative position in their story.
///
///Returns `bins + 2` bins: a zero bin at 0, `bins` bins centered on `k / (bins + 1)` and a
///zero bin at 1. A sentence belongs to the bin whose half-open interval `(c - w/2, c + w/2]`
///contains its position ratio; the first and last interior bins stretch to 0 and 1.
///`bins` is capped at [`MAX_BINS`].
pub fn position_bins(
    sentences: &[Sentence],
    filter: &StoryFilter,
    bins: usize,
) -> Vec<PositionBin> {
    let bins = bins.min(MAX_BINS);
    let mut out = Vec::with_capacity(bins.saturating_add(2));
    out.push(PositionBin {
        center: 0.0,
        counts: GenderCounts::default(),
    });
    if bins > 0 {
        let width = 1.0 / (bins + 1) as f64;
        for k in 1..=bins {
            out.push(PositionBin {
                center: k as f64 * width,
                counts: GenderCounts::default(),
            });
        }
        for sentence in sentences.iter().filter(|s| filter.includes(&s.story)) {
            let k = bin_for(sentence.position_ratio, width, bins);
            out[k].counts.merge(&sentence.counts);
        }
    }
    out.push(PositionBin {
        center: 1.0,
        counts: GenderCounts::default(),
    });
    out
}

// 1-based interior bin for a ratio in (0, 1].
fn bin_for(ratio: f64, width: f64, bins: usize) -> usize {
    let k = (ratio / width - 0.5).ceil();
    if k < 1.0 {
        1
    } else if k > bins as f64 {
        bins
    } else {
        k as usize
    }
}

/// Per-gender counts of one part of speech and their shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderRatio {
    pub part_of_speech: PartOfSpeech,
    pub counts: GenderCounts,
    pub male: Option<f64>,
    pub female: Option<f64>,
    pub neutral: Option<f64>,
}

///Verbs ("actions") or adjectives ("descriptions") used around each gender. Shares are
///`None` when nothing of that part of speech was found.
pub fn part_of_speech_ratio(
    associations: &[Association],
    filter: &StoryFilter,
    part_of_speech: PartOfSpeech,
) -> GenderRatio {
    let mut counts = GenderCounts::default();
    for assoc in associations
        .iter()
        .filter(|a| a.part_of_speech == part_of_speech && filter.includes(&a.story))
    {
        counts.add(assoc.gender, assoc.count);
    }
    GenderRatio {
        part_of_speech,
        counts,
        male: counts.share(Gender::Male),
        female: counts.share(Gender::Female),
        neutral: counts.share(Gender::Neutral),
    }
}

/// How one lemma is spread across the genders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordComparison {
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub counts: GenderCounts,
    pub male: f64,
    pub female: f64,
    pub neutral: f64,
}

impl WordComparison {
    /// Distance from a balanced split, 0 to 0.5.
    pub fn skew(&self) -> f64 {
        ((self.male + 1.0 - self.female) / 2.0 - 0.5).abs()
    }
}

/// How many compared words survive each cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonLimits {
    /// Most skewed words kept first.
    pub skew_limit: usize,
    /// Of those, the most frequent kept.
    pub size_limit: usize,
}

impl Default for ComparisonLimits {
    fn default() -> Self {
        ComparisonLimits {
            skew_limit: 500,
            size_limit: 250,
        }
    }
}

///Merges associations by (lemma, part of speech) across genders and keeps the most
///gender-skewed, then the most frequent, words.
pub fn word_comparison(
    associations: &[Association],
    filter: &StoryFilter,
    limits: ComparisonLimits,
) -> Vec<WordComparison> {
    let mut index: HashMap<(&str, PartOfSpeech), usize> = HashMap::new();
    let mut merged: Vec<(&str, PartOfSpeech, GenderCounts)> = Vec::new();
    for assoc in associations.iter().filter(|a| filter.includes(&a.story)) {
        let key = (assoc.lemma.as_str(), assoc.part_of_speech);
        let i = *index.entry(key).or_insert_with(|| {
            merged.push((key.0, key.1, GenderCounts::default()));
            merged.len() - 1
        });
        merged[i].2.add(assoc.gender, assoc.count);
    }

    let mut words: Vec<WordComparison> = merged
        .into_iter()
        .filter(|(_, _, counts)| counts.total() > 0)
        .map(|(lemma, part_of_speech, counts)| WordComparison {
            lemma: lemma.to_string(),
            part_of_speech,
            counts,
            male: counts.share(Gender::Male).unwrap_or_default(),
            female: counts.share(Gender::Female).unwrap_or_default(),
            neutral: counts.share(Gender::Neutral).unwrap_or_default(),
        })
        .collect();

    words.sort_by(|a, b| b.skew().total_cmp(&a.skew()));
    words.truncate(limits.skew_limit);
    words.sort_by(|a, b| b.counts.total().cmp(&a.counts.total()));
    words.truncate(limits.size_limit);
    words
}

/// One line of the story selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorEntry {
    pub filter: StoryFilter,
    pub counts: GenderCounts,
    /// `None` for stories without gendered terms.
    pub male_lean: Option<f64>,
}

impl SelectorEntry {
    pub fn label(&self) -> &str {
        self.filter.label()
    }
}

///Lists the "All Stories" entry first, then the stories from most male-leaning to most
///female-leaning. Stories without any gendered term go last, in input order.
pub fn story_selector(stories: &[Story]) -> Vec<SelectorEntry> {
    let mut all = GenderCounts::default();
    for story in stories {
        all.merge(&story.counts);
    }

    let mut ranked: Vec<SelectorEntry> = stories
        .iter()
        .map(|story| SelectorEntry {
            filter: StoryFilter::Title(story.title.clone()),
            counts: story.counts,
            male_lean: story.counts.male_lean(),
        })
        .collect();
    ranked.sort_by(|a, b| match (a.male_lean, b.male_lean) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut entries = Vec::with_capacity(ranked.len() + 1);
    entries.push(SelectorEntry {
        filter: StoryFilter::All,
        counts: all,
        male_lean: all.male_lean(),
    });
    entries.extend(ranked);
    entries
}
