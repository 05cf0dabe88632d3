use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::detect::GenderedHit;
use crate::gender::Gender;
use crate::lexicon::{Lexicon, PartOfSpeech};

/// How often a lemma of a given part of speech appeared near terms of one
/// gender in one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub story: String,
    pub lemma: String,
    pub gender: Gender,
    pub part_of_speech: PartOfSpeech,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AssociationKey {
    story: String,
    lemma: String,
    gender: Gender,
    part_of_speech: PartOfSpeech,
}

/// Collects associations, one per (story, lemma, gender, part of speech).
/// Output order is the order in which keys were first seen.
#[derive(Debug, Default)]
pub struct AssociationCounter {
    index: HashMap<AssociationKey, usize>,
    associations: Vec<Association>,
}

impl AssociationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        story: &str,
        lemma: &str,
        gender: Gender,
        part_of_speech: PartOfSpeech,
    ) {
        let key = AssociationKey {
            story: story.to_string(),
            lemma: lemma.to_string(),
            gender,
            part_of_speech,
        };
        match self.index.get(&key) {
            Some(&i) => self.associations[i].count += 1,
            None => {
                self.index.insert(key, self.associations.len());
                self.associations.push(Association {
                    story: story.to_string(),
                    lemma: lemma.to_string(),
                    gender,
                    part_of_speech,
                    count: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }

    pub fn into_associations(self) -> Vec<Association> {
        self.associations
    }
}

///Counts the verbs and adjectives around every hit.
///
///Each context word that classifies as verb or adjective adds one to the association of its
///lemma, so a word appearing twice in a window counts twice. Context words missing from the
///lexicon are skipped.
pub fn aggregate_associations(hits: &[GenderedHit], lexicon: &Lexicon) -> Vec<Association> {
    let mut counter = AssociationCounter::new();
    let mut unresolved = 0usize;
    for hit in hits {
        for word in &hit.context {
            match lexicon.classify(word) {
                Some(found) => {
                    counter.record(&hit.story, found.lemma, hit.gender, found.part_of_speech)
                }
                None => unresolved += 1,
            }
        }
    }
    log::debug!(
        "{} associations from {} hits ({} context words not verb or adjective)",
        counter.len(),
        hits.len(),
        unresolved
    );
    counter.into_associations()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LookupEntry;
    use std::collections::HashSet;

    fn hit(story: &str, gender: Gender, context: &[&str]) -> GenderedHit {
        GenderedHit {
            story: story.to_string(),
            sentence_index: 1,
            word_index: 0,
            word: "he".to_string(),
            gender,
            context: context.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::new(vec![
            LookupEntry::new("ran", "run", &["verb"]),
            LookupEntry::new("runs", "run", &["verb"]),
            LookupEntry::new("loved", "love", &["verb"]),
            LookupEntry::new("tall", "tall", &["adjective"]),
            LookupEntry::new("the", "the", &["article"]),
        ])
    }

    #[test]
    fn king_loved_her_association() {
        let hits = vec![hit("Tale", Gender::Male, &["the", "loved", "her"])];
        let out = aggregate_associations(&hits, &lexicon());
        assert_eq!(
            out,
            vec![Association {
                story: "Tale".to_string(),
                lemma: "love".to_string(),
                gender: Gender::Male,
                part_of_speech: PartOfSpeech::Verb,
                count: 1,
            }]
        );
    }

    #[test]
    fn same_lemma_in_two_stories_stays_separate() {
        let hits = vec![
            hit("One", Gender::Male, &["ran"]),
            hit("Two", Gender::Male, &["ran"]),
        ];
        let out = aggregate_associations(&hits, &lexicon());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].story, "One");
        assert_eq!(out[1].story, "Two");
        assert!(out.iter().all(|a| a.count == 1 && a.lemma == "run"));
    }

    #[test]
    fn surface_forms_merge_under_lemma() {
        let hits = vec![
            hit("Tale", Gender::Female, &["ran", "tall", "runs"]),
            hit("Tale", Gender::Female, &["ran"]),
            hit("Tale", Gender::Male, &["ran"]),
        ];
        let out = aggregate_associations(&hits, &lexicon());
        let keys: Vec<(&str, Gender, PartOfSpeech, u32)> = out
            .iter()
            .map(|a| (a.lemma.as_str(), a.gender, a.part_of_speech, a.count))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("run", Gender::Female, PartOfSpeech::Verb, 3),
                ("tall", Gender::Female, PartOfSpeech::Adjective, 1),
                ("run", Gender::Male, PartOfSpeech::Verb, 1),
            ]
        );
    }

    #[test]
    fn keys_are_unique() {
        let hits: Vec<GenderedHit> = (0..50)
            .map(|n| {
                let gender = Gender::ALL[n % 3];
                hit(if n % 2 == 0 { "A" } else { "B" }, gender, &["ran", "tall", "the"])
            })
            .collect();
        let out = aggregate_associations(&hits, &lexicon());
        let keys: HashSet<(&str, &str, Gender, PartOfSpeech)> = out
            .iter()
            .map(|a| (a.story.as_str(), a.lemma.as_str(), a.gender, a.part_of_speech))
            .collect();
        assert_eq!(keys.len(), out.len());
        let total: u32 = out.iter().map(|a| a.count).sum();
        assert_eq!(total, 100);
    }
}
