use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender category of a matched term. The declaration order is the order
/// in which categories are tested against a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of gendered terms found, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: u32,
    pub female: u32,
    pub neutral: u32,
}

impl GenderCounts {
    pub fn get(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Neutral => self.neutral,
        }
    }

    pub fn add(&mut self, gender: Gender, amount: u32) {
        match gender {
            Gender::Male => self.male += amount,
            Gender::Female => self.female += amount,
            Gender::Neutral => self.neutral += amount,
        }
    }

    pub fn increment(&mut self, gender: Gender) {
        self.add(gender, 1);
    }

    pub fn merge(&mut self, other: &GenderCounts) {
        for gender in Gender::ALL {
            self.add(gender, other.get(gender));
        }
    }

    pub fn total(&self) -> u32 {
        self.male + self.female + self.neutral
    }

    ///Share of `gender` among all three categories. `None` when nothing was counted, which callers
    ///treat as "no data".
    /// # Example
    /// ```
    /// use gendered_language::{Gender, GenderCounts};
    /// let counts = GenderCounts { male: 3, female: 1, neutral: 0 };
    /// assert_eq!(counts.share(Gender::Male), Some(0.75));
    /// assert_eq!(GenderCounts::default().share(Gender::Male), None);
    /// ```
    pub fn share(&self, gender: Gender) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.get(gender) as f64 / total as f64)
        }
    }

    ///Position on the male/female axis: 1 is all male, 0 all female, 0.5 balanced.
    pub fn male_lean(&self) -> Option<f64> {
        let male = self.share(Gender::Male)?;
        let female = self.share(Gender::Female)?;
        Some((male + 1.0 - female) / 2.0)
    }
}

/// One entry of a word list file: `{"gender": "female", "words": ["she", ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderWordList {
    pub gender: Gender,
    pub words: Vec<String>,
}

const MALE_WORDS: &[&str] = &[
    "he", "him", "his", "hed", "hell", "hes", "king", "prince", "brother", "father", "dad", "son",
    "man", "men", "boy", "boys", "husband",
];

const FEMALE_WORDS: &[&str] = &[
    "she", "her", "hers", "shed", "shell", "shes", "queen", "princess", "sister", "mother", "mom",
    "daughter", "woman", "women", "girl", "wife", "lady",
];

const NEUTRAL_WORDS: &[&str] = &[
    "you", "your", "they", "them", "their", "theyd", "theyll", "theyre", "theyve", "sibling",
    "parent", "child", "people", "person",
];

/// The gendered vocabulary searched for in every sentence.
///
/// Words are matched literally against normalized tokens, so plural and
/// contracted forms ("hes", "theyre") are listed individually. A word may
/// appear under several categories; it then matches each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderWordLists {
    lists: BTreeMap<Gender, HashSet<String>>,
}

impl Default for GenderWordLists {
    fn default() -> Self {
        GenderWordLists::from_lists(vec![
            GenderWordList::new(Gender::Male, MALE_WORDS),
            GenderWordList::new(Gender::Female, FEMALE_WORDS),
            GenderWordList::new(Gender::Neutral, NEUTRAL_WORDS),
        ])
    }
}

impl GenderWordList {
    pub fn new(gender: Gender, words: &[&str]) -> Self {
        GenderWordList {
            gender,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl GenderWordLists {
    /// Builds the lookup from list entries. Entries for the same gender are
    /// merged and words are normalized the same way sentences are.
    pub fn from_lists(lists: Vec<GenderWordList>) -> Self {
        let mut merged: BTreeMap<Gender, HashSet<String>> = BTreeMap::new();
        for list in lists {
            let words = merged.entry(list.gender).or_default();
            for word in list.words {
                let word = crate::tokenize::normalize_sentence(word.trim());
                if !word.is_empty() {
                    words.insert(word);
                }
            }
        }
        GenderWordLists { lists: merged }
    }

    /// Categories whose list contains `word`, in male, female, neutral order.
    pub fn matches<'a>(&'a self, word: &'a str) -> impl Iterator<Item = Gender> + 'a {
        self.lists
            .iter()
            .filter(move |(_, words)| words.contains(word))
            .map(|(gender, _)| *gender)
    }
}
