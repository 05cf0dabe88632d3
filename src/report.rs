use std::fmt::Write;

use crate::analysis::Analysis;
use crate::gender::GenderCounts;
use crate::lexicon::PartOfSpeech;
use crate::views::{
    ComparisonLimits, GenderRatio, StoryFilter, gender_totals, part_of_speech_ratio,
    story_selector, word_comparison,
};

/// Compared words listed in the text summary.
const SUMMARY_WORDS: usize = 20;

fn percent(share: Option<f64>) -> String {
    match share {
        Some(share) => format!("{:.1}%", share * 100.0),
        None => "no data".to_string(),
    }
}

fn counts_line(counts: &GenderCounts) -> String {
    format!(
        "male {}, female {}, neutral {}",
        counts.male, counts.female, counts.neutral
    )
}

fn ratio_line(name: &str, ratio: &GenderRatio) -> String {
    format!(
        "{} ({}): male {}, female {}, neutral {}\n",
        name,
        ratio.counts.total(),
        percent(ratio.male),
        percent(ratio.female),
        percent(ratio.neutral)
    )
}

///Human-readable summary of the analysis as seen through `filter`: the story selector, term
///counts, the verb and adjective ratios and the most gender-skewed words.
pub fn summary(analysis: &Analysis, filter: &StoryFilter) -> String {
    let mut out = String::new();

    out.push_str("Stories (most male-leaning first):\n");
    for entry in story_selector(&analysis.stories) {
        let lean = entry
            .male_lean
            .map(|l| format!("{l:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {} [lean {}]: {}",
            entry.label(),
            lean,
            counts_line(&entry.counts)
        );
    }

    let _ = writeln!(out, "\nGendered terms in {}:", filter.label());
    let totals = gender_totals(&analysis.sentences, filter);
    let _ = writeln!(out, "  {}", counts_line(&totals));

    out.push('\n');
    out.push_str(&ratio_line(
        "Actions (verbs)",
        &part_of_speech_ratio(&analysis.associations, filter, PartOfSpeech::Verb),
    ));
    out.push_str(&ratio_line(
        "Descriptions (adjectives)",
        &part_of_speech_ratio(&analysis.associations, filter, PartOfSpeech::Adjective),
    ));

    let words = word_comparison(&analysis.associations, filter, ComparisonLimits::default());
    if !words.is_empty() {
        out.push_str("\nMost frequent gendered words:\n");
        for word in words.iter().take(SUMMARY_WORDS) {
            let _ = writeln!(
                out,
                "  {} ({}): {}",
                word.lemma,
                word.part_of_speech,
                counts_line(&word.counts)
            );
        }
    }
    out
}
