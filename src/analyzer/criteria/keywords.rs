//! Topic coverage via keyword matching
//!
//! Presence of a category is boolean: any of its phrases appearing as a
//! substring of the lowercased text counts, and repeating a phrase never
//! adds to the score.

use crate::text::Transcript;
use crate::{Criterion, SubScore};

const POINTS_PER_MUST: u8 = 4;
const POINTS_PER_GOOD: u8 = 2;

/// Required topic categories
const MUST_HAVE: &[(&str, &[&str])] = &[
    ("name", &["my name is", "i am", "myself", "call me"]),
    ("age", &["years old", "age", "i am", "old"]),
    ("school_class", &["class", "grade", "school", "studying in"]),
    (
        "family",
        &["family", "mother", "father", "parents", "sister", "brother"],
    ),
    (
        "hobbies",
        &[
            "hobby", "hobbies", "like to", "enjoy", "playing", "interest", "favorite",
        ],
    ),
];

/// Bonus topic categories
const GOOD_HAVE: &[(&str, &[&str])] = &[
    (
        "about_family",
        &["special thing", "about my family", "family is"],
    ),
    ("origin_location", &["from", "live in", "born in"]),
    (
        "ambition_goal",
        &["dream", "goal", "want to be", "ambition", "when i grow up"],
    ),
    (
        "fun_fact",
        &["fun fact", "interesting thing", "unique", "people don't know"],
    ),
    (
        "strengths_achievements",
        &["achievement", "award", "good at", "strength", "proud of"],
    ),
];

/// Both keyword sub-scores, sharing one composed feedback string
pub struct KeywordCoverage {
    pub must: SubScore,
    pub good: SubScore,
}

fn split_matched<'a>(
    text: &str,
    categories: &[(&'a str, &[&str])],
) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (category, phrases) in categories {
        if phrases.iter().any(|p| text.contains(p)) {
            found.push(*category);
        } else {
            missing.push(*category);
        }
    }
    (found, missing)
}

pub fn analyze(transcript: &Transcript) -> KeywordCoverage {
    let text = transcript.lower();

    let (must_found, must_missing) = split_matched(text, MUST_HAVE);
    let (good_found, good_missing) = split_matched(text, GOOD_HAVE);

    let must_score = must_found.len() as u8 * POINTS_PER_MUST;
    let good_score = good_found.len() as u8 * POINTS_PER_GOOD;

    let mut parts = Vec::new();
    if !must_missing.is_empty() {
        parts.push(format!("Missing: {}", must_missing.join(", ")));
    }
    if !good_found.is_empty() {
        parts.push(format!("Good extras: {}", good_found.join(", ")));
    }
    // Suggest at most two bonus categories, and only when coverage is thin
    if !good_missing.is_empty() && good_found.len() < 3 {
        let suggested: Vec<&str> = good_missing.iter().take(2).copied().collect();
        parts.push(format!("Consider adding: {}", suggested.join(", ")));
    }

    let feedback = if parts.is_empty() {
        "All essential information included".to_string()
    } else {
        parts.join(". ")
    };

    KeywordCoverage {
        must: SubScore::new(Criterion::MustKeywords, must_score, feedback.clone()),
        good: SubScore::new(Criterion::GoodKeywords, good_score, feedback),
    }
}
