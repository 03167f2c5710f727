//! Structural flow: salutation at the start, details in the body, closing at
//! the end

use crate::text::Transcript;
use crate::{Criterion, SubScore};

const SALUTATION_PATTERNS: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "good evening",
];

const BASIC_DETAIL_PATTERNS: &[&str] = &[
    "name",
    "i am",
    "myself",
    "years old",
    "age",
    "class",
    "school",
    "grade",
];

const CLOSING_PATTERNS: &[&str] = &["thank you", "thanks", "that's all", "that is all"];

pub fn analyze(transcript: &Transcript) -> SubScore {
    let sentences = transcript.sentences();

    let has_salutation_start = sentences
        .first()
        .map(|s| {
            let first = s.to_lowercase();
            SALUTATION_PATTERNS.iter().any(|p| first.contains(p))
        })
        .unwrap_or(false);

    let has_closing_end = sentences
        .last()
        .map(|s| {
            let last = s.to_lowercase();
            CLOSING_PATTERNS.iter().any(|p| last.contains(p))
        })
        .unwrap_or(false);

    let has_basic_details = BASIC_DETAIL_PATTERNS
        .iter()
        .any(|p| transcript.lower().contains(p));

    let (score, feedback) = if has_salutation_start && has_closing_end && has_basic_details {
        (
            5,
            "Excellent flow: Proper salutation → details → closing structure",
        )
    } else if has_salutation_start && has_basic_details {
        (
            3,
            "Good flow: Has salutation and details, but missing proper closing",
        )
    } else if has_basic_details {
        (1, "Basic flow: Has details but missing proper structure")
    } else {
        (0, "Poor flow: Missing key structural elements")
    };

    SubScore::new(Criterion::Flow, score, feedback)
}
