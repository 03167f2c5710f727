//! Opening greeting classification

use crate::text::Transcript;
use crate::{Criterion, SubScore};

/// Enthusiasm-expressing openers
const EXCELLENT: &[&str] = &[
    "i am excited to introduce",
    "feeling great",
    "thrilled to share",
    "delighted to present",
];

/// Formal greetings
const GOOD: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
    "hi everyone",
];

/// Bare greetings (substring match, so "hi" inside another word counts too)
const NORMAL: &[&str] = &["hi", "hello"];

/// Classify the salutation tier. Tiers are checked in priority order and the
/// first matching phrase anywhere in the text wins.
pub fn analyze(transcript: &Transcript) -> SubScore {
    let text = transcript.lower();

    for phrase in EXCELLENT {
        if text.contains(phrase) {
            return SubScore::new(
                Criterion::Salutation,
                5,
                format!("Excellent salutation found: '{phrase}'"),
            );
        }
    }
    for phrase in GOOD {
        if text.contains(phrase) {
            return SubScore::new(
                Criterion::Salutation,
                4,
                format!("Good salutation found: '{phrase}'"),
            );
        }
    }
    for phrase in NORMAL {
        if text.contains(phrase) {
            return SubScore::new(
                Criterion::Salutation,
                2,
                format!("Normal salutation found: '{phrase}'"),
            );
        }
    }

    SubScore::new(Criterion::Salutation, 0, "No appropriate salutation found")
}
