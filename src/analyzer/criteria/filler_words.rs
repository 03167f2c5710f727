//! Filler word density
//!
//! Filler phrases are space-padded so only standalone occurrences match.
//! Context-dependent fillers ("so", "well", ...) are frequently legitimate
//! words, so their raw count is halved with floor division before inclusion.

use crate::text::Transcript;
use crate::{Criterion, Metric, SubScore};

/// Space-padded filler phrases
const FILLERS: &[&str] = &[
    " um ",
    " uh ",
    " like ",
    " you know ",
    " so ",
    " actually ",
    " basically ",
    " right ",
    " i mean ",
    " well ",
    " kinda ",
    " sort of ",
    " okay ",
    " hmm ",
    " ah ",
    " er ",
];

/// Fillers that are often non-filler usage; counted at half weight
const CONTEXT_DEPENDENT: &[&str] = &["so", "well", "right", "really", "very", "just"];

/// At most this many found fillers listed in feedback
const MAX_LISTED: usize = 3;

pub fn analyze(transcript: &Transcript) -> SubScore {
    let padded = format!(" {} ", transcript.lower());
    let total_words = transcript.word_count();

    let mut filler_count = 0usize;
    let mut found = Vec::new();
    for filler in FILLERS {
        let phrase = filler.trim();
        let mut count = padded.matches(filler).count();
        if count > 0 && CONTEXT_DEPENDENT.contains(&phrase) {
            count /= 2;
        }
        if count > 0 {
            filler_count += count;
            found.push(format!("{phrase} ({count}x)"));
        }
    }

    let filler_rate = if total_words > 0 {
        filler_count as f64 / total_words as f64 * 100.0
    } else {
        0.0
    };

    let (score, label) = if filler_rate <= 2.0 {
        (15, "Excellent clarity, very few filler words")
    } else if filler_rate <= 4.0 {
        (12, "Good clarity, some filler words")
    } else if filler_rate <= 6.0 {
        (9, "Average clarity, noticeable filler words")
    } else if filler_rate <= 8.0 {
        (6, "Below average clarity, many filler words")
    } else {
        (3, "Poor clarity, excessive filler words")
    };

    let mut feedback = label.to_string();
    if found.is_empty() {
        feedback.push_str(". No filler words detected");
    } else {
        let listed: Vec<&str> = found.iter().take(MAX_LISTED).map(String::as_str).collect();
        feedback.push_str(&format!(". Found: {}", listed.join(", ")));
    }
    feedback.push_str(&format!(" (rate: {filler_rate:.1}%)"));

    SubScore::new(Criterion::FillerWords, score, feedback)
        .with_metric(Metric::FillerRate(filler_rate))
}
