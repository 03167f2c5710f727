//! Emotional tone via compound sentiment polarity
//!
//! The primary path asks the sentiment capability for a compound score in
//! [-1, 1]. When the capability fails, a positive-word count normalized by
//! text length stands in, with a fixed placeholder metric.

use crate::capability::SentimentProvider;
use crate::text::Transcript;
use crate::{Criterion, Metric, SubScore};

/// Words counted by the fallback path
const POSITIVE_WORDS: &[&str] = &[
    "excited",
    "happy",
    "love",
    "enjoy",
    "great",
    "wonderful",
    "amazing",
    "fantastic",
    "excellent",
    "best",
    "fun",
    "interesting",
    "special",
    "favorite",
    "thank you",
    "proud",
    "passionate",
];

/// The fallback only evaluates ratios above this many words
const FALLBACK_MIN_WORDS: usize = 20;
/// Metric reported when the capability was unavailable
const FALLBACK_COMPOUND: f64 = 0.5;

pub fn analyze(transcript: &Transcript, provider: &dyn SentimentProvider) -> SubScore {
    let compound = match provider.compound(transcript.raw()) {
        Ok(compound) => compound,
        Err(_) => return fallback(transcript),
    };

    let (score, label) = if compound >= 0.8 {
        (15, "Extremely positive and enthusiastic")
    } else if compound >= 0.6 {
        (12, "Very positive and engaging")
    } else if compound >= 0.4 {
        (9, "Moderately positive")
    } else if compound >= 0.2 {
        (6, "Neutral with some positive elements")
    } else {
        (3, "Could be more positive")
    };

    let mut feedback = format!("{label} (score: {compound:.3})");
    if score <= 9 {
        if compound < 0.4 {
            feedback.push_str(". Try adding more positive words like 'excited', 'enjoy', 'love'");
        } else if compound < 0.6 {
            feedback.push_str(". Show more enthusiasm in your delivery");
        }
    }

    SubScore::new(Criterion::Sentiment, score, feedback).with_metric(Metric::Compound(compound))
}

fn fallback(transcript: &Transcript) -> SubScore {
    let word_count = transcript.word_count();
    let positive_count = POSITIVE_WORDS
        .iter()
        .filter(|w| transcript.lower().contains(*w))
        .count();

    let score = if word_count > FALLBACK_MIN_WORDS {
        let positivity_ratio = positive_count as f64 / (word_count as f64 / 20.0);
        if positivity_ratio >= 3.0 {
            12
        } else if positivity_ratio >= 2.0 {
            9
        } else if positivity_ratio >= 1.0 {
            6
        } else {
            3
        }
    } else {
        6
    };

    SubScore::new(Criterion::Sentiment, score, "Positive tone detected")
        .with_metric(Metric::Compound(FALLBACK_COMPOUND))
}
