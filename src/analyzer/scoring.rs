//! Bucket sums and improvement suggestions

use crate::{Analysis, Criterion, SubScore};

/// Per-criterion suggestion thresholds: a suggestion is appended when the
/// score falls below the threshold. Flow has no suggestion of its own; the
/// structural advice is covered by the salutation and keyword entries.
const SUGGESTION_THRESHOLDS: &[(Criterion, u8, &str)] = &[
    (
        Criterion::Salutation,
        3,
        "Start with a proper greeting like 'Hello everyone' or 'Good morning'",
    ),
    (
        Criterion::MustKeywords,
        16,
        "Include all basic details: name, age, school, family, hobbies",
    ),
    (
        Criterion::GoodKeywords,
        6,
        "Add personal touches like dreams, fun facts, or special family details",
    ),
    (
        Criterion::SpeechRate,
        8,
        "Practice speaking at a steady pace (110-140 words per minute)",
    ),
    (
        Criterion::Grammar,
        8,
        "Review basic grammar rules for spoken English",
    ),
    (
        Criterion::Vocabulary,
        8,
        "Use more varied vocabulary in your speech",
    ),
    (
        Criterion::FillerWords,
        12,
        "Reduce filler words like 'um', 'uh', 'like' for clearer speech",
    ),
    (
        Criterion::Sentiment,
        12,
        "Show more enthusiasm and positivity in your delivery",
    ),
];

/// Calculator for bucket subtotals, the overall score, and suggestions
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Message shown when no suggestion threshold is triggered
    pub const SUCCESS_MESSAGE: &'static str = "Excellent performance! Keep up the good work!";

    /// Combine the nine sub-scores into a full analysis
    pub fn assemble(word_count: usize, subs: Vec<SubScore>) -> Analysis {
        debug_assert_eq!(subs.len(), 9);
        let score = |criterion: Criterion| {
            subs.iter()
                .find(|s| s.criterion == criterion)
                .map(|s| s.score)
                .unwrap_or(0)
        };

        let content_score = score(Criterion::Salutation)
            + score(Criterion::MustKeywords)
            + score(Criterion::GoodKeywords)
            + score(Criterion::Flow);
        let language_score = score(Criterion::Grammar) + score(Criterion::Vocabulary);
        let delivery_score = score(Criterion::SpeechRate)
            + score(Criterion::FillerWords)
            + score(Criterion::Sentiment);
        let total = content_score + language_score + delivery_score;

        let suggestions = Self::suggestions(&subs);

        Analysis {
            word_count,
            subs,
            content_score,
            language_score,
            delivery_score,
            total,
            suggestions,
        }
    }

    /// Derive the improvement suggestion list from threshold comparisons
    pub fn suggestions(subs: &[SubScore]) -> Vec<String> {
        let mut out = Vec::new();
        for (criterion, threshold, suggestion) in SUGGESTION_THRESHOLDS {
            let triggered = subs
                .iter()
                .find(|s| s.criterion == *criterion)
                .map(|s| s.score < *threshold)
                .unwrap_or(false);
            if triggered {
                out.push(suggestion.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CRITERIA;

    fn subs_with_scores(scores: [u8; 9]) -> Vec<SubScore> {
        CRITERIA
            .iter()
            .zip(scores)
            .map(|(c, score)| SubScore::new(*c, score, "feedback"))
            .collect()
    }

    #[test]
    fn buckets_and_total() {
        let analysis = ScoreCalculator::assemble(
            50,
            subs_with_scores([5, 20, 10, 5, 10, 10, 10, 15, 15]),
        );
        assert_eq!(analysis.content_score, 40);
        assert_eq!(analysis.language_score, 20);
        assert_eq!(analysis.delivery_score, 40);
        assert_eq!(analysis.total, 100);
        assert_eq!(analysis.word_count, 50);
    }

    #[test]
    fn perfect_scores_no_suggestions() {
        let subs = subs_with_scores([5, 20, 10, 5, 10, 10, 10, 15, 15]);
        assert!(ScoreCalculator::suggestions(&subs).is_empty());
    }

    #[test]
    fn every_threshold_triggers() {
        let subs = subs_with_scores([0; 9]);
        let suggestions = ScoreCalculator::suggestions(&subs);
        assert_eq!(suggestions.len(), 8);
        assert!(suggestions[0].contains("greeting"));
        assert!(suggestions[7].contains("enthusiasm"));
    }

    #[test]
    fn threshold_boundaries_are_strict() {
        // Scores at exactly the threshold do not trigger
        let subs = subs_with_scores([3, 16, 6, 0, 8, 8, 8, 12, 12]);
        assert!(ScoreCalculator::suggestions(&subs).is_empty());

        let subs = subs_with_scores([2, 15, 5, 0, 7, 7, 7, 11, 11]);
        assert_eq!(ScoreCalculator::suggestions(&subs).len(), 8);
    }

    #[test]
    fn flow_has_no_suggestion() {
        let subs = subs_with_scores([5, 20, 10, 0, 10, 10, 10, 15, 15]);
        assert!(ScoreCalculator::suggestions(&subs).is_empty());
    }
}
