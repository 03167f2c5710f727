//! Vocabulary diversity via type-token ratio

use crate::capability::LexicalStatsProvider;
use crate::text::Transcript;
use crate::{Criterion, Metric, SubScore};

/// Below this many words a TTR is not meaningful
const MIN_WORDS: usize = 10;

fn fallback() -> SubScore {
    SubScore::new(Criterion::Vocabulary, 6, "Vocabulary analysis completed")
        .with_metric(Metric::Ttr(0.5))
}

/// Strip punctuation from the lowercased text before counting
fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect()
}

pub fn analyze(transcript: &Transcript, provider: &dyn LexicalStatsProvider) -> SubScore {
    let cleaned = clean(transcript.lower());

    let stats = match provider.stats(&cleaned) {
        Ok(stats) => stats,
        Err(_) => return fallback(),
    };

    if stats.words < MIN_WORDS {
        return SubScore::new(
            Criterion::Vocabulary,
            6,
            "Use more words for better vocabulary assessment",
        )
        .with_metric(Metric::Ttr(0.5));
    }

    let ttr = if stats.words > 0 {
        stats.terms as f64 / stats.words as f64
    } else {
        0.0
    };

    let (score, label) = if ttr >= 0.75 {
        (10, "Excellent vocabulary diversity")
    } else if ttr >= 0.65 {
        (8, "Good vocabulary diversity")
    } else if ttr >= 0.55 {
        (6, "Average vocabulary diversity")
    } else if ttr >= 0.45 {
        (4, "Below average vocabulary diversity")
    } else {
        (2, "Limited vocabulary diversity")
    };

    let mut feedback = format!("{label} (TTR: {ttr:.3})");
    if score <= 6 {
        if ttr < 0.6 {
            feedback
                .push_str(". Try using more varied words instead of repeating the same words");
        }
        if stats.words < 50 {
            feedback.push_str(". Add more descriptive words to your introduction");
        }
    }

    SubScore::new(Criterion::Vocabulary, score, feedback).with_metric(Metric::Ttr(ttr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityError, LexicalStats, TokenStats};

    fn t(text: &str) -> Transcript {
        Transcript::new(text).unwrap()
    }

    fn ttr_of(sub: &SubScore) -> f64 {
        match sub.metric {
            Some(Metric::Ttr(ttr)) => ttr,
            other => panic!("expected TTR metric, got {other:?}"),
        }
    }

    #[test]
    fn short_text_short_circuits() {
        let sub = analyze(&t("just a few words here"), &TokenStats);
        assert_eq!(sub.score, 6);
        assert_eq!(ttr_of(&sub), 0.5);
        assert!(sub.feedback.contains("Use more words"));
    }

    #[test]
    fn positive_all_unique_words() {
        let sub = analyze(
            &t("every single token inside this carefully chosen sentence differs completely"),
            &TokenStats,
        );
        assert_eq!(sub.score, 10);
        assert_eq!(ttr_of(&sub), 1.0);
        assert!(sub.feedback.contains("(TTR: 1.000)"));
    }

    #[test]
    fn negative_heavy_repetition() {
        let text = "word word word word word word word word word other";
        let sub = analyze(&t(text), &TokenStats);
        assert_eq!(ttr_of(&sub), 0.2);
        assert_eq!(sub.score, 2);
        assert!(sub.feedback.contains("more varied words"));
        assert!(sub.feedback.contains("more descriptive words"));
    }

    #[test]
    fn punctuation_does_not_split_terms() {
        // "cricket." and "cricket" must count as one term
        let text = "I play cricket. I love cricket and cricket loves me back always";
        let sub = analyze(&t(text), &TokenStats);
        let cleaned = clean(t(text).lower());
        assert!(!cleaned.contains('.'));
        assert!(ttr_of(&sub) < 1.0);
    }

    struct FailingStats;
    impl LexicalStatsProvider for FailingStats {
        fn stats(&self, _text: &str) -> Result<LexicalStats, CapabilityError> {
            Err(CapabilityError::Failed("tokenizer crashed".into()))
        }
    }

    #[test]
    fn provider_failure_degrades_to_fallback() {
        let sub = analyze(
            &t("a perfectly ordinary sentence with more than ten words in it today"),
            &FailingStats,
        );
        assert_eq!(sub.score, 6);
        assert_eq!(ttr_of(&sub), 0.5);
        assert_eq!(sub.feedback, "Vocabulary analysis completed");
    }
}
