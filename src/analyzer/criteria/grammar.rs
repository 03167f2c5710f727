//! Pattern-based grammar heuristics for spoken English
//!
//! A handful of regex rules approximate grammar-error density. The rules are
//! self-sufficient; a configured grammar capability adds its error count on
//! top, and a capability failure degrades this criterion to a fixed fallback
//! without touching the other analyzers.

use crate::capability::GrammarProvider;
use crate::text::Transcript;
use crate::{Criterion, Metric, SubScore};
use regex::Regex;

/// Below this many words the heuristics are too noisy to apply
const MIN_WORDS: usize = 15;
/// At most this many issue labels are surfaced in feedback
const MAX_SURFACED_ISSUES: usize = 2;

fn fallback() -> SubScore {
    SubScore::new(Criterion::Grammar, 6, "Speech grammar analysis completed")
        .with_metric(Metric::GrammarErrors(0.0))
}

/// Weighted error count plus the issue labels found, in rule order
fn heuristic_errors(transcript: &Transcript) -> (f64, Vec<&'static str>) {
    let text = transcript.lower();
    let mut errors = 0.0;
    let mut issues = Vec::new();

    // Awkward repetition like "play, playing"
    let repetition = Regex::new(r",\s+\w+ing\b").unwrap();
    let count = repetition.find_iter(text).count();
    if count > 0 {
        errors += count as f64;
        issues.push("avoid repetition like 'play, playing'");
    }

    // Singular noun after "one of my" and friends
    let plural = Regex::new(r"\b(one of my|some of my|many of my) (\w+[^s])\b").unwrap();
    let count = plural.find_iter(text).count();
    if count > 0 {
        errors += count as f64;
        issues.push("use plural after 'one of my' (e.g., 'friends' not 'friend')");
    }

    // Malformed verb constructions like "enjoy is playing"
    let verb = Regex::new(r"\b(enjoy|like|love) (is|are) (\w+)\b").unwrap();
    let count = verb.find_iter(text).count();
    if count > 0 {
        errors += count as f64;
        issues.push("use '-ing' form after enjoy/like/love (e.g., 'enjoy playing')");
    }

    // Missing article after see/watch/look (skipped when the next word starts
    // with an article or possessive)
    let article = Regex::new(r"\b(see|watch|look) (\w+)").unwrap();
    let count = article
        .captures_iter(text)
        .filter(|caps| {
            let next = &caps[2];
            !(next.starts_with("the")
                || next.starts_with('a')
                || next.starts_with("my")
                || next.starts_with("your"))
        })
        .count();
    if count > 0 {
        errors += count as f64 * 0.5;
        issues.push("add articles like 'the', 'a', 'my' before nouns");
    }

    // Preposition misuse
    let preposition = Regex::new(r"\btalk by myself\b").unwrap();
    let count = preposition.find_iter(text).count();
    if count > 0 {
        errors += count as f64;
        issues.push("use 'to myself' not 'by myself'");
    }

    // Sentence fragments
    let fragments = transcript
        .sentences()
        .iter()
        .filter(|s| s.split_whitespace().count() < 3)
        .count();
    if fragments > 0 {
        errors += fragments as f64 * 0.5;
        issues.push("use complete sentences");
    }

    (errors, issues)
}

pub fn analyze(transcript: &Transcript, provider: Option<&dyn GrammarProvider>) -> SubScore {
    let word_count = transcript.word_count();
    if word_count < MIN_WORDS {
        return SubScore::new(
            Criterion::Grammar,
            6,
            "Text too short for detailed grammar analysis",
        )
        .with_metric(Metric::GrammarErrors(0.0));
    }

    let (mut errors, issues) = heuristic_errors(transcript);

    if let Some(provider) = provider {
        match provider.error_count(transcript.raw()) {
            Ok(count) => errors += count,
            Err(_) => return fallback(),
        }
    }

    let error_rate = errors / word_count as f64 * 100.0;
    let (score, mut feedback) = if errors == 0.0 {
        (10, "Excellent spoken grammar".to_string())
    } else if error_rate < 5.0 {
        (8, "Good spoken grammar with minor issues".to_string())
    } else if error_rate < 10.0 {
        (6, "Average spoken grammar".to_string())
    } else {
        (4, "Needs grammar improvement".to_string())
    };

    if !issues.is_empty() {
        let surfaced: Vec<&str> = issues.iter().take(MAX_SURFACED_ISSUES).copied().collect();
        feedback.push_str(&format!(". Focus on: {}", surfaced.join(", ")));
    }

    SubScore::new(Criterion::Grammar, score, feedback).with_metric(Metric::GrammarErrors(errors))
}
