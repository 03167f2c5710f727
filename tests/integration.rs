//! End-to-end grading tests over the library API.

use podium::analyzer::ScoreEngine;
use podium::capability::{
    Capabilities, CapabilityError, GrammarProvider, LexicalStats, LexicalStatsProvider,
    SentimentProvider,
};
use podium::{analyze, AnalysisError, Criterion};

const GOOD_INTRO: &str = "Hello everyone my name is Akash I am 14 years old I study in class 9 \
                          my family has four members I enjoy playing football thank you";

#[test]
fn reference_transcript_full_breakdown() {
    let analysis = analyze(GOOD_INTRO, Some(40)).unwrap();

    assert_eq!(analysis.word_count, 27);
    assert_eq!(analysis.sub(Criterion::Salutation).score, 4);
    assert_eq!(analysis.sub(Criterion::MustKeywords).score, 20);
    assert_eq!(analysis.sub(Criterion::Flow).score, 5);
    // 27 words in 40 seconds = 40.5 WPM
    assert_eq!(analysis.sub(Criterion::SpeechRate).score, 2);
    assert!(analysis
        .sub(Criterion::SpeechRate)
        .feedback
        .contains("40.5 WPM"));
    assert_eq!(analysis.sub(Criterion::FillerWords).score, 15);
}

#[test]
fn empty_transcript_is_rejected() {
    assert_eq!(analyze("", None), Err(AnalysisError::EmptyTranscript));
    assert_eq!(analyze("   \n\t  ", None), Err(AnalysisError::EmptyTranscript));
}

#[test]
fn invalid_duration_is_rejected() {
    assert_eq!(
        analyze("hello everyone", Some(0)),
        Err(AnalysisError::InvalidDuration(0))
    );
    assert_eq!(
        analyze("hello everyone", Some(601)),
        Err(AnalysisError::InvalidDuration(601))
    );
}

#[test]
fn missing_duration_is_estimated() {
    // 70 words at the 140 wpm baseline = 30 seconds, right in the ideal band
    let words = vec!["word"; 70].join(" ");
    let analysis = analyze(&words, None).unwrap();
    let rate = analysis.sub(Criterion::SpeechRate);
    assert_eq!(rate.score, 10);
    assert!(rate.feedback.contains("(estimated duration)"));
}

#[test]
fn estimated_duration_has_floor() {
    // 7 words would estimate 3 seconds; the 10 second floor makes it 42 wpm
    let analysis = analyze("one two three four five six seven", None).unwrap();
    assert!(analysis
        .sub(Criterion::SpeechRate)
        .feedback
        .contains("42"));
}

#[test]
fn short_transcript_skips_grammar_scoring() {
    // 13 words: below the 15 word grammar minimum, fixed neutral score
    let text = "Hello everyone my name is Ben and I enjoy books quite a lot";
    assert_eq!(text.split_whitespace().count(), 13);
    let analysis = analyze(text, Some(10)).unwrap();
    let grammar = analysis.sub(Criterion::Grammar);
    assert_eq!(grammar.score, 6);
    assert!(grammar.feedback.contains("too short"));
}

struct FailingSentiment;
impl SentimentProvider for FailingSentiment {
    fn compound(&self, _text: &str) -> Result<f64, CapabilityError> {
        Err(CapabilityError::Unavailable("sentiment".into()))
    }
}

struct PassthroughStats;
impl LexicalStatsProvider for PassthroughStats {
    fn stats(&self, text: &str) -> Result<LexicalStats, CapabilityError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let terms = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<std::collections::HashSet<_>>()
            .len();
        Ok(LexicalStats {
            words: words.len(),
            terms,
        })
    }
}

#[test]
fn sentiment_failure_degrades_single_criterion() {
    let capabilities = Capabilities {
        sentiment: Box::new(FailingSentiment),
        lexical: Box::new(PassthroughStats),
        grammar: None,
    };
    let engine = ScoreEngine::with_capabilities(capabilities);

    // Short text: fallback takes the word-count branch
    let analysis = engine.analyze("I am fine", Some(10)).unwrap();
    let sentiment = analysis.sub(Criterion::Sentiment);
    assert_eq!(sentiment.score, 6);
    assert_eq!(sentiment.feedback, "Positive tone detected");

    // Every other criterion still gets graded
    assert_eq!(analysis.subs.len(), 9);
    assert!(analysis.total > 0);
}

struct StrictGrammar;
impl GrammarProvider for StrictGrammar {
    fn error_count(&self, _text: &str) -> Result<f64, CapabilityError> {
        Ok(10.0)
    }
}

#[test]
fn grammar_provider_errors_lower_the_score() {
    let with_provider = Capabilities {
        grammar: Some(Box::new(StrictGrammar)),
        ..Capabilities::default()
    };
    let text = "Hello everyone my name is Ben and I enjoy reading many books about history \
                science and art every single evening after school";

    let baseline = ScoreEngine::new().analyze(text, Some(20)).unwrap();
    let strict = ScoreEngine::with_capabilities(with_provider)
        .analyze(text, Some(20))
        .unwrap();

    assert!(
        strict.sub(Criterion::Grammar).score < baseline.sub(Criterion::Grammar).score,
        "extra provider errors should lower the grammar score"
    );
}

#[test]
fn analysis_is_deterministic() {
    let first = analyze(GOOD_INTRO, Some(40)).unwrap();
    let second = analyze(GOOD_INTRO, Some(40)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.report(), second.report());
}

#[test]
fn report_shape_is_stable() {
    let report = analyze(GOOD_INTRO, Some(40)).unwrap().report();

    assert_eq!(report.criteria.len(), 2);
    assert_eq!(report.criteria[0].criterion, "Content & Structure");
    assert_eq!(report.criteria[0].max_score, 40);
    assert_eq!(report.criteria[0].components.len(), 4);
    assert_eq!(report.criteria[1].criterion, "Delivery & Style");
    assert_eq!(report.criteria[1].max_score, 60);
    assert_eq!(report.criteria[1].components.len(), 5);

    let overall: u32 = report.criteria.iter().map(|g| g.score as u32).sum();
    assert_eq!(report.overall_score as u32, overall);
}

#[test]
fn weak_transcript_collects_suggestions() {
    let analysis = analyze("Um so I am like you know just here", Some(10)).unwrap();
    assert!(!analysis.suggestions.is_empty());
    assert!(analysis.total < 60);
}

#[test]
fn wpm_band_boundaries() {
    // 111 words in 60 seconds = 111 wpm, bottom of the ideal band
    let text = vec!["word"; 111].join(" ");
    let analysis = analyze(&text, Some(60)).unwrap();
    assert_eq!(analysis.sub(Criterion::SpeechRate).score, 10);

    // 161 wpm is rushed
    let text = vec!["word"; 161].join(" ");
    let analysis = analyze(&text, Some(60)).unwrap();
    assert_eq!(analysis.sub(Criterion::SpeechRate).score, 2);

    // 110 wpm is slightly slow
    let text = vec!["word"; 110].join(" ");
    let analysis = analyze(&text, Some(60)).unwrap();
    assert_eq!(analysis.sub(Criterion::SpeechRate).score, 6);
}
