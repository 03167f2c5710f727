//! Podium: Speech Quality Grader
//!
//! This library grades a spoken self-introduction transcript against a fixed
//! rubric and produces a 0-100 score broken into weighted criteria with
//! human-readable feedback per criterion.

pub mod analyzer;
pub mod capability;
pub mod config;
pub mod reporter;
pub mod text;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to the caller before or instead of a score.
///
/// Capability failures never appear here: a failing provider degrades its
/// single criterion to a documented fallback and the analysis continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Transcript was empty or whitespace-only; no analysis is attempted.
    #[error("transcript is empty - enter some text to analyze")]
    EmptyTranscript,
    /// Duration outside the accepted range (1-600 seconds).
    #[error("duration must be between 1 and 600 seconds (got {0})")]
    InvalidDuration(u32),
}

/// The nine scored rubric criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Salutation,
    MustKeywords,
    GoodKeywords,
    Flow,
    SpeechRate,
    Grammar,
    Vocabulary,
    FillerWords,
    Sentiment,
}

/// All criteria in report order
pub const CRITERIA: [Criterion; 9] = [
    Criterion::Salutation,
    Criterion::MustKeywords,
    Criterion::GoodKeywords,
    Criterion::Flow,
    Criterion::SpeechRate,
    Criterion::Grammar,
    Criterion::Vocabulary,
    Criterion::FillerWords,
    Criterion::Sentiment,
];

impl Criterion {
    /// Maximum score for this criterion (the nine maxima sum to 100)
    pub fn max_score(self) -> u8 {
        match self {
            Criterion::Salutation => 5,
            Criterion::MustKeywords => 20,
            Criterion::GoodKeywords => 10,
            Criterion::Flow => 5,
            Criterion::SpeechRate => 10,
            Criterion::Grammar => 10,
            Criterion::Vocabulary => 10,
            Criterion::FillerWords => 15,
            Criterion::Sentiment => 15,
        }
    }

    /// Component name used in reports
    pub fn display_name(self) -> &'static str {
        match self {
            Criterion::Salutation => "Salutation",
            Criterion::MustKeywords => "Must-have Keywords",
            Criterion::GoodKeywords => "Good-to-have Keywords",
            Criterion::Flow => "Flow",
            Criterion::SpeechRate => "Speech Rate",
            Criterion::Grammar => "Grammar",
            Criterion::Vocabulary => "Vocabulary",
            Criterion::FillerWords => "Filler Words",
            Criterion::Sentiment => "Sentiment",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw metric behind a sub-score, for display and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Words per minute
    Wpm(f64),
    /// Type-token ratio
    Ttr(f64),
    /// Compound sentiment polarity in [-1, 1]
    Compound(f64),
    /// Weighted grammar error count
    GrammarErrors(f64),
    /// Filler words per 100 words
    FillerRate(f64),
}

/// Score and feedback for a single criterion
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub criterion: Criterion,
    /// Clamped to [0, criterion.max_score()]
    pub score: u8,
    pub feedback: String,
    pub metric: Option<Metric>,
}

impl SubScore {
    pub fn new(criterion: Criterion, score: u8, feedback: impl Into<String>) -> Self {
        Self {
            criterion,
            score: score.min(criterion.max_score()),
            feedback: feedback.into(),
            metric: None,
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn max_score(&self) -> u8 {
        self.criterion.max_score()
    }
}

/// The full result of grading one transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Whitespace-delimited token count of the transcript
    pub word_count: usize,
    /// All nine sub-scores in report order
    pub subs: Vec<SubScore>,
    /// Content & Structure subtotal (salutation + keywords + flow, max 40)
    pub content_score: u8,
    /// Language & Grammar subtotal (grammar + vocabulary, max 20)
    pub language_score: u8,
    /// Delivery & Style subtotal (speech rate + filler + sentiment, max 40)
    pub delivery_score: u8,
    /// Overall score, sum of all nine sub-scores (max 100)
    pub total: u8,
    /// Improvement suggestions derived from per-criterion thresholds
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// Look up the sub-score for a criterion
    pub fn sub(&self, criterion: Criterion) -> &SubScore {
        self.subs
            .iter()
            .find(|s| s.criterion == criterion)
            .expect("all nine criteria are always present")
    }

    /// Build the serializable interchange report
    pub fn report(&self) -> ScoreReport {
        let component = |c: Criterion| {
            let sub = self.sub(c);
            Component {
                name: c.display_name().to_string(),
                score: sub.score,
                max_score: c.max_score(),
                feedback: sub.feedback.clone(),
            }
        };

        let content = vec![
            component(Criterion::Salutation),
            component(Criterion::MustKeywords),
            component(Criterion::GoodKeywords),
            component(Criterion::Flow),
        ];
        let delivery = vec![
            component(Criterion::SpeechRate),
            component(Criterion::Grammar),
            component(Criterion::Vocabulary),
            component(Criterion::FillerWords),
            component(Criterion::Sentiment),
        ];

        let group = |name: &str, components: Vec<Component>| CriterionGroup {
            score: components.iter().map(|c| c.score).sum(),
            max_score: components.iter().map(|c| c.max_score).sum(),
            criterion: name.to_string(),
            components,
        };

        ScoreReport {
            overall_score: self.total,
            word_count: self.word_count,
            criteria: vec![
                group("Content & Structure", content),
                group("Delivery & Style", delivery),
            ],
            improvement_suggestions: self.suggestions.clone(),
        }
    }
}

/// Serializable report in the interchange format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u8,
    pub word_count: usize,
    pub criteria: Vec<CriterionGroup>,
    pub improvement_suggestions: Vec<String>,
}

/// One of the two criterion groups in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionGroup {
    /// Group name ("Content & Structure" or "Delivery & Style")
    pub criterion: String,
    pub score: u8,
    pub max_score: u8,
    pub components: Vec<Component>,
}

/// A named component within a criterion group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub score: u8,
    pub max_score: u8,
    pub feedback: String,
}

/// Public API: grade a transcript with the built-in capability providers.
///
/// * `text` - transcript (non-empty after trimming)
/// * `duration` - spoken duration in seconds (1-600); None means estimated
pub fn analyze(text: &str, duration: Option<u32>) -> Result<Analysis, AnalysisError> {
    analyzer::ScoreEngine::new().analyze(text, duration)
}
