//! Analysis engine - runs all criteria and assembles the result

use crate::capability::Capabilities;
use crate::text::Transcript;
use crate::{Analysis, AnalysisError};

use super::criteria::{
    filler_words, flow, grammar, keywords, salutation, sentiment, speech_rate, vocabulary,
};
use super::ScoreCalculator;

/// Accepted duration range in seconds
const DURATION_RANGE: std::ops::RangeInclusive<u32> = 1..=600;

/// Main engine that runs every criterion over a transcript.
///
/// The analyzers are pure and independent; the engine owns the capability
/// providers and passes them by reference into the criteria that need them.
pub struct ScoreEngine {
    capabilities: Capabilities,
}

impl ScoreEngine {
    /// Create an engine with the built-in capability providers
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::default(),
        }
    }

    /// Create an engine with custom capability providers
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    /// Grade a transcript. `duration` is the spoken duration in seconds;
    /// when absent the speech rate analyzer estimates it.
    pub fn analyze(&self, text: &str, duration: Option<u32>) -> Result<Analysis, AnalysisError> {
        let transcript = Transcript::new(text)?;
        if let Some(secs) = duration {
            if !DURATION_RANGE.contains(&secs) {
                return Err(AnalysisError::InvalidDuration(secs));
            }
        }

        let mut subs = Vec::with_capacity(9);
        subs.push(salutation::analyze(&transcript));
        let coverage = keywords::analyze(&transcript);
        subs.push(coverage.must);
        subs.push(coverage.good);
        subs.push(flow::analyze(&transcript));
        subs.push(speech_rate::analyze(&transcript, duration));
        subs.push(grammar::analyze(
            &transcript,
            self.capabilities.grammar.as_deref(),
        ));
        subs.push(vocabulary::analyze(
            &transcript,
            self.capabilities.lexical.as_ref(),
        ));
        subs.push(filler_words::analyze(&transcript));
        subs.push(sentiment::analyze(
            &transcript,
            self.capabilities.sentiment.as_ref(),
        ));

        Ok(ScoreCalculator::assemble(transcript.word_count(), subs))
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary over multiple graded transcripts
#[derive(Debug, Clone)]
pub struct AggregateStats {
    pub files_analyzed: usize,
    pub average_score: u8,
    pub total_words: usize,
}

impl ScoreEngine {
    /// Aggregate statistics across analyses
    pub fn aggregate_stats(analyses: &[Analysis]) -> AggregateStats {
        let files_analyzed = analyses.len();
        let average_score = if files_analyzed > 0 {
            let sum: u32 = analyses.iter().map(|a| a.total as u32).sum();
            (sum / files_analyzed as u32) as u8
        } else {
            0
        };
        let total_words = analyses.iter().map(|a| a.word_count).sum();
        AggregateStats {
            files_analyzed,
            average_score,
            total_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Criterion;

    #[test]
    fn produces_all_nine_sub_scores() {
        let engine = ScoreEngine::new();
        let analysis = engine
            .analyze("Hello everyone, my name is Mira and I love music. Thank you.", Some(20))
            .unwrap();
        assert_eq!(analysis.subs.len(), 9);
        for (i, criterion) in crate::CRITERIA.iter().enumerate() {
            assert_eq!(analysis.subs[i].criterion, *criterion);
        }
    }

    #[test]
    fn total_is_sum_of_sub_scores() {
        let engine = ScoreEngine::new();
        let analysis = engine
            .analyze("Hello everyone, my name is Mira and I love music. Thank you.", Some(20))
            .unwrap();
        let sum: u32 = analysis.subs.iter().map(|s| s.score as u32).sum();
        assert_eq!(analysis.total as u32, sum);
        assert_eq!(
            analysis.total,
            analysis.content_score + analysis.language_score + analysis.delivery_score
        );
    }

    #[test]
    fn deterministic_over_identical_input() {
        let engine = ScoreEngine::new();
        let text = "Good morning, my name is Dev. I am ten years old and I enjoy chess. Thanks.";
        let first = engine.analyze(text, Some(35)).unwrap();
        let second = engine.analyze(text, Some(35)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duration_bounds_enforced() {
        let engine = ScoreEngine::new();
        assert!(engine.analyze("hello there", Some(1)).is_ok());
        assert!(engine.analyze("hello there", Some(600)).is_ok());
        assert_eq!(
            engine.analyze("hello there", Some(601)),
            Err(AnalysisError::InvalidDuration(601))
        );
    }

    #[test]
    fn reference_transcript_scores() {
        // Reference transcript: good salutation, all must-have categories,
        // excellent flow
        let text = "Hello everyone my name is Akash I am 14 years old I study in class 9 \
                    my family has four members I enjoy playing football thank you";
        let analysis = ScoreEngine::new().analyze(text, Some(40)).unwrap();

        assert_eq!(analysis.sub(Criterion::Salutation).score, 4);
        assert!(analysis
            .sub(Criterion::Salutation)
            .feedback
            .contains("hello everyone"));
        assert_eq!(analysis.sub(Criterion::MustKeywords).score, 20);
        assert_eq!(analysis.sub(Criterion::Flow).score, 5);
    }

    #[test]
    fn aggregate_stats_averages() {
        let engine = ScoreEngine::new();
        let a = engine.analyze("Hello everyone. My name is A. Thank you.", Some(10)).unwrap();
        let b = engine.analyze("some unrelated words without structure", Some(10)).unwrap();
        let stats = ScoreEngine::aggregate_stats(&[a.clone(), b.clone()]);
        assert_eq!(stats.files_analyzed, 2);
        assert_eq!(
            stats.average_score as u32,
            (a.total as u32 + b.total as u32) / 2
        );
        assert_eq!(stats.total_words, a.word_count + b.word_count);
    }

    #[test]
    fn aggregate_stats_empty() {
        let stats = ScoreEngine::aggregate_stats(&[]);
        assert_eq!(stats.files_analyzed, 0);
        assert_eq!(stats.average_score, 0);
    }
}
