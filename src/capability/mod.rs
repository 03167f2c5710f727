//! Pluggable analysis capability providers
//!
//! Three criteria delegate part of their work to an external capability:
//! sentiment polarity, lexical statistics, and (optionally) grammar checking.
//! Each sits behind a narrow trait so it can be substituted or mocked. A
//! provider failure degrades its single criterion to a fixed fallback; it
//! never aborts the analysis.

mod lexical;
mod sentiment;

pub use lexical::TokenStats;
pub use sentiment::LexiconSentiment;

use thiserror::Error;

/// Failure of an external capability, caught locally per-analyzer
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),
    #[error("capability failed: {0}")]
    Failed(String),
}

/// Compound sentiment polarity in [-1, 1].
///
/// Failure must be signalled through the Result, distinctly from a valid
/// zero score.
pub trait SentimentProvider: Send + Sync {
    fn compound(&self, text: &str) -> Result<f64, CapabilityError>;
}

/// Total and unique word counts for cleaned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalStats {
    pub words: usize,
    pub terms: usize,
}

pub trait LexicalStatsProvider: Send + Sync {
    fn stats(&self, text: &str) -> Result<LexicalStats, CapabilityError>;
}

/// Weighted grammar error count for a text. The heuristic rules in the
/// grammar analyzer are self-sufficient; a configured provider's count is
/// added on top.
pub trait GrammarProvider: Send + Sync {
    fn error_count(&self, text: &str) -> Result<f64, CapabilityError>;
}

/// The capability providers an engine runs with. Constructed once and passed
/// by reference into the analyzers.
pub struct Capabilities {
    pub sentiment: Box<dyn SentimentProvider>,
    pub lexical: Box<dyn LexicalStatsProvider>,
    pub grammar: Option<Box<dyn GrammarProvider>>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            sentiment: Box::new(LexiconSentiment::new()),
            lexical: Box::new(TokenStats),
            grammar: None,
        }
    }
}
