//! Lexical preprocessing shared by all analyzers

use crate::AnalysisError;

/// A validated transcript with precomputed lowercase form.
///
/// Word and sentence splitting are derived on demand; the analyzers are pure
/// functions over this type, so nothing else is cached.
#[derive(Debug, Clone)]
pub struct Transcript {
    raw: String,
    lower: String,
}

impl Transcript {
    /// Validate and wrap transcript text. Empty or whitespace-only input is
    /// rejected before any analyzer runs.
    pub fn new(text: &str) -> Result<Self, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }
        Ok(Self {
            raw: text.to_string(),
            lower: text.to_lowercase(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Full lowercased text (keyword matching is substring containment on this)
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Count of whitespace-delimited tokens
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }

    /// Sentences split on the period character, trimmed, empty fragments
    /// discarded
    pub fn sentences(&self) -> Vec<&str> {
        self.raw
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
