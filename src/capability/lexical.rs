//! Built-in lexical statistics provider

use super::{CapabilityError, LexicalStats, LexicalStatsProvider};
use std::collections::HashSet;

/// Token-based lexical statistics: total word count and unique term count
/// over whitespace-delimited tokens. The vocabulary analyzer hands this
/// provider already-cleaned, lowercased text.
pub struct TokenStats;

impl LexicalStatsProvider for TokenStats {
    fn stats(&self, text: &str) -> Result<LexicalStats, CapabilityError> {
        let mut terms = HashSet::new();
        let mut words = 0usize;
        for token in text.split_whitespace() {
            words += 1;
            terms.insert(token);
        }
        Ok(LexicalStats {
            words,
            terms: terms.len(),
        })
    }
}
