//! Built-in lexicon-based sentiment provider

use super::{CapabilityError, SentimentProvider};
use std::collections::HashMap;

/// Dampening applied to a valence when the preceding token negates it
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence-lexicon sentiment scorer producing a compound polarity in [-1, 1].
///
/// Sums per-token valences (with simple negation flipping) and normalizes
/// with sum / sqrt(sum^2 + alpha), so the compound saturates toward +/-1 as
/// positive or negative evidence accumulates.
pub struct LexiconSentiment {
    lexicon: HashMap<&'static str, f64>,
}

const VALENCES: &[(&str, f64)] = &[
    ("excited", 2.4),
    ("exciting", 2.2),
    ("happy", 2.7),
    ("love", 3.2),
    ("loves", 3.2),
    ("enjoy", 2.2),
    ("enjoys", 2.2),
    ("great", 3.1),
    ("wonderful", 2.7),
    ("amazing", 2.8),
    ("fantastic", 2.6),
    ("excellent", 2.7),
    ("best", 3.2),
    ("fun", 2.3),
    ("interesting", 1.7),
    ("special", 1.7),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("proud", 2.1),
    ("passionate", 2.2),
    ("good", 1.9),
    ("nice", 1.8),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("dream", 1.6),
    ("dreams", 1.6),
    ("hope", 1.9),
    ("awesome", 3.1),
    ("glad", 2.0),
    ("like", 1.5),
    ("likes", 1.5),
    ("friend", 2.2),
    ("friends", 2.2),
    ("friendly", 2.2),
    ("beautiful", 2.9),
    ("brilliant", 2.8),
    ("cool", 1.3),
    ("delighted", 2.9),
    ("eager", 1.9),
    ("thrilled", 3.0),
    ("joy", 2.8),
    ("kind", 2.4),
    ("smart", 1.9),
    ("strong", 2.3),
    ("super", 2.9),
    ("sweet", 2.0),
    ("talented", 2.3),
    ("achievement", 2.1),
    ("win", 2.8),
    ("won", 2.7),
    ("bad", -2.5),
    ("sad", -2.1),
    ("hate", -2.7),
    ("hates", -2.7),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("boring", -1.3),
    ("difficult", -1.5),
    ("problem", -1.7),
    ("problems", -1.7),
    ("worst", -3.1),
    ("angry", -2.3),
    ("fear", -2.2),
    ("afraid", -2.2),
    ("lonely", -2.0),
    ("tired", -1.2),
    ("nervous", -1.2),
    ("worried", -1.9),
    ("fail", -2.5),
    ("failed", -2.5),
    ("lose", -1.7),
    ("lost", -1.3),
    ("poor", -2.0),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "can't", "cant", "isn't", "isnt", "won't", "wont",
];

impl LexiconSentiment {
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.iter().copied().collect(),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentProvider for LexiconSentiment {
    fn compound(&self, text: &str) -> Result<f64, CapabilityError> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|t| {
                t.to_lowercase()
                    .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_string()
            })
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.lexicon.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && NEGATIONS.contains(&tokens[i - 1].as_str());
            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }

        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        Ok(compound.clamp(-1.0, 1.0))
    }
}
