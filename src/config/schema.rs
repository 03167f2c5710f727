//! Config file schema

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of .podiumrc.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Minimum acceptable score; the CLI exits 1 below it
    pub threshold: Option<u8>,
    /// Glob patterns for transcript files to skip
    pub ignore: Vec<String>,
    /// File extensions treated as transcripts when scanning a directory
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: None,
            ignore: Vec::new(),
            extensions: vec!["txt".to_string()],
        }
    }
}

impl Config {
    /// CLI flags override config file values
    pub fn merge_with_cli(mut self, threshold: Option<u8>) -> Self {
        if threshold.is_some() {
            self.threshold = threshold;
        }
        self
    }

    /// Whether a path has one of the configured transcript extensions
    pub fn is_transcript_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
