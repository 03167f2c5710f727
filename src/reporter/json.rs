//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::Analysis;
use serde::Serialize;
use std::path::Path;

/// Reporter emitting the interchange format of the score report
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report a single analysis as JSON
    pub fn report(&self, analysis: &Analysis) -> String {
        self.serialize(&analysis.report())
    }

    /// Report multiple results with a summary
    pub fn report_many(&self, results: &[(std::path::PathBuf, Analysis)]) -> String {
        let stats = crate::analyzer::ScoreEngine::aggregate_stats(
            &results.iter().map(|(_, a)| a.clone()).collect::<Vec<_>>(),
        );
        let output = JsonOutput {
            results: results
                .iter()
                .map(|(path, analysis)| JsonEntry {
                    file: path.display().to_string(),
                    report: analysis.report(),
                })
                .collect(),
            summary: JsonSummary::from_stats(&stats),
        };
        self.serialize(&output)
    }

    /// Report a single file with its path
    pub fn report_file(&self, path: &Path, analysis: &Analysis) -> String {
        self.serialize(&JsonEntry {
            file: path.display().to_string(),
            report: analysis.report(),
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput {
    results: Vec<JsonEntry>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonEntry {
    file: String,
    #[serde(flatten)]
    report: crate::ScoreReport,
}

#[derive(Serialize)]
struct JsonSummary {
    files_analyzed: usize,
    average_score: u8,
    total_words: usize,
}

impl JsonSummary {
    fn from_stats(stats: &AggregateStats) -> Self {
        Self {
            files_analyzed: stats.files_analyzed,
            average_score: stats.average_score,
            total_words: stats.total_words,
        }
    }
}
