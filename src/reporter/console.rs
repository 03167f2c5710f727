//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::ScoreCalculator;
use crate::{Analysis, SubScore, CRITERIA};
use colored::Colorize;
use std::path::Path;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show per-criterion feedback for every criterion
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single graded transcript
    pub fn report(&self, path: &Path, analysis: &Analysis) {
        println!();
        println!(
            "{}",
            format!("Speech Analysis: {}", path.display()).bold()
        );
        println!("   Words: {}", analysis.word_count);
        println!();

        let score_bar = self.create_score_bar(analysis.total);
        println!("   Overall: {}", score_bar);
        println!();

        println!("   {}", "Score Breakdown:".bold());
        let buckets = [
            ("Content & Structure", analysis.content_score, 40u8),
            ("Language & Grammar", analysis.language_score, 20),
            ("Delivery & Style", analysis.delivery_score, 40),
        ];
        for (name, score, max) in buckets {
            let bar = self.create_mini_bar(score, max);
            println!("   {} {} {}", bar, self.colorize_score(score, max), name);
        }
        println!();

        for criterion in CRITERIA {
            self.print_criterion(analysis.sub(criterion));
        }
        println!();

        self.print_suggestions(analysis);
        println!();
    }

    /// Report multiple results with a summary
    pub fn report_many(&self, results: &[(std::path::PathBuf, Analysis)], stats: &AggregateStats) {
        for (path, analysis) in results {
            self.report(path, analysis);
            println!("{}", "─".repeat(60));
        }
        self.print_summary(stats);
    }

    /// Report in quiet mode (one line per file)
    pub fn report_quiet(&self, path: &Path, analysis: &Analysis) {
        println!("{}: {}/100", path.display(), analysis.total);
    }

    fn print_criterion(&self, sub: &SubScore) {
        let max = sub.max_score();
        let bar = self.create_mini_bar(sub.score, max);
        println!(
            "   {} {} {}",
            bar,
            self.colorize_score(sub.score, max),
            sub.criterion
        );
        // Feedback for weak criteria is always worth reading; verbose shows all
        if self.verbose || sub.score * 2 < max {
            println!("       {} {}", "→".dimmed(), sub.feedback.italic());
        }
    }

    fn print_suggestions(&self, analysis: &Analysis) {
        if analysis.suggestions.is_empty() {
            println!(
                "   {}",
                ScoreCalculator::SUCCESS_MESSAGE.green().bold()
            );
            return;
        }
        println!("   {}", "Suggestions for Improvement:".bold());
        for suggestion in &analysis.suggestions {
            println!("   {} {}", "→".cyan(), suggestion);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Transcripts analyzed: {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:        {}",
            format!("{}/100", stats.average_score).bold()
        );
        println!("   Total words:          {}", stats.total_words);
        println!();
    }

    fn colorize_score(&self, score: u8, max: u8) -> String {
        let s = format!("{:>2}/{}", score, max);
        if !self.use_colors {
            return s;
        }
        // Same banding as the overall bar: green from 80%, yellow from 60%
        let pct = score as usize * 100 / max.max(1) as usize;
        if pct >= 80 {
            s.green().to_string()
        } else if pct >= 60 {
            s.yellow().to_string()
        } else {
            s.red().to_string()
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}/100", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = (score as usize * 10) / max.max(1) as usize;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
