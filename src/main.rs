//! Podium: Speech Quality Grader CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use podium::analyzer::ScoreEngine;
use podium::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use podium::reporter::{ConsoleReporter, JsonReporter};
use podium::Analysis;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Podium: Speech Quality Grader for student self-introductions
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file or directory to grade (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Spoken duration in seconds (single file only; omitted = estimated)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=600))]
    duration: Option<u32>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (feedback for every criterion)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .podiumrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grade files in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .podiumrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let path = args
        .path
        .clone()
        .expect("path required when not using subcommand");

    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let transcript_files = collect_transcript_files(&path, ignore_set.as_ref(), &config)?;
    if transcript_files.is_empty() {
        eprintln!("{}: No transcript files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let duration = if transcript_files.len() > 1 {
        if args.duration.is_some() && !args.quiet {
            eprintln!(
                "{}: --duration applies to a single file; ignoring it for a directory",
                "Warning".yellow()
            );
        }
        None
    } else {
        args.duration
    };

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = ScoreEngine::new();
    let use_parallel = args.parallel || transcript_files.len() > 10;

    let (results, had_errors) = if use_parallel {
        grade_files_parallel(&engine, &transcript_files, duration, args.quiet)
    } else {
        grade_files_sequential(&engine, &transcript_files, duration, args.quiet)
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let analyses: Vec<Analysis> = results.iter().map(|(_, a)| a.clone()).collect();
    let stats = ScoreEngine::aggregate_stats(&analyses);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0].1));
        } else {
            println!("{}", reporter.report_many(&results));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for (path, analysis) in &results {
            reporter.report_quiet(path, analysis);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if results.len() == 1 {
            reporter.report(&results[0].0, &results[0].1);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check threshold (config or CLI)
    if let Some(threshold) = config.threshold {
        let score = if results.len() == 1 {
            results[0].1.total
        } else {
            stats.average_score
        };
        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Collect transcript files from a file path or directory
fn collect_transcript_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        anyhow::bail!("Path not found: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let entry_path = entry.path();
        if !entry.file_type().is_file() || !config.is_transcript_file(entry_path) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(entry_path, set) {
                continue;
            }
        }
        files.push(entry_path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn grade_one(
    engine: &ScoreEngine,
    path: &Path,
    duration: Option<u32>,
) -> Result<Analysis> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    engine
        .analyze(&text, duration)
        .with_context(|| format!("Failed to grade transcript: {}", path.display()))
}

fn grade_files_sequential(
    engine: &ScoreEngine,
    files: &[PathBuf],
    duration: Option<u32>,
    quiet: bool,
) -> (Vec<(PathBuf, Analysis)>, bool) {
    let mut results = Vec::with_capacity(files.len());
    let mut had_errors = false;
    for path in files {
        match grade_one(engine, path, duration) {
            Ok(analysis) => results.push((path.clone(), analysis)),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!("{}: {:#}", "Warning".yellow(), e);
                }
            }
        }
    }
    (results, had_errors)
}

fn grade_files_parallel(
    engine: &ScoreEngine,
    files: &[PathBuf],
    duration: Option<u32>,
    quiet: bool,
) -> (Vec<(PathBuf, Analysis)>, bool) {
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| (path.clone(), grade_one(engine, path, duration)))
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut had_errors = false;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(analysis) => results.push((path, analysis)),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!("{}: {:#}", "Warning".yellow(), e);
                }
            }
        }
    }
    (results, had_errors)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config {
        threshold: Some(threshold.unwrap_or(60)),
        ..Config::default()
    };
    let content = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{}: Created {}", "Done".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
