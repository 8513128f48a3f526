//! textsim CLI - plagiarism similarity scoring.
//!
//! Compares a student text file against a reference text file and prints
//! the overall similarity plus sentence-level matches.

use clap::Parser;
use log::error;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textsim::{Config, EngineConfig, Match, Result, SimilarityEngine, TextSimError};

#[derive(Parser)]
#[command(name = "textsim")]
#[command(version)]
#[command(about = "TF-IDF similarity scoring between two text files", long_about = None)]
struct Cli {
    /// Student text file
    student: PathBuf,

    /// Reference text file
    reference: PathBuf,

    /// Minimum percentage for a sentence pair to count as a match
    #[arg(short, long, default_value_t = textsim::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Score sentence pairs on multiple threads
    #[arg(short, long)]
    parallel: bool,

    /// Emit the report as JSON
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    overall_percent: f64,
    threshold: f64,
    matches: Vec<Match>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let student = read_text(&cli.student)?;
    let reference = read_text(&cli.reference)?;

    let config = Config {
        engine: EngineConfig {
            threshold: cli.threshold,
            parallel: cli.parallel,
        },
        ..Default::default()
    };
    let engine = SimilarityEngine::new(config)?;

    let report = Report {
        overall_percent: engine.overall_similarity(&student, &reference),
        threshold: cli.threshold,
        matches: engine.sentence_matches(&student, &reference),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TextSimError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

fn print_report(report: &Report) {
    println!("Overall similarity: {:.2}%", report.overall_percent);
    println!();

    if report.matches.is_empty() {
        println!("No sentence pairs at or above {:.1}%.", report.threshold);
        return;
    }

    println!(
        "Sentence matches (>= {:.1}%):",
        report.threshold
    );
    println!();
    for m in &report.matches {
        println!("  Student:    {}", m.student);
        println!("  Reference:  {}", m.reference);
        println!("  Similarity: {:.2}%", m.percent);
        println!();
    }
}
