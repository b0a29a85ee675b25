//! Score command: grade a resume file and list what to fix first.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_score_core::config::Config;
use resume_score_core::{
    InputFormat, METRICS, MetricScore, Priority, ResumeScore, ResumeScorer, Status, parse_resume,
};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Resume file (`.json`, or `.yaml`/`.yml`).
    pub file: Utf8PathBuf,

    /// Fail when the overall score is below this (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score a resume file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing score command");

    let content = read_input_file(&args.file, config.input_limit())?;
    let format = InputFormat::from_extension(args.file.extension());
    let resume = parse_resume(&content, format)
        .with_context(|| format!("failed to parse {}", args.file))?;

    let lexicon = config
        .build_lexicon()
        .context("invalid lexicon in configuration")?;
    let score = ResumeScorer::new(lexicon).score(&resume);
    let min_score = args.min_score.or(config.min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        print_report(&args.file, &score, min_score);
    }

    if let Some(min) = min_score
        && score.overall < min
    {
        bail!(
            "{} scores {} (min: {min}). Work through the recommendations above.",
            args.file,
            score.overall,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, score: &ResumeScore, min_score: Option<u8>) {
    let overall = Status::from_score(score.overall);
    match min_score {
        Some(min) if score.overall >= min => println!(
            "{} {} scores {}/100 (min: {min})",
            "PASS:".green(),
            file.bold(),
            paint(score.overall, overall)
        ),
        Some(min) => println!(
            "{} {} scores {}/100 (min: {min})",
            "FAIL:".red(),
            file.bold(),
            paint(score.overall, overall)
        ),
        None => println!(
            "{} scores {}/100 ({overall})",
            file.bold(),
            paint(score.overall, overall)
        ),
    }

    println!();
    println!("{}", "Breakdown".bold().underline());
    for metric in METRICS {
        print_metric(metric.kind.label(), metric.weight, score.breakdown.get(metric.kind));
    }

    if score.recommendations.is_empty() {
        return;
    }
    println!();
    println!("{}", "Recommendations".bold().underline());
    for (i, rec) in score.recommendations.iter().enumerate() {
        let tag = match rec.priority {
            Priority::High => "high".red().to_string(),
            Priority::Medium => "medium".yellow().to_string(),
            Priority::Low => "low".dimmed().to_string(),
        };
        println!("  {}. [{tag}] {}", i + 1, rec.title.bold());
        println!("     {}", rec.description);
    }
}

fn print_metric(label: &str, weight: f64, metric: &MetricScore) {
    println!(
        "  {:<24} {:>3}  {:<9} {} {}",
        label,
        paint(metric.score, metric.status),
        metric.status.as_str(),
        format!("({:.0}%)", weight * 100.0).dimmed(),
        metric.feedback,
    );
}

fn paint(score: u8, status: Status) -> String {
    match status {
        Status::Excellent => score.green().to_string(),
        Status::Good => score.cyan().to_string(),
        Status::Fair => score.yellow().to_string(),
        Status::Poor => score.red().to_string(),
    }
}
