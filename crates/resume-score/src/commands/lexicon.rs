//! Lexicon command: show the word lists the scorer classifies with.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_score_core::config::Config;
use resume_score_core::{Lexicon, LexiconKind};

/// Arguments for the `lexicon` subcommand.
#[derive(Args, Debug, Default)]
pub struct LexiconArgs {
    /// Print the terms of one list instead of the list sizes.
    #[arg(long, value_enum)]
    pub kind: Option<LexiconKind>,
}

#[derive(Serialize)]
struct ListSize {
    kind: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct ListTerms<'a> {
    kind: &'static str,
    terms: Vec<&'a str>,
}

/// Print the effective lexicon, built-ins plus configured additions.
#[instrument(name = "cmd_lexicon", skip_all, fields(kind = ?args.kind))]
pub fn cmd_lexicon(args: LexiconArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing lexicon command");

    let lexicon = config
        .build_lexicon()
        .context("invalid lexicon in configuration")?;

    match args.kind {
        Some(kind) => print_terms(&lexicon, kind, global_json),
        None => print_sizes(&lexicon, global_json),
    }
}

fn print_sizes(lexicon: &Lexicon, global_json: bool) -> anyhow::Result<()> {
    let sizes: Vec<ListSize> = LexiconKind::ALL
        .iter()
        .map(|kind| ListSize {
            kind: kind.as_str(),
            count: lexicon.count(*kind),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sizes)?);
    } else {
        println!("{}", "Lexicon".bold().underline());
        for size in &sizes {
            println!("{:<14} {}", format!("{}:", size.kind).dimmed(), size.count);
        }
    }
    Ok(())
}

fn print_terms(lexicon: &Lexicon, kind: LexiconKind, global_json: bool) -> anyhow::Result<()> {
    let list = ListTerms {
        kind: kind.as_str(),
        terms: lexicon.terms(kind),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for term in &list.terms {
            println!("{term}");
        }
    }
    Ok(())
}
