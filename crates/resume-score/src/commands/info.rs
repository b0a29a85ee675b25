//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use resume_score_core::config::{Config, ConfigSources};
use resume_score_core::{LexiconKind, METRICS};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    /// Terms added per lexicon list, omitted when nothing is added.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lexicon_additions: Vec<(&'static str, usize)>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let lexicon_additions = config
            .lexicon
            .as_ref()
            .map(|extra| {
                LexiconKind::ALL
                    .iter()
                    .zip([
                        extra.action_verbs.len(),
                        extra.weak_verbs.len(),
                        extra.cliches.len(),
                        extra.soft_skills.len(),
                    ])
                    .filter(|(_, n)| *n > 0)
                    .map(|(kind, n)| (kind.as_str(), n))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            min_score: config.min_score,
            max_input_bytes: config.input_limit(),
            lexicon_additions,
        }
    }
}

#[derive(Serialize)]
struct WeightInfo {
    metric: &'static str,
    weight: f64,
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    weights: Vec<WeightInfo>,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let weights = METRICS
        .iter()
        .map(|m| WeightInfo {
            metric: m.kind.label(),
            weight: m.weight,
        })
        .collect();
    let full_info = FullInfo {
        package: info,
        config: config_info,
        weights,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        // Scoring defaults
        println!();
        println!("{}", "Scoring".bold().underline());
        match full_info.config.min_score {
            Some(min) => println!("{}: {}", "Min score".dimmed(), min),
            None => println!("{}: {}", "Min score".dimmed(), "(not set)".dimmed()),
        }
        match full_info.config.max_input_bytes {
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
        }
        for (kind, n) in &full_info.config.lexicon_additions {
            println!("{}: +{} {}", "Lexicon".dimmed(), n, kind);
        }
        for w in &full_info.weights {
            println!("{:<24} {:.0}%", format!("{}:", w.metric).dimmed(), w.weight * 100.0);
        }
    }

    Ok(())
}
