//! Stats command — text measurements without scoring.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexigrade_core::language::{LanguageClassifier, LanguageProfile, ScriptClassifier};
use lexigrade_core::{Language, MetricsSnapshot, metrics};

use super::read_input;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to measure (use `-` for stdin).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct StatsReport {
    language: Language,
    #[serde(flatten)]
    metrics: MetricsSnapshot,
}

/// Print the measurement model for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input(&args.file, max_input_bytes)?;

    let language = ScriptClassifier.classify(&content);
    let Some(profile) = LanguageProfile::for_language(language) else {
        bail!(
            "{}: language not recognized; statistics are defined only for \
             English and Russian texts",
            args.file
        );
    };

    let snapshot = metrics::measure(&content, &profile)
        .with_context(|| format!("failed to measure {}", args.file))?;

    if global_json {
        let report = StatsReport {
            language,
            metrics: snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", "Language".dimmed(), language);
        println!("{}: {}", "Words".dimmed(), snapshot.word_count);
        println!("{}: {}", "Sentences".dimmed(), snapshot.sentence_count);
        println!("{}: {}", "Letters".dimmed(), snapshot.letter_count);
        println!(
            "{}: {:.2}",
            "Avg sentence length".dimmed(),
            snapshot.avg_sentence_length
        );
        println!(
            "{}: {:.2}",
            "Avg syllables per word".dimmed(),
            snapshot.avg_syllables_per_word
        );
        println!(
            "{}: {} ({:.1}%)",
            "Hard words".dimmed(),
            snapshot.hard_word_count,
            snapshot.hard_word_percentage
        );
        if let Some(unfamiliar) = snapshot.unfamiliar_word_count {
            println!("{}: {}", "Unfamiliar words".dimmed(), unfamiliar);
        }
    }

    Ok(())
}
