//! Score command — readability indices with difficulty tiers.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexigrade_core::{DEFAULT_MIN_WORDS, Formula, evaluate, text};

use super::read_input;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score (use `-` for stdin).
    pub file: Utf8PathBuf,

    /// Formulas to run (default: all five).
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub formula: Vec<Formula>,

    /// Score the text even below the word minimum.
    #[arg(long)]
    pub allow_short: bool,
}

/// Score readability of a file with the selected formulas.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_words: Option<usize>,
    config_formulas: Option<&[Formula]>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, formulas = ?args.formula, "executing score command");

    let content = read_input(&args.file, max_input_bytes)?;

    let min_words = config_min_words.unwrap_or(DEFAULT_MIN_WORDS);
    if !args.allow_short {
        let word_count = text::extract_words(&content).len();
        if word_count < min_words {
            bail!(
                "The text is too short, please, enter a piece of text \
                 consisting of no less than {min_words} words (got {word_count})."
            );
        }
    }

    // CLI flag > config file > all formulas
    let selected: Option<Vec<Formula>> = if args.formula.is_empty() {
        config_formulas.map(<[Formula]>::to_vec)
    } else {
        Some(args.formula.clone())
    };

    let report = evaluate(&content, selected.as_deref())
        .with_context(|| format!("failed to score {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            if result.score.is_some() {
                println!("{result}");
            } else {
                println!("{}", result.to_string().yellow());
            }
        }
    }

    Ok(())
}
