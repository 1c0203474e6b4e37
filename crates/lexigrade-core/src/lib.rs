//! Core library for lexigrade.
//!
//! Scores English and Russian prose with five readability indices and maps
//! each score to a human-readable difficulty tier. This crate provides the
//! analysis pipeline used by the `lexigrade` CLI and any downstream
//! consumers.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`evaluate`] - The end-to-end evaluation pipeline
//! - [`formulas`] - The five readability formulas
//! - [`interpret`] - Score-to-tier band tables
//! - [`language`] - Language classification and per-language capabilities
//! - [`metrics`] - Text measurement
//! - [`text`] - Sentence splitting and tokenization
//!
//! # Quick Start
//!
//! ```no_run
//! use lexigrade_core::evaluate;
//!
//! let report = evaluate("The cat sat on the mat. The dog ran fast.", None)
//!     .expect("Failed to evaluate text");
//!
//! for result in &report.results {
//!     println!("{result}");
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod dictionaries;

pub mod error;

pub mod evaluate;

pub mod formulas;

pub mod interpret;

pub mod language;

pub mod lexicon;

pub mod metrics;

pub mod syllables;

pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

pub use evaluate::{EvaluationReport, ReadabilityResult, evaluate, evaluate_with_classifier};

pub use formulas::Formula;

pub use language::{Language, LanguageClassifier, LanguageProfile, ScriptClassifier};

pub use metrics::MetricsSnapshot;

/// Input size ceiling applied by callers unless explicitly disabled.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Word minimum below which the CLI refuses to score a text.
pub const DEFAULT_MIN_WORDS: usize = 100;
