//! Error types for lexigrade-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text evaluation.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable content.
    #[error("no scorable text in input")]
    EmptyInput,

    /// Word or sentence count came out zero, so no ratio can be formed.
    ///
    /// Callers are expected to reject texts under the word minimum before
    /// evaluating, but the engine guards the divisions regardless.
    #[error("insufficient input: at least one word and one sentence are required")]
    InsufficientInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
