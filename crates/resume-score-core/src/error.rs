//! Error types for resume-score-core.
//!
//! Scoring itself is total and never fails. These errors cover the edges
//! around it: loading configuration, building a lexicon, decoding input.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a [`Lexicon`](crate::lexicon::Lexicon).
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A term was empty or whitespace-only.
    #[error("blank term in {list} list")]
    EmptyTerm {
        /// Which list contained the blank term.
        list: &'static str,
    },

    /// The cliché matcher could not be compiled.
    #[error("failed to build cliché matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur when decoding a resume document.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input contained no document at all.
    #[error("resume input is empty")]
    Empty,

    /// The input was not a valid JSON resume.
    #[error("invalid JSON resume: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not a valid YAML resume.
    #[error("invalid YAML resume: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
