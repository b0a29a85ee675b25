//! Core library for resume-score.
//!
//! Scores a structured resume from 0 to 100 across five weighted metrics
//! and ranks concrete suggestions for improving it. Scoring is pure and
//! deterministic: the same [`ResumeData`] always yields the same
//! [`ResumeScore`].
//!
//! # Modules
//!
//! - [`resume`] - The input document and its JSON/YAML decoding
//! - [`metrics`] - The five metric calculators and their weights
//! - [`scoring`] - Aggregation and recommendation ranking
//! - [`lexicon`] - Word lists used to classify bullets and skills
//! - [`experience`] - Entry/mid/senior tier heuristic
//! - [`report`] - Output value types
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use resume_score_core::{ResumeData, compute_resume_score};
//!
//! let resume = ResumeData::default();
//! let score = compute_resume_score(&resume);
//!
//! assert!(score.overall <= 100);
//! assert!(score.recommendations.len() <= 5);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod experience;
pub mod lexicon;
pub mod metrics;
pub mod report;
pub mod resume;
pub mod scoring;
pub mod text;
pub mod word_lists;

pub use config::{
    Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LexiconConfig, LogLevel,
};
pub use error::{
    ConfigError, ConfigResult, InputError, InputResult, LexiconError, LexiconResult,
};
pub use experience::ExperienceLevel;
pub use lexicon::{Lexicon, LexiconBuilder, LexiconKind};
pub use metrics::{METRICS, MetricKind};
pub use report::{
    ActionableItem, MetricScore, Priority, Recommendation, ResumeScore, ScoreBreakdown, SectionId,
    Status,
};
pub use resume::{InputFormat, ResumeData, parse_resume};
pub use scoring::{MAX_RECOMMENDATIONS, ResumeScorer, compute_resume_score};
