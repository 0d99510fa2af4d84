//! # textprep
//!
//! Configurable text cleaning on top of pluggable NLP annotators.
//!
//! ## Features
//!
//! - Whitespace, case and digit normalization
//! - Tokenization, tagging and lemmatization delegated to an [`Annotator`]
//! - Token filtering by punctuation, stopword, part-of-speech and length
//! - Deterministic word frequency ranking
//!
//! ## Example
//!
//! ```
//! use textprep::prelude::*;
//!
//! let config = PreprocessConfig::default().with_remove_numbers(true);
//! let preprocessor = TextPreprocessor::load("rule_based", config).unwrap();
//!
//! let output = preprocessor
//!     .full_pipeline("Parsing text in 2026 is fun; parsing is easy.", DEFAULT_TOP_K)
//!     .unwrap();
//!
//! assert_eq!(output.tokens, vec!["parsing", "text", "fun", "parsing", "easy"]);
//! assert_eq!(output.ranking[0], ("parsing".to_string(), 2));
//! ```
//!
//! [`Annotator`]: analysis::annotator::Annotator

pub mod analysis;
pub mod config;
pub mod error;
pub mod preprocessor;

pub mod prelude {
    pub use crate::analysis::annotator::{Annotator, ModelRegistry, RuleBasedAnnotator};
    pub use crate::analysis::frequency::{rank, rank_all};
    pub use crate::analysis::normalizer::normalize;
    pub use crate::analysis::token::AnnotatedToken;
    pub use crate::analysis::token_filter::filter_tokens;
    pub use crate::config::{PosTagSet, PreprocessConfig};
    pub use crate::error::{PreprocessError, Result};
    pub use crate::preprocessor::{DEFAULT_TOP_K, PipelineOutput, TextPreprocessor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
