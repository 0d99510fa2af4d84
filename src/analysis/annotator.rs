//! Annotators: the boundary to the natural-language model.
//!
//! Tokenization, part-of-speech tagging and lemmatization are not performed
//! by this crate. They are delegated to an [`Annotator`], which turns a
//! normalized string into an ordered sequence of [`AnnotatedToken`]s. Any
//! NLP model can be plugged in by implementing the trait and, optionally,
//! registering a loader for it in the [`ModelRegistry`].
//!
//! # Available Annotators
//!
//! - [`rule_based::RuleBasedAnnotator`] - Deterministic, lexicon-driven annotator
//! - [`deadline::DeadlineAnnotator`] - Wraps another annotator with a deadline
//!
//! # Examples
//!
//! Implementing a custom annotator:
//!
//! ```
//! use textprep::analysis::annotator::Annotator;
//! use textprep::analysis::token::{AnnotatedToken, pos};
//! use textprep::error::Result;
//!
//! struct SplitAnnotator;
//!
//! impl Annotator for SplitAnnotator {
//!     fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
//!         Ok(text
//!             .split_whitespace()
//!             .map(|word| AnnotatedToken::new(word, word, pos::X))
//!             .collect())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "split"
//!     }
//! }
//!
//! let tokens = SplitAnnotator.annotate("hello world").unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```
//!
//! [`AnnotatedToken`]: crate::analysis::token::AnnotatedToken

use crate::analysis::token::AnnotatedToken;
use crate::error::Result;

/// Trait for NLP models that annotate text with token-level information.
///
/// Implementations are shared read-only across calls (and across threads in
/// batch processing), so `annotate` takes `&self` and must not rely on
/// per-call mutation.
pub trait Annotator: Send + Sync {
    /// Tokenize and annotate the given (already normalized) text.
    ///
    /// Tokens must be returned in the order they appear in `text`. Failures
    /// are reported as [`PreprocessError::Annotation`].
    ///
    /// [`PreprocessError::Annotation`]: crate::error::PreprocessError::Annotation
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>>;

    /// Get the name of this annotator (for logging and configuration).
    fn name(&self) -> &str;
}

pub mod deadline;
pub mod registry;
pub mod rule_based;

pub use deadline::DeadlineAnnotator;
pub use registry::{ModelLoader, ModelRegistry};
pub use rule_based::RuleBasedAnnotator;
