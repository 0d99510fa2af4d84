//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text string before it reaches the annotator.
//! The [`Normalizer`](crate::analysis::normalizer::Normalizer) chains them
//! according to the active configuration.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware case folding
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`trim::TrimCharFilter`] - Removes leading and trailing whitespace
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::char_filter::CharFilter;
//! use textprep::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
//! assert_eq!(filter.filter("a \n\t b"), "a b");
//! ```

/// Trait for character filters that transform text before annotation.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod trim;
