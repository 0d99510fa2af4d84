//! Stop filter implementation.
//!
//! Removes tokens the annotator flags as stopwords. Which words count as
//! stopwords is the annotator's decision (see
//! [`RuleBasedAnnotator::with_stop_words`](crate::analysis::annotator::RuleBasedAnnotator::with_stop_words)
//! for the built-in lexicon).
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::{AnnotatedToken, pos};
//! use textprep::analysis::token_filter::Filter;
//! use textprep::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     AnnotatedToken::new("the", "the", pos::DET).with_stop(true),
//!     AnnotatedToken::new("quick", "quick", pos::ADJ),
//!     AnnotatedToken::new("fox", "fox", pos::NOUN),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "fox");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stopword tokens from the stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter;

impl StopFilter {
    /// Create a new stop filter.
    pub fn new() -> Self {
        StopFilter
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| !token.is_stop)))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
