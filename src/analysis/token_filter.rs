//! Token filter implementations for annotated token streams.
//!
//! Each filter implements one stage of the elimination chain. A
//! [`FilterChain`] assembles the stages enabled by a [`PreprocessConfig`] in
//! a fixed order; a token is dropped by the first stage that rejects it and
//! never seen by later stages.
//!
//! # Available Filters
//!
//! - [`space::SpaceFilter`] - Drops whitespace tokens (always on)
//! - [`punctuation::PunctuationFilter`] - Drops punctuation tokens
//! - [`stop::StopFilter`] - Drops stopword tokens
//! - [`pos::PosFilter`] - Keeps only tokens with selected part-of-speech tags
//! - [`lemma::LemmaFilter`] - Replaces token text with the lemma
//! - [`strip::StripFilter`] - Removes surrounding whitespace from token text (always on)
//! - [`remove_empty::RemoveEmptyFilter`] - Drops tokens with empty text (always on)
//! - [`length::LengthFilter`] - Drops tokens shorter than a minimum length
//!
//! # Filter Chaining
//!
//! ```text
//! Annotator → Space → Punctuation? → Stop? → Pos? → Lemma? → Strip → RemoveEmpty → Length?
//! ```
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::{AnnotatedToken, pos};
//! use textprep::analysis::token_filter::filter_tokens;
//! use textprep::config::PreprocessConfig;
//!
//! let tokens = vec![
//!     AnnotatedToken::new("The", "the", pos::DET).with_stop(true),
//!     AnnotatedToken::new("mice", "mouse", pos::NOUN),
//!     AnnotatedToken::new("ran", "run", pos::VERB),
//!     AnnotatedToken::new("!", "!", pos::PUNCT).with_punct(true),
//! ];
//!
//! let filtered = filter_tokens(tokens, &PreprocessConfig::default()).unwrap();
//! assert_eq!(filtered, vec!["mouse", "run"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::{AnnotatedToken, TokenStream};
use crate::config::PreprocessConfig;
use crate::error::Result;

/// Trait for filters that transform annotated token streams.
///
/// The trait requires `Send + Sync` so a chain can be shared across threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod length;
pub mod lemma;
pub mod pos;
pub mod punctuation;
pub mod remove_empty;
pub mod space;
pub mod stop;
pub mod strip;

pub use length::LengthFilter;
pub use lemma::LemmaFilter;
pub use pos::PosFilter;
pub use punctuation::PunctuationFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use space::SpaceFilter;
pub use stop::StopFilter;
pub use strip::StripFilter;

/// An ordered sequence of filters built from a configuration.
#[derive(Clone)]
pub struct FilterChain {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterChain {
    /// Assemble the filters enabled by `config`, in elimination order.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        let mut filters: Vec<Arc<dyn Filter>> = vec![Arc::new(SpaceFilter::new())];

        if config.remove_punct {
            filters.push(Arc::new(PunctuationFilter::new()));
        }
        if config.remove_stopwords {
            filters.push(Arc::new(StopFilter::new()));
        }
        if let Some(tags) = &config.keep_pos {
            filters.push(Arc::new(PosFilter::new(tags.clone())));
        }
        if config.lemmatize {
            filters.push(Arc::new(LemmaFilter::new()));
        }

        filters.push(Arc::new(StripFilter::new()));
        filters.push(Arc::new(RemoveEmptyFilter::new()));

        if config.min_token_len > 0 {
            filters.push(Arc::new(LengthFilter::new(config.min_token_len)));
        }

        let chain = FilterChain { filters };
        log::trace!("filter chain: [{}]", chain.names().join(", "));
        chain
    }

    /// Run `tokens` through every filter and collect the surviving texts.
    pub fn apply(&self, tokens: Vec<AnnotatedToken>) -> Result<Vec<String>> {
        let mut stream: TokenStream = Box::new(tokens.into_iter());
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream.map(|token| token.text).collect())
    }

    /// Get the filters in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Names of the filters in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

/// Filter annotated tokens according to `config`.
pub fn filter_tokens(tokens: Vec<AnnotatedToken>, config: &PreprocessConfig) -> Result<Vec<String>> {
    FilterChain::from_config(config).apply(tokens)
}
