//! Part-of-speech filter implementation.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::config::PosTagSet;
use crate::error::Result;

/// A filter that keeps only tokens whose tag is in the configured set.
///
/// An empty set keeps nothing. To disable part-of-speech filtering, leave
/// the filter out of the chain.
#[derive(Clone, Debug)]
pub struct PosFilter {
    keep: Arc<PosTagSet>,
}

impl PosFilter {
    /// Create a new part-of-speech filter.
    pub fn new(keep: PosTagSet) -> Self {
        PosFilter {
            keep: Arc::new(keep),
        }
    }

    /// Get the tags this filter keeps.
    pub fn keep(&self) -> &PosTagSet {
        &self.keep
    }
}

impl Filter for PosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let keep = Arc::clone(&self.keep);
        Ok(Box::new(tokens.filter(move |token| keep.contains(&token.pos))))
    }

    fn name(&self) -> &'static str {
        "pos"
    }
}
