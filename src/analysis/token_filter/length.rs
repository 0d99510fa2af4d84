//! Length filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum number of characters.
///
/// Length is counted in Unicode scalar values, so "café" has length 4.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_len: usize,
}

impl LengthFilter {
    /// Create a new length filter.
    pub fn new(min_len: usize) -> Self {
        LengthFilter { min_len }
    }

    /// Get the minimum length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_len = self.min_len;
        Ok(Box::new(tokens.filter(move |token| token.char_len() >= min_len)))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
