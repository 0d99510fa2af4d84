//! Lemma filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that replaces each token's text with its lemma.
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter;

impl LemmaFilter {
    /// Create a new lemma filter.
    pub fn new() -> Self {
        LemmaFilter
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let lemma = token.lemma.clone();
            token.with_text(lemma)
        })))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
