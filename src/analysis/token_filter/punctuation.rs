//! Punctuation filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops tokens the annotator flags as punctuation.
///
/// The decision rests entirely on the annotator's flag; the token text is
/// not inspected.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| !token.is_punct)))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{AnnotatedToken, pos};

    #[test]
    fn test_punctuation_filter() {
        let filter = PunctuationFilter::new();
        let tokens = vec![
            AnnotatedToken::new("dogs", "dog", pos::NOUN),
            AnnotatedToken::new("!", "!", pos::PUNCT).with_punct(true),
            // Not flagged, so it stays even though it looks like punctuation.
            AnnotatedToken::new("--", "--", pos::SYM),
        ];

        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "dogs");
        assert_eq!(result[1].text, "--");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PunctuationFilter::new().name(), "punctuation");
    }
}
