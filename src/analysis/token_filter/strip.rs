//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes leading and trailing whitespace from token text.
///
/// Tokens that become empty are kept; [`RemoveEmptyFilter`](super::RemoveEmptyFilter)
/// drops them.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let trimmed = token.text.trim();
            if trimmed.len() == token.text.len() {
                token
            } else {
                let trimmed = trimmed.to_string();
                token.with_text(trimmed)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{AnnotatedToken, pos};

    #[test]
    fn test_strip_filter() {
        let filter = StripFilter::new();
        let tokens = vec![
            AnnotatedToken::new("  hello  ", "hello", pos::X),
            AnnotatedToken::new("world", "world", pos::X),
            AnnotatedToken::new("   ", "   ", pos::X),
        ];

        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StripFilter::new().name(), "strip");
    }
}
