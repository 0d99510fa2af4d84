//! Space filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops tokens flagged as pure whitespace.
#[derive(Clone, Debug, Default)]
pub struct SpaceFilter;

impl SpaceFilter {
    /// Create a new space filter.
    pub fn new() -> Self {
        SpaceFilter
    }
}

impl Filter for SpaceFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| !token.is_space)))
    }

    fn name(&self) -> &'static str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{AnnotatedToken, pos};

    #[test]
    fn test_space_filter() {
        let filter = SpaceFilter::new();
        let tokens = vec![
            AnnotatedToken::new("hello", "hello", pos::X),
            AnnotatedToken::new("\n", "\n", pos::SPACE).with_space(true),
            AnnotatedToken::new("world", "world", pos::X),
        ];

        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(SpaceFilter::new().name(), "space");
    }
}
