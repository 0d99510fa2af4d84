//! Remove empty filter implementation.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::{AnnotatedToken, pos};
//! use textprep::analysis::token_filter::Filter;
//! use textprep::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//!
//! let filter = RemoveEmptyFilter::new();
//! let tokens = vec![
//!     AnnotatedToken::new("hello", "hello", pos::X),
//!     AnnotatedToken::new("", "", pos::X),
//!     AnnotatedToken::new("world", "world", pos::X),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens with empty text from the stream.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| !token.text.is_empty())))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{AnnotatedToken, pos};

    #[test]
    fn test_remove_empty_filter() {
        let filter = RemoveEmptyFilter::new();
        let tokens = vec![
            AnnotatedToken::new("hello", "hello", pos::X),
            AnnotatedToken::new("", "", pos::X),
            AnnotatedToken::new("world", "world", pos::X),
            AnnotatedToken::new(" ", " ", pos::X),
        ];

        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, " ");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(RemoveEmptyFilter::new().name(), "remove_empty");
    }
}
