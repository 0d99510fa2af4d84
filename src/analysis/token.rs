//! Annotated token types.
//!
//! An [`AnnotatedToken`] is what an [`Annotator`](crate::analysis::annotator::Annotator)
//! produces for each tokenized unit of the normalized text. Filters consume a
//! [`TokenStream`] of annotated tokens and produce a new one.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::{AnnotatedToken, pos};
//!
//! let token = AnnotatedToken::new("running", "run", pos::VERB);
//! assert_eq!(token.text, "running");
//! assert_eq!(token.lemma, "run");
//! assert!(!token.is_punct);
//!
//! let comma = AnnotatedToken::new(",", ",", pos::PUNCT).with_punct(true);
//! assert!(comma.is_punct);
//! ```

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag names (Universal Dependencies tag set).
///
/// Annotators are free to emit other tag strings; these are the ones the
/// built-in annotator uses and the ones most NLP models agree on.
pub mod pos {
    pub const ADJ: &str = "ADJ";
    pub const ADP: &str = "ADP";
    pub const ADV: &str = "ADV";
    pub const AUX: &str = "AUX";
    pub const CCONJ: &str = "CCONJ";
    pub const DET: &str = "DET";
    pub const INTJ: &str = "INTJ";
    pub const NOUN: &str = "NOUN";
    pub const NUM: &str = "NUM";
    pub const PART: &str = "PART";
    pub const PRON: &str = "PRON";
    pub const PROPN: &str = "PROPN";
    pub const PUNCT: &str = "PUNCT";
    pub const SCONJ: &str = "SCONJ";
    pub const SYM: &str = "SYM";
    pub const VERB: &str = "VERB";
    pub const SPACE: &str = "SPACE";
    pub const X: &str = "X";
}

/// A single token as annotated by an NLP model.
///
/// Tokens are immutable once produced; filters that change the text build a
/// new token with [`AnnotatedToken::with_text`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// The raw token text
    pub text: String,

    /// The canonical (dictionary) form of the token
    pub lemma: String,

    /// Whether the model considers this token punctuation
    pub is_punct: bool,

    /// Whether the model considers this token a stopword
    pub is_stop: bool,

    /// Whether this token consists only of whitespace
    pub is_space: bool,

    /// Part-of-speech tag
    pub pos: String,
}

impl AnnotatedToken {
    /// Create a token with all flags cleared.
    pub fn new<T, L, P>(text: T, lemma: L, pos: P) -> Self
    where
        T: Into<String>,
        L: Into<String>,
        P: Into<String>,
    {
        AnnotatedToken {
            text: text.into(),
            lemma: lemma.into(),
            is_punct: false,
            is_stop: false,
            is_space: false,
            pos: pos.into(),
        }
    }

    pub fn with_punct(mut self, is_punct: bool) -> Self {
        self.is_punct = is_punct;
        self
    }

    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn with_space(mut self, is_space: bool) -> Self {
        self.is_space = is_space;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        AnnotatedToken {
            text: text.into(),
            ..self
        }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A stream of annotated tokens flowing through the filter chain.
pub type TokenStream = Box<dyn Iterator<Item = AnnotatedToken> + Send>;
