//! Configuration for the preprocessing pipeline.
//!
//! [`PreprocessConfig`] is built once and read for the lifetime of a
//! [`TextPreprocessor`](crate::preprocessor::TextPreprocessor). Every field
//! toggles exactly one normalization or filter stage.
//!
//! # Examples
//!
//! ```
//! use textprep::config::PreprocessConfig;
//!
//! let config = PreprocessConfig::default()
//!     .with_remove_numbers(true)
//!     .with_min_token_len(3);
//!
//! assert!(config.lowercase);
//! assert!(config.remove_numbers);
//! assert_eq!(config.min_token_len, 3);
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};

/// A set of part-of-speech tags to keep.
///
/// Wrapped in an `Option` on [`PreprocessConfig`]: `None` disables the
/// part-of-speech stage, while an empty set drops every token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosTagSet(BTreeSet<String>);

impl PosTagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        PosTagSet(BTreeSet::new())
    }

    /// Check whether the given tag is a member.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag to the set.
    pub fn insert<S: Into<String>>(&mut self, tag: S) -> bool {
        self.0.insert(tag.into())
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set has no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PosTagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PosTagSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Configuration for text normalization and token filtering.
///
/// Deserialization fills any missing field with its default, so a JSON
/// document only needs to mention the options it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Fold text to lowercase before tokenization.
    pub lowercase: bool,

    /// Drop tokens the annotator flags as punctuation.
    pub remove_punct: bool,

    /// Delete runs of decimal digits before tokenization.
    pub remove_numbers: bool,

    /// Drop tokens the annotator flags as stopwords.
    pub remove_stopwords: bool,

    /// Emit the lemma instead of the raw token text.
    pub lemmatize: bool,

    /// Keep only tokens whose part-of-speech tag is in this set.
    pub keep_pos: Option<PosTagSet>,

    /// Minimum token length in characters. Zero disables the check.
    pub min_token_len: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_punct: true,
            remove_numbers: false,
            remove_stopwords: true,
            lemmatize: true,
            keep_pos: None,
            min_token_len: 2,
        }
    }
}

impl PreprocessConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// ```
    /// use textprep::config::PreprocessConfig;
    ///
    /// let config = PreprocessConfig::from_json(r#"{"lemmatize": false}"#).unwrap();
    /// assert!(!config.lemmatize);
    /// assert_eq!(config.min_token_len, 2);
    ///
    /// assert!(PreprocessConfig::from_json(r#"{"min_token_len": -1}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PreprocessConfig = serde_json::from_str(json).map_err(|e| {
            PreprocessError::configuration(format!("invalid preprocess configuration: {e}"))
        })?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Set whether text is folded to lowercase.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set whether punctuation tokens are dropped.
    pub fn with_remove_punct(mut self, remove_punct: bool) -> Self {
        self.remove_punct = remove_punct;
        self
    }

    /// Set whether digit runs are deleted during normalization.
    pub fn with_remove_numbers(mut self, remove_numbers: bool) -> Self {
        self.remove_numbers = remove_numbers;
        self
    }

    /// Set whether stopword tokens are dropped.
    pub fn with_remove_stopwords(mut self, remove_stopwords: bool) -> Self {
        self.remove_stopwords = remove_stopwords;
        self
    }

    /// Set whether tokens are replaced by their lemma.
    pub fn with_lemmatize(mut self, lemmatize: bool) -> Self {
        self.lemmatize = lemmatize;
        self
    }

    /// Restrict output to the given part-of-speech tags.
    pub fn with_keep_pos<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_pos = Some(tags.into_iter().collect());
        self
    }

    /// Disable the part-of-speech stage.
    pub fn without_keep_pos(mut self) -> Self {
        self.keep_pos = None;
        self
    }

    /// Set the minimum token length in characters (0 disables the check).
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }
}
