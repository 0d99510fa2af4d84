//! Rule-based annotator implementation.
//!
//! A deterministic annotator for environments without an external NLP
//! model, and for tests. It segments text on Unicode word boundaries
//! (UAX #29) and derives every annotation from character classes or from
//! lexicons supplied by the caller:
//!
//! - whitespace / punctuation / number / symbol flags and tags come from the
//!   characters of the segment
//! - stopword flags come from a stopword lexicon (English by default)
//! - lemmas come from a lemma lexicon, falling back to the lowercased text
//! - word tags come from a tag lexicon, falling back to `X`
//!
//! No statistical tagging or morphological analysis is attempted.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::annotator::Annotator;
//! use textprep::analysis::annotator::rule_based::RuleBasedAnnotator;
//!
//! let annotator = RuleBasedAnnotator::new().with_lemmas([("cats", "cat")]);
//! let tokens = annotator.annotate("the cats!").unwrap();
//!
//! assert_eq!(tokens.len(), 4); // "the", " ", "cats", "!"
//! assert!(tokens[0].is_stop);
//! assert!(tokens[1].is_space);
//! assert_eq!(tokens[2].lemma, "cat");
//! assert!(tokens[3].is_punct);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::annotator::Annotator;
use crate::analysis::token::{AnnotatedToken, pos};
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<AHashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// ASCII punctuation characters that are symbols rather than punctuation.
const ASCII_SYMBOLS: &[char] = &['$', '+', '<', '=', '>', '^', '`', '|', '~'];

/// A lexicon-driven annotator that needs no external model.
#[derive(Clone, Debug)]
pub struct RuleBasedAnnotator {
    stop_words: Arc<AHashSet<String>>,
    lemmas: Arc<AHashMap<String, String>>,
    pos_tags: Arc<AHashMap<String, String>>,
}

impl RuleBasedAnnotator {
    /// Create an annotator with the default English stop words and empty
    /// lemma and tag lexicons.
    pub fn new() -> Self {
        RuleBasedAnnotator {
            stop_words: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            lemmas: Arc::new(AHashMap::new()),
            pos_tags: Arc::new(AHashMap::new()),
        }
    }

    /// Replace the stopword lexicon. Entries are matched case-insensitively.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = Arc::new(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Add `(form, lemma)` entries to the lemma lexicon.
    pub fn with_lemmas<I, F, L>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: Into<String>,
    {
        let lemmas = Arc::make_mut(&mut self.lemmas);
        for (form, lemma) in entries {
            lemmas.insert(form.as_ref().to_lowercase(), lemma.into());
        }
        self
    }

    /// Add `(form, tag)` entries to the part-of-speech lexicon.
    pub fn with_pos_tags<I, F, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: Into<String>,
    {
        let pos_tags = Arc::make_mut(&mut self.pos_tags);
        for (form, tag) in entries {
            pos_tags.insert(form.as_ref().to_lowercase(), tag.into());
        }
        self
    }

    /// Check if a word is in the stopword lexicon.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    fn is_punctuation(c: char) -> bool {
        if c.is_ascii() {
            return c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(&c);
        }
        matches!(c,
            '¡' | '§' | '«' | '¶' | '·' | '»' | '¿' |
            '\u{2010}'..='\u{2027}' |  // General Punctuation: dashes, quotes, bullets
            '\u{2030}'..='\u{205E}' |  // General Punctuation: primes, brackets
            '\u{3001}'..='\u{3003}' |  // CJK comma, full stop, ditto
            '\u{3008}'..='\u{3011}' |  // CJK brackets
            '\u{3014}'..='\u{301F}' |  // CJK brackets
            '\u{FF01}'..='\u{FF0F}'    // Fullwidth ASCII punctuation
        )
    }

    fn is_number(segment: &str) -> bool {
        segment.chars().any(|c| c.is_numeric())
            && segment
                .chars()
                .all(|c| c.is_numeric() || c == '.' || c == ',')
    }

    fn annotate_segment(&self, segment: &str) -> AnnotatedToken {
        if segment.chars().all(char::is_whitespace) {
            return AnnotatedToken::new(segment, segment, pos::SPACE).with_space(true);
        }

        if segment.chars().all(Self::is_punctuation) {
            return AnnotatedToken::new(segment, segment, pos::PUNCT).with_punct(true);
        }

        if Self::is_number(segment) {
            return AnnotatedToken::new(segment, segment, pos::NUM);
        }

        if !segment.chars().any(char::is_alphanumeric) {
            return AnnotatedToken::new(segment, segment, pos::SYM);
        }

        let folded = segment.to_lowercase();
        let lemma = self.lemmas.get(&folded).cloned().unwrap_or_else(|| folded.clone());
        let tag = self
            .pos_tags
            .get(&folded)
            .map(String::as_str)
            .unwrap_or(pos::X);

        AnnotatedToken::new(segment, lemma, tag).with_stop(self.stop_words.contains(&folded))
    }
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        Ok(text
            .split_word_bounds()
            .map(|segment| self.annotate_segment(segment))
            .collect())
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[AnnotatedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_segments_words_spaces_and_punctuation() {
        let annotator = RuleBasedAnnotator::new();
        let tokens = annotator.annotate("cats cats dogs!").unwrap();

        assert_eq!(texts(&tokens), vec!["cats", " ", "cats", " ", "dogs", "!"]);
        assert!(tokens[1].is_space);
        assert_eq!(tokens[1].pos, pos::SPACE);
        assert!(tokens[5].is_punct);
        assert_eq!(tokens[5].pos, pos::PUNCT);
        assert!(!tokens[0].is_punct && !tokens[0].is_space);
    }

    #[test]
    fn test_stop_words_case_insensitive() {
        let annotator = RuleBasedAnnotator::new();
        let tokens = annotator.annotate("The fox").unwrap();
        assert!(tokens[0].is_stop);
        assert!(!tokens[2].is_stop);
        assert!(annotator.is_stop_word("AND"));
    }

    #[test]
    fn test_custom_stop_words_replace_defaults() {
        let annotator = RuleBasedAnnotator::new().with_stop_words(["Fox"]);
        let tokens = annotator.annotate("the fox").unwrap();
        assert!(!tokens[0].is_stop);
        assert!(tokens[2].is_stop);
    }

    #[test]
    fn test_lemma_and_tag_lexicons() {
        let annotator = RuleBasedAnnotator::new()
            .with_lemmas([("running", "run")])
            .with_pos_tags([("running", pos::VERB), ("fox", pos::NOUN)]);
        let tokens = annotator.annotate("Running Fox quickly").unwrap();

        assert_eq!(tokens[0].text, "Running");
        assert_eq!(tokens[0].lemma, "run");
        assert_eq!(tokens[0].pos, pos::VERB);
        assert_eq!(tokens[2].lemma, "fox");
        assert_eq!(tokens[2].pos, pos::NOUN);
        assert_eq!(tokens[4].lemma, "quickly");
        assert_eq!(tokens[4].pos, pos::X);
    }

    #[test]
    fn test_numbers_and_symbols() {
        let annotator = RuleBasedAnnotator::new();
        let tokens = annotator.annotate("pay $ 3.14 now").unwrap();

        assert_eq!(tokens[2].text, "$");
        assert_eq!(tokens[2].pos, pos::SYM);
        assert!(!tokens[2].is_punct);
        assert_eq!(tokens[4].text, "3.14");
        assert_eq!(tokens[4].pos, pos::NUM);
    }

    #[test]
    fn test_unicode_punctuation() {
        let annotator = RuleBasedAnnotator::new();
        let tokens = annotator.annotate("«oui» — non").unwrap();
        assert!(tokens[0].is_punct);
        assert_eq!(tokens[1].text, "oui");
        assert!(tokens[2].is_punct);
        assert!(tokens[4].is_punct);
    }

    #[test]
    fn test_empty_text() {
        let annotator = RuleBasedAnnotator::new();
        assert!(annotator.annotate("").unwrap().is_empty());
    }

    #[test]
    fn test_annotator_name() {
        assert_eq!(RuleBasedAnnotator::new().name(), "rule_based");
    }
}
