//! Text normalization applied before annotation.
//!
//! The [`Normalizer`] is a chain of [`CharFilter`]s assembled from a
//! [`PreprocessConfig`]:
//!
//! ```text
//! lowercase? → collapse whitespace → trim → [strip digits → collapse whitespace → trim]?
//! ```
//!
//! Digit removal can leave new runs of spaces behind ("in 2026 and" becomes
//! "in  and"), so the whitespace stages run again after it.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::normalizer::normalize;
//! use textprep::config::PreprocessConfig;
//!
//! let config = PreprocessConfig::default().with_remove_numbers(true);
//! assert_eq!(normalize("  Learning NLP\n in 2026 ", &config), "learning nlp in");
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::trim::TrimCharFilter;
use crate::config::PreprocessConfig;

static COLLAPSE_WHITESPACE: LazyLock<Arc<PatternReplaceCharFilter>> = LazyLock::new(|| {
    // Information separators U+001C..U+001F count as whitespace too.
    Arc::new(
        PatternReplaceCharFilter::new(r"[\s\x1c-\x1f]+", " ")
            .expect("whitespace pattern is valid"),
    )
});

static STRIP_DIGITS: LazyLock<Arc<PatternReplaceCharFilter>> = LazyLock::new(|| {
    Arc::new(PatternReplaceCharFilter::new(r"\d+", "").expect("digit pattern is valid"))
});

/// A deterministic chain of char filters.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Normalizer {
    /// Build the normalization chain for the given configuration.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::with_capacity(6);
        let trim: Arc<dyn CharFilter> = Arc::new(TrimCharFilter::new());

        if config.lowercase {
            char_filters.push(Arc::new(LowercaseCharFilter::new()));
        }

        char_filters.push(COLLAPSE_WHITESPACE.clone());
        char_filters.push(trim.clone());

        if config.remove_numbers {
            char_filters.push(STRIP_DIGITS.clone());
            char_filters.push(COLLAPSE_WHITESPACE.clone());
            char_filters.push(trim);
        }

        log::trace!(
            "normalizer chain: [{}]",
            char_filters
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Normalizer { char_filters }
    }

    /// Apply every char filter in order.
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for char_filter in &self.char_filters {
            normalized = char_filter.filter(&normalized);
        }
        normalized
    }

    /// Get the char filters used by this normalizer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

/// Normalize `text` according to `config`.
pub fn normalize(text: &str, config: &PreprocessConfig) -> String {
    Normalizer::from_config(config).normalize(text)
}
