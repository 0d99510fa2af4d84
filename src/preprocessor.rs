//! The end-to-end preprocessing pipeline.
//!
//! [`TextPreprocessor`] ties a loaded annotator to a configuration:
//!
//! ```text
//! text → Normalizer → Annotator → FilterChain → tokens → rank → PipelineOutput
//! ```
//!
//! The normalizer and filter chain are built once from the configuration;
//! the annotator is shared read-only between calls and, for batches, between
//! worker threads.
//!
//! # Examples
//!
//! ```
//! use textprep::config::PreprocessConfig;
//! use textprep::preprocessor::TextPreprocessor;
//!
//! let config = PreprocessConfig::default().with_remove_stopwords(false);
//! let preprocessor = TextPreprocessor::load("rule_based", config).unwrap();
//!
//! let output = preprocessor.full_pipeline("Cats cats DOGS!", 2).unwrap();
//! assert_eq!(output.num_tokens, 3);
//! assert_eq!(output.tokens, vec!["cats", "cats", "dogs"]);
//! assert_eq!(output.ranking[0], ("cats".to_string(), 2));
//! ```

use std::sync::Arc;
use std::time::Duration;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::annotator::{Annotator, DeadlineAnnotator, ModelRegistry};
use crate::analysis::frequency;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::token_filter::FilterChain;
use crate::config::PreprocessConfig;
use crate::error::{PreprocessError, Result};

/// Number of ranked words returned when the caller has no preference.
pub const DEFAULT_TOP_K: usize = 20;

/// Result of a full pipeline run.
///
/// Serializes as `{"num_tokens": .., "tokens": [..], "top_k": [[word, count], ..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Number of surviving tokens (duplicates included)
    pub num_tokens: usize,

    /// Surviving tokens in source order
    pub tokens: Vec<String>,

    /// Most frequent tokens with their counts
    #[serde(rename = "top_k")]
    pub ranking: Vec<(String, usize)>,
}

impl PipelineOutput {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A configured preprocessing pipeline bound to one annotator.
#[derive(Clone)]
pub struct TextPreprocessor {
    annotator: Arc<dyn Annotator>,
    config: PreprocessConfig,
    normalizer: Normalizer,
    filters: FilterChain,
}

impl TextPreprocessor {
    /// Create a pipeline around an already loaded annotator.
    pub fn new(annotator: Arc<dyn Annotator>, config: PreprocessConfig) -> Self {
        let normalizer = Normalizer::from_config(&config);
        let filters = FilterChain::from_config(&config);

        log::debug!(
            "preprocessor ready: annotator={} filters=[{}]",
            annotator.name(),
            filters.names().join(", ")
        );

        TextPreprocessor {
            annotator,
            config,
            normalizer,
            filters,
        }
    }

    /// Load `model` from the process-wide [`ModelRegistry`].
    pub fn load(model: &str, config: PreprocessConfig) -> Result<Self> {
        Self::load_from(ModelRegistry::global(), model, config)
    }

    /// Load `model` from the given registry.
    pub fn load_from(
        registry: &ModelRegistry,
        model: &str,
        config: PreprocessConfig,
    ) -> Result<Self> {
        let annotator = registry.load(model)?;
        Ok(Self::new(annotator, config))
    }

    /// Bound every annotation call by `deadline`.
    ///
    /// Each annotation call spawns its own OS thread. A call that times out
    /// leaves its thread running until the annotator returns, so an
    /// annotator that never returns leaks one thread per call, and
    /// [`full_pipeline_batch`](Self::full_pipeline_batch) spawns one thread
    /// per text.
    pub fn with_deadline(mut self, deadline: Duration) -> Result<Self> {
        let annotator = DeadlineAnnotator::new(Arc::clone(&self.annotator), deadline)?;
        self.annotator = Arc::new(annotator);
        Ok(self)
    }

    /// Get the configuration.
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Get the annotator.
    pub fn annotator(&self) -> &Arc<dyn Annotator> {
        &self.annotator
    }

    /// Get the token filter chain.
    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    /// Apply text-level normalization only.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Normalize, annotate and filter `text`.
    pub fn preprocess(&self, text: &str) -> Result<Vec<String>> {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let annotated = self.annotator.annotate(&normalized)?;
        let annotated_count = annotated.len();
        let tokens = self.filters.apply(annotated)?;

        log::debug!(
            "preprocessed {} chars: {} annotated, {} kept",
            normalized.chars().count(),
            annotated_count,
            tokens.len()
        );

        Ok(tokens)
    }

    /// The `top_k` most frequent tokens with their counts.
    pub fn word_frequencies<S: AsRef<str>>(
        &self,
        tokens: &[S],
        top_k: usize,
    ) -> Result<Vec<(String, usize)>> {
        frequency::rank(tokens, top_k)
    }

    /// Preprocess `text` and rank the resulting tokens.
    pub fn full_pipeline(&self, text: &str, top_k: usize) -> Result<PipelineOutput> {
        if top_k == 0 {
            return Err(PreprocessError::configuration(
                "top_k must be greater than zero",
            ));
        }

        let tokens = self.preprocess(text)?;
        let ranking = self.word_frequencies(&tokens, top_k)?;

        Ok(PipelineOutput {
            num_tokens: tokens.len(),
            tokens,
            ranking,
        })
    }

    /// Run [`full_pipeline`](Self::full_pipeline) over independent texts in
    /// parallel. Outputs are returned in input order; the first error aborts
    /// the batch.
    pub fn full_pipeline_batch<S>(&self, texts: &[S], top_k: usize) -> Result<Vec<PipelineOutput>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("running batch of {} texts", texts.len());
        texts
            .par_iter()
            .map(|text| self.full_pipeline(text.as_ref(), top_k))
            .collect()
    }
}
