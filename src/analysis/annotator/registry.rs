//! Model registry for named annotators.
//!
//! A [`ModelRegistry`] maps model names to loader functions. Loading a model
//! is the single lifecycle operation this crate performs on an annotator:
//! the loader runs once and the resulting annotator is shared from then on.
//!
//! The process-wide registry returned by [`ModelRegistry::global`] ships
//! with the built-in `"rule_based"` model. Integrations with external NLP
//! libraries register their own loaders under their own names.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textprep::analysis::annotator::{Annotator, ModelRegistry, RuleBasedAnnotator};
//!
//! let registry = ModelRegistry::new();
//! registry.register("en_small", || {
//!     let annotator: Arc<dyn Annotator> =
//!         Arc::new(RuleBasedAnnotator::new().with_lemmas([("mice", "mouse")]));
//!     Ok(annotator)
//! });
//!
//! let model = registry.load("en_small").unwrap();
//! assert_eq!(model.name(), "rule_based");
//! assert!(registry.load("de_large").is_err());
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::analysis::annotator::Annotator;
use crate::analysis::annotator::rule_based::RuleBasedAnnotator;
use crate::error::{PreprocessError, Result};

/// Name of the built-in rule-based model.
pub const RULE_BASED_MODEL: &str = "rule_based";

/// A function that initializes an annotator.
pub type ModelLoader = Arc<dyn Fn() -> Result<Arc<dyn Annotator>> + Send + Sync>;

static GLOBAL_REGISTRY: LazyLock<ModelRegistry> = LazyLock::new(ModelRegistry::with_defaults);

/// Thread-safe mapping from model names to loaders.
pub struct ModelRegistry {
    loaders: RwLock<AHashMap<String, ModelLoader>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ModelRegistry {
            loaders: RwLock::new(AHashMap::new()),
        }
    }

    /// Create a registry containing the built-in models.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(RULE_BASED_MODEL, || {
            let annotator: Arc<dyn Annotator> = Arc::new(RuleBasedAnnotator::new());
            Ok(annotator)
        });
        registry
    }

    /// The process-wide registry.
    pub fn global() -> &'static ModelRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register (or replace) the loader for `name`.
    pub fn register<S, F>(&self, name: S, loader: F)
    where
        S: Into<String>,
        F: Fn() -> Result<Arc<dyn Annotator>> + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("registering annotation model '{name}'");
        self.loaders.write().insert(name, Arc::new(loader));
    }

    /// Remove the loader for `name`, returning whether one was registered.
    pub fn unregister(&self, name: &str) -> bool {
        self.loaders.write().remove(name).is_some()
    }

    /// Check whether a loader is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.read().contains_key(name)
    }

    /// Registered model names in sorted order.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loaders.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Load the model registered under `name`.
    ///
    /// Unknown names and loader failures are both reported as
    /// [`PreprocessError::ModelUnavailable`].
    pub fn load(&self, name: &str) -> Result<Arc<dyn Annotator>> {
        // Clone the loader out so it does not run under the lock.
        let loader = self.loaders.read().get(name).cloned();
        let loader = loader.ok_or_else(|| {
            PreprocessError::model_unavailable(format!(
                "unknown model '{name}' (registered: {})",
                self.model_names().join(", ")
            ))
        })?;

        match loader() {
            Ok(annotator) => {
                log::info!("loaded annotation model '{name}' ({})", annotator.name());
                Ok(annotator)
            }
            Err(err @ PreprocessError::ModelUnavailable(_)) => Err(err),
            Err(err) => Err(PreprocessError::model_unavailable(format!(
                "model '{name}' failed to load: {err}"
            ))),
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
