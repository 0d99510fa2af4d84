//! Error types for the textprep library.
//!
//! All failures are represented by the [`PreprocessError`] enum. The pipeline
//! itself has no recoverable error paths: errors come from out-of-domain
//! configuration values or from the annotator, and are surfaced to the caller
//! unmodified.
//!
//! # Examples
//!
//! ```
//! use textprep::error::{PreprocessError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PreprocessError::configuration("top_k must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textprep operations.
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// An option value is out of its domain (e.g. `top_k == 0`).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The annotation model could not be loaded or initialized.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The annotation model failed on a given input.
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// I/O errors (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PreprocessError.
pub type Result<T> = std::result::Result<T, PreprocessError>;

impl PreprocessError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        PreprocessError::Configuration(msg.into())
    }

    /// Create a new model unavailable error.
    pub fn model_unavailable<S: Into<String>>(msg: S) -> Self {
        PreprocessError::ModelUnavailable(msg.into())
    }

    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        PreprocessError::Annotation(msg.into())
    }

    /// Create a new annotation error for an expired deadline.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        PreprocessError::Annotation(format!("Timeout: {}", msg.into()))
    }

    /// Returns true if this error was caused by invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PreprocessError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PreprocessError::configuration("bad top_k");
        assert_eq!(error.to_string(), "Configuration error: bad top_k");
        assert!(error.is_configuration());

        let error = PreprocessError::model_unavailable("no such model");
        assert_eq!(error.to_string(), "Model unavailable: no such model");

        let error = PreprocessError::annotation("tagger crashed");
        assert_eq!(error.to_string(), "Annotation error: tagger crashed");
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_timeout_is_annotation_error() {
        let error = PreprocessError::timeout("50ms elapsed");
        assert!(matches!(error, PreprocessError::Annotation(_)));
        assert_eq!(error.to_string(), "Annotation error: Timeout: 50ms elapsed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PreprocessError::from(io_error);

        match error {
            PreprocessError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
