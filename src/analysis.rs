//! Text analysis module.
//!
//! Provides the pieces of the preprocessing pipeline:
//!
//! ```text
//! raw text → normalizer (char filters) → annotator → token filters → frequency ranking
//! ```

pub mod annotator;
pub mod char_filter;
pub mod frequency;
pub mod normalizer;
pub mod token;
pub mod token_filter;
