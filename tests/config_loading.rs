//! Integration tests for loading pipeline configuration from files.

use std::io::Write;

use tempfile::NamedTempFile;
use textprep::config::PreprocessConfig;
use textprep::error::{PreprocessError, Result};
use textprep::preprocessor::TextPreprocessor;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() -> Result<()> {
    let file = write_config(
        r#"{
            "remove_numbers": true,
            "lemmatize": false,
            "keep_pos": ["NUM", "X"],
            "min_token_len": 3
        }"#,
    );

    let config = PreprocessConfig::from_file(file.path())?;
    assert!(config.remove_numbers);
    assert!(!config.lemmatize);
    assert!(config.lowercase);
    assert_eq!(config.min_token_len, 3);

    let preprocessor = TextPreprocessor::load("rule_based", config)?;
    let tokens = preprocessor.preprocess("Rust 2024 edition ships; the edition is stable")?;
    assert_eq!(tokens, vec!["rust", "edition", "ships", "edition", "stable"]);

    Ok(())
}

#[test]
fn test_negative_min_token_len_in_file() {
    let file = write_config(r#"{"min_token_len": -1}"#);
    let err = PreprocessConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PreprocessError::Configuration(_)));
}

#[test]
fn test_malformed_file() {
    let file = write_config("lowercase = true");
    let err = PreprocessConfig::from_file(file.path()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PreprocessConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PreprocessError::Io(_)));
}
