/*!
 * Common test utilities for the bilingua test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use std::sync::Arc;
use anyhow::Result;
use tempfile::TempDir;

use bilingua::app_config::{Config, TranslationConfig, TranslationProvider};
use bilingua::app_controller::Controller;
use bilingua::providers::mock::MockProvider;
use bilingua::translation::TranslationService;

/// Two English sentences on one line
pub const TWO_SENTENCES: &str = "Hello world. This is a test.";

/// Short Japanese text with three sentences
pub const JAPANESE_TEXT: &str = "今日は晴れです。明日は雨です。週末は雪です。";

/// Initialize env_logger once; later calls are no-ops
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// English text made of `count` sentences of `len` characters each, marker included
pub fn latin_sentences(count: usize, len: usize) -> String {
    (0..count)
        .map(|i| {
            let filler = char::from(b'a' + (i % 26) as u8);
            let mut sentence: String = std::iter::repeat(filler).take(len - 1).collect();
            sentence.push('.');
            sentence
        })
        .collect()
}

/// Translation config using the mock provider
pub fn mock_translation_config() -> TranslationConfig {
    TranslationConfig {
        provider: TranslationProvider::Mock,
        ..TranslationConfig::default()
    }
}

/// Service wired to the given mock; the mock keeps a shared request log
pub fn service_with_mock(config: TranslationConfig, mock: &MockProvider) -> TranslationService {
    TranslationService::with_provider(config, Arc::new(mock.clone()))
}

/// Controller translating English to French through the given mock
pub fn controller_with_mock(mock: &MockProvider) -> Controller {
    let config = Config {
        source_language: "English".to_string(),
        target_language: "French".to_string(),
        ..Config::default()
    };
    let service = service_with_mock(mock_translation_config(), mock);
    Controller::with_service(config, service).show_progress(false)
}
