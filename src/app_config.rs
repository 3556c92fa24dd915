//! Application configuration module
//!
//! This module handles the application configuration including loading,
//! validating and saving configuration settings.

use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::language_utils::{self, LanguageTable};
use crate::providers::google;
use crate::translation::chunker::DEFAULT_MAX_CHUNK_LEN;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language name (e.g. "Japanese")
    pub source_language: String,

    /// Target language name (e.g. "English")
    pub target_language: String,

    /// Optional glossary file applied before segmentation
    #[serde(default)]
    pub glossary_path: Option<String>,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google translate web endpoint
    #[default]
    Google,
    // @provider: Offline mock, echoes tagged source lines
    Mock,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::Mock => "Mock",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Endpoint URL, without query
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value of the `client` query parameter
    #[serde(default = "default_client_tag")]
    pub client_tag: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum chunk length in characters
    #[serde(default = "default_max_chunk_len")]
    pub max_chunk_len: usize,

    /// Sentence boundary marker; derived from the source language when unset
    #[serde(default)]
    pub boundary_marker: Option<char>,

    /// Terminate every chunk's output with an extra blank line
    #[serde(default = "default_true")]
    pub separate_chunks: bool,

    /// Pause between consecutive chunk requests in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_endpoint(),
            client_tag: default_client_tag(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_chunk_len: default_max_chunk_len(),
            boundary_marker: None,
            separate_chunks: true,
            request_delay_ms: 0,
        }
    }
}

impl TranslationConfig {
    /// Boundary marker for a source language, honoring the configured override
    pub fn boundary_marker_for(&self, source_language: &str) -> char {
        self.boundary_marker
            .unwrap_or_else(|| language_utils::boundary_marker_for(source_language))
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    google::DEFAULT_ENDPOINT.to_string()
}

fn default_client_tag() -> String {
    google::DEFAULT_CLIENT_TAG.to_string()
}

fn default_user_agent() -> String {
    google::DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    google::DEFAULT_TIMEOUT_SECS
}

fn default_max_chunk_len() -> usize {
    DEFAULT_MAX_CHUNK_LEN
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values.
    ///
    /// Unknown language names are reported but accepted; they resolve to an
    /// empty provider identifier at translation time.
    pub fn validate(&self) -> Result<()> {
        let languages = LanguageTable::shared();
        for (role, name) in [("source", &self.source_language), ("target", &self.target_language)] {
            if !languages.is_supported(name) {
                warn!("Unknown {} language '{}', it will be sent as an empty identifier", role, name);
            }
        }

        if self.translation.max_chunk_len == 0 {
            return Err(anyhow!("max_chunk_len must be greater than zero"));
        }

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }

        if self.translation.provider == TranslationProvider::Google {
            Url::parse(&self.translation.endpoint)
                .map_err(|e| anyhow!("Invalid endpoint '{}': {}", self.translation.endpoint, e))?;
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "Japanese".to_string(),
            target_language: "English".to_string(),
            glossary_path: None,
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
