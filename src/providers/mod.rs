/*!
 * Provider implementations for machine-translation endpoints.
 *
 * This module contains the client implementations used by the translation
 * service:
 * - Google: the public `translate_a/single` endpoint
 * - Mock: an offline provider for tests and dry runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single chunk translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRequest {
    /// Text to translate, at most one chunk long
    pub text: String,
    /// Provider identifier of the source language (may be empty)
    pub source_language: String,
    /// Provider identifier of the target language (may be empty)
    pub target_language: String,
}

impl ChunkRequest {
    /// Create a new chunk request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Decoded provider answer for one chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkResponse {
    /// Translated lines in order; the count may differ from the source
    pub lines: Vec<String>,
}

/// Common trait for all translation providers
///
/// A provider issues exactly one remote call per request and never retries;
/// any failure is returned to the caller, which decides how to degrade.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate one chunk
    async fn complete(&self, request: ChunkRequest) -> Result<ChunkResponse, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short provider name used in logs
    fn name(&self) -> &str;
}

pub mod google;
pub mod mock;
