/*!
 * Core translation service implementation.
 *
 * This module contains the `TranslationService`, which runs the whole
 * pipeline for one document: glossary substitution, sentence segmentation,
 * chunk planning, one provider call per chunk and positional interleaving
 * of source and translated lines.
 */

use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils::LanguageTable;
use crate::providers::google::GoogleTranslate;
use crate::providers::mock::MockProvider;
use crate::providers::{ChunkRequest, Provider};

use super::chunker::{Chunk, ChunkPlanner};
use super::glossary::Glossary;
use super::interleave::{interleave, render_lines};
use super::result::{ChunkReport, ChunkStatus, TranslationResult};
use super::segmenter::{LINE_BREAK, count_boundaries, segment_sentences};

/// Main translation service
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Language name to provider identifier table
    languages: Arc<LanguageTable>,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let provider: Arc<dyn Provider> = match config.provider {
            ConfigTranslationProvider::Google => {
                if config.endpoint.is_empty() {
                    return Err(anyhow!("Endpoint cannot be empty"));
                }
                Arc::new(GoogleTranslate::new_with_config(
                    config.endpoint.clone(),
                    config.client_tag.clone(),
                    config.user_agent.clone(),
                    config.timeout_secs,
                ))
            }
            ConfigTranslationProvider::Mock => Arc::new(MockProvider::working()),
        };

        Ok(Self::with_provider(config, provider))
    }

    /// Create a service around an existing provider
    pub fn with_provider(config: TranslationConfig, provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            languages: LanguageTable::shared(),
            config,
        }
    }

    /// Replace the language table
    pub fn with_languages(mut self, languages: Arc<LanguageTable>) -> Self {
        self.languages = languages;
        self
    }

    /// Language table used to resolve names
    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Test the connection to the provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }

    /// Translate a document.
    ///
    /// Only an unreadable glossary aborts the run; provider failures degrade
    /// the affected chunk to empty output and are reported per chunk.
    pub async fn translate(
        &self,
        source_text: &str,
        source_language: &str,
        target_language: &str,
        glossary_path: Option<&Path>,
    ) -> Result<TranslationResult, TranslationError> {
        self.translate_with_progress(source_text, source_language, target_language, glossary_path, |_, _| {})
            .await
    }

    /// Translate a document, reporting `(done, total)` chunks after each one
    pub async fn translate_with_progress<F>(
        &self,
        source_text: &str,
        source_language: &str,
        target_language: &str,
        glossary_path: Option<&Path>,
        on_progress: F,
    ) -> Result<TranslationResult, TranslationError>
    where
        F: Fn(usize, usize),
    {
        let start_time = Instant::now();

        let source_id = self.resolve_language(source_language, "source");
        let target_id = self.resolve_language(target_language, "target");

        let glossary = match glossary_path {
            Some(path) => Glossary::load(path)?,
            None => Glossary::new(),
        };
        let text = glossary.apply(source_text);

        let marker = self.config.boundary_marker_for(source_language);
        let segmented = segment_sentences(&text, marker);
        debug!("Found {} sentence boundaries on {:?}", count_boundaries(&text, marker), marker);
        let chunks = ChunkPlanner::new(self.config.max_chunk_len, marker).plan(&segmented);

        info!(
            "Translating {} chunk(s) from {} to {} with {}",
            chunks.len(),
            source_language,
            target_language,
            self.provider.name()
        );

        let mut document = String::with_capacity(segmented.len() * 2);
        let mut reports = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            if chunk.index > 0 && self.config.request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.request_delay_ms)).await;
            }

            let report = self.translate_chunk(chunk, source_id, target_id).await;

            if let ChunkStatus::Translated { lines } = &report.status {
                document.push_str(&render_lines(&interleave(&chunk.source_lines(), lines)));
            }
            if self.config.separate_chunks {
                document.push_str(LINE_BREAK);
            }

            reports.push(report);
            on_progress(chunk.index + 1, chunks.len());
        }

        let result = TranslationResult {
            document,
            chunks: reports,
            elapsed: start_time.elapsed(),
        };

        let failed = result.failed_chunks().len();
        if failed > 0 {
            warn!("{} of {} chunk(s) could not be translated", failed, result.chunks.len());
        }

        Ok(result)
    }

    /// Translate a single chunk; failures are captured in the report
    async fn translate_chunk(&self, chunk: &Chunk, source_id: &str, target_id: &str) -> ChunkReport {
        let text = chunk.request_text();

        if text.trim().is_empty() {
            debug!("Chunk {} is blank, skipping request", chunk.index + 1);
            return ChunkReport {
                index: chunk.index,
                source: text.to_string(),
                status: ChunkStatus::Translated { lines: Vec::new() },
            };
        }

        let request = ChunkRequest::new(text, source_id, target_id);
        let status = match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    "Chunk {} translated: {} source line(s), {} translated line(s)",
                    chunk.index + 1,
                    chunk.source_lines().len(),
                    response.lines.len()
                );
                ChunkStatus::Translated { lines: response.lines }
            }
            Err(e) => {
                error!("Chunk {} failed: {}", chunk.index + 1, e);
                ChunkStatus::Failed { reason: e }
            }
        };

        ChunkReport {
            index: chunk.index,
            source: text.to_string(),
            status,
        }
    }

    fn resolve_language(&self, language: &str, role: &str) -> &'static str {
        let id = self.languages.identifier(language);
        if id.is_empty() {
            warn!("Unknown {} language '{}', sending an empty identifier", role, language);
        }
        id
    }
}
