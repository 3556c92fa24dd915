/*!
 * Outcome of a translation run.
 *
 * Each chunk carries its own status so callers can see exactly which parts
 * of the document degraded, instead of only the most recent failure.
 */

use std::time::Duration;

use crate::errors::ProviderError;

/// Outcome of one chunk
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkStatus {
    /// The provider answered; translated lines in order
    Translated { lines: Vec<String> },
    /// The provider call failed; the chunk contributes no output
    Failed { reason: ProviderError },
}

/// Per-chunk report
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkReport {
    /// Position of the chunk in source order
    pub index: usize,
    /// Text sent to the provider
    pub source: String,
    /// What happened to the chunk
    pub status: ChunkStatus,
}

impl ChunkReport {
    /// Whether the chunk was translated
    pub fn is_translated(&self) -> bool {
        matches!(self.status, ChunkStatus::Translated { .. })
    }

    /// Failure reason, if the chunk failed
    pub fn error(&self) -> Option<&ProviderError> {
        match &self.status {
            ChunkStatus::Failed { reason } => Some(reason),
            ChunkStatus::Translated { .. } => None,
        }
    }
}

/// Final bilingual document plus per-chunk outcomes
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// Source and translated lines interleaved, every line ending in `\r\n`
    pub document: String,
    /// Per-chunk outcomes in source order
    pub chunks: Vec<ChunkReport>,
    /// Wall-clock duration of the whole run
    pub elapsed: Duration,
}

impl TranslationResult {
    /// Most recent chunk failure, if any
    pub fn last_error(&self) -> Option<&ProviderError> {
        self.chunks.iter().rev().find_map(ChunkReport::error)
    }

    /// Reports of the chunks that failed
    pub fn failed_chunks(&self) -> Vec<&ChunkReport> {
        self.chunks.iter().filter(|c| !c.is_translated()).collect()
    }

    /// Whether every chunk was translated
    pub fn is_complete(&self) -> bool {
        self.chunks.iter().all(ChunkReport::is_translated)
    }
}
