/*!
 * Translation pipeline for long texts.
 *
 * This module contains the segmentation-and-reassembly pipeline. It is split
 * into several submodules:
 *
 * - `core`: The translation service running the whole pipeline
 * - `segmenter`: Sentence segmentation on a boundary marker
 * - `chunker`: Sentence-aligned chunk planning under a length limit
 * - `glossary`: Literal find/replace preprocessing
 * - `interleave`: Positional pairing of source and translated lines
 * - `result`: Per-chunk outcomes and the final document
 */

// Re-export main types for easier usage
pub use self::chunker::{Chunk, ChunkPlanner};
pub use self::core::TranslationService;
pub use self::glossary::{Glossary, GlossaryRule};
pub use self::interleave::{interleave, render_lines};
pub use self::result::{ChunkReport, ChunkStatus, TranslationResult};
pub use self::segmenter::segment_sentences;

// Submodules
pub mod chunker;
pub mod core;
pub mod glossary;
pub mod interleave;
pub mod result;
pub mod segmenter;
