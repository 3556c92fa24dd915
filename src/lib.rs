/*!
 * # bilingua - bilingual long-text translator
 *
 * A Rust library that translates long plain texts through a free
 * machine-translation web endpoint and produces a bilingual document where
 * every source line is followed by its translation.
 *
 * ## Features
 *
 * - Sentence segmentation on a per-language boundary marker
 * - Sentence-aligned chunking under the endpoint's request length limit
 * - Glossary find/replace applied before translation
 * - Positional interleaving of source and translated lines
 * - Per-chunk failure reporting; a failed chunk never aborts the document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: The segmentation and reassembly pipeline:
 *   - `translation::core`: The translation service
 *   - `translation::segmenter`: Sentence segmentation
 *   - `translation::chunker`: Chunk planning
 *   - `translation::glossary`: Glossary preprocessing
 *   - `translation::interleave`: Line interleaving
 *   - `translation::result`: Per-chunk outcomes
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Language names and provider identifiers
 * - `providers`: Translation endpoint clients:
 *   - `providers::google`: Google translate web endpoint and payload decoder
 *   - `providers::mock`: Offline provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use translation::{TranslationResult, TranslationService};
pub use language_utils::{LanguageTable, boundary_marker_for};
pub use errors::{ProviderError, TranslationError};
