use anyhow::{Result, Context};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{error, warn, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::{Config, TranslationProvider};
use crate::file_utils::FileManager;
use crate::translation::{TranslationResult, TranslationService};

// @module: Application controller for document translation

/// Extension of the documents read and written by the controller
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Main application controller for document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation pipeline
    service: TranslationService,
    // @field: Draw progress bars on stderr
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::new(config.translation.clone())
            .context("Failed to create translation service")?;

        Ok(Self {
            config,
            service,
            show_progress: true,
        })
    }

    /// Create a controller around an existing translation service
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self {
            config,
            service,
            show_progress: true,
        }
    }

    /// Create a controller on the offline mock provider, without progress bars
    pub fn new_for_test() -> Result<Self> {
        let mut config = Config::default();
        config.translation.provider = TranslationProvider::Mock;
        Ok(Self::with_config(config)?.show_progress(false))
    }

    /// Enable or disable progress bars
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provider identifier of the target language, used in output file names
    pub fn target_suffix(&self) -> String {
        let id = self.service.languages().identifier(&self.config.target_language);
        if id.is_empty() {
            self.config.target_language.to_lowercase().replace(' ', "_")
        } else {
            id.to_string()
        }
    }

    /// Translate text with the configured languages and glossary
    pub async fn translate_text(&self, text: &str) -> Result<TranslationResult> {
        let multi_progress = MultiProgress::new();
        self.translate_with_progress(text, &multi_progress).await
    }

    /// Translate one document and write `<stem>.<target>.txt` into `output_dir`.
    ///
    /// Returns the written path, or `None` when the output already exists and
    /// `force_overwrite` is off.
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let multi_progress = MultiProgress::new();
        self.run_with_progress(&input_file, &output_dir, &multi_progress, force_overwrite).await
    }

    async fn run_with_progress(
        &self,
        input_file: &Path,
        output_dir: &Path,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<Option<PathBuf>> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(output_dir)?;

        let output_path = FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.target_suffix(),
            DOCUMENT_EXTENSION,
        );
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, translation already exists (use -f to force overwrite)", input_file);
            return Ok(None);
        }

        let content = FileManager::read_to_string(input_file)?;
        let result = self.translate_with_progress(&content, multi_progress).await?;

        FileManager::write_to_file(&output_path, &result.document)?;

        let failed = result.failed_chunks();
        if failed.is_empty() {
            info!("Translation completed in {}.", Self::format_duration(result.elapsed));
        } else {
            warn!(
                "Translation completed in {} with {} failed chunk(s): {}",
                Self::format_duration(result.elapsed),
                failed.len(),
                failed.iter().map(|c| (c.index + 1).to_string()).collect::<Vec<_>>().join(", ")
            );
            if let Some(last_error) = result.last_error() {
                warn!("Last error: {}", last_error);
            }
        }
        info!("Success: {:?}", output_path);

        Ok(Some(output_path))
    }

    /// Translate every document below `input_dir`.
    ///
    /// Outputs go next to each input unless `output_dir` is given. Files
    /// produced by a previous run are ignored. Returns the number of
    /// documents written.
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: Option<PathBuf>, force_overwrite: bool) -> Result<usize> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let target_suffix = self.target_suffix();
        let documents: Vec<PathBuf> = FileManager::find_files(&input_dir, DOCUMENT_EXTENSION)?
            .into_iter()
            .filter(|path| !FileManager::is_translation_output(path, &target_suffix))
            .collect();

        if documents.is_empty() {
            warn!("No .{} documents found in {:?}", DOCUMENT_EXTENSION, input_dir);
            return Ok(0);
        }

        let multi_progress = MultiProgress::new();
        let folder_pb = self.progress_bar(&multi_progress, documents.len() as u64, "files");
        folder_pb.set_message("Processing files");

        let mut success_count = 0;
        let mut skip_count = 0;
        let mut error_count = 0;

        for document in &documents {
            let target_dir = match &output_dir {
                Some(dir) => dir.clone(),
                None => document.parent().unwrap_or(Path::new(".")).to_path_buf(),
            };

            match self.run_with_progress(document, &target_dir, &multi_progress, force_overwrite).await {
                Ok(Some(_)) => success_count += 1,
                Ok(None) => skip_count += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", document, e);
                    error_count += 1;
                }
            }
            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Processed {} document(s) in {}: {} translated, {} skipped, {} failed",
            documents.len(),
            Self::format_duration(start_time.elapsed()),
            success_count,
            skip_count,
            error_count
        );

        Ok(success_count)
    }

    async fn translate_with_progress(&self, text: &str, multi_progress: &MultiProgress) -> Result<TranslationResult> {
        info!(
            "{}: {} -> {}",
            self.config.translation.provider.display_name(),
            self.config.source_language,
            self.config.target_language
        );

        let progress_bar = self.progress_bar(multi_progress, 0, "chunks");
        progress_bar.set_message("Translating");

        let glossary_path = self.config.glossary_path.as_deref().map(Path::new);
        let result = self
            .service
            .translate_with_progress(
                text,
                &self.config.source_language,
                &self.config.target_language,
                glossary_path,
                |done, total| {
                    progress_bar.set_length(total as u64);
                    progress_bar.set_position(done as u64);
                },
            )
            .await
            .context("Translation failed")?;

        progress_bar.finish_and_clear();
        Ok(result)
    }

    fn progress_bar(&self, multi_progress: &MultiProgress, length: u64, unit: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = multi_progress.add(ProgressBar::new(length));
        let template_result = ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{percent}}%) {{msg}} {{eta}}",
                unit
            ))
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    /// Human readable duration
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
