use std::path::Path;

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::app_config::Config;
use crate::batch;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::transcript;
use crate::ttml;

// @module: Application controller for transcript extraction

/// Main application controller for transcript extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self { config })
    }

    /// Run the workflow in single-file mode.
    ///
    /// Any failure is fatal and propagated to the caller.
    pub fn run_single(&self, input: &Path, output: &Path, include_timestamps: bool) -> Result<()> {
        if !FileManager::file_exists(input) {
            return Err(anyhow!("Input file does not exist: {}", input.display()));
        }

        self.process_document(input, output, include_timestamps)?;
        info!("Transcript saved to {}", output.display());

        Ok(())
    }

    /// Run the workflow in batch mode, processing every TTML document
    /// under the configured root directory.
    ///
    /// Failures are isolated per document: one unreadable or malformed
    /// file is logged and counted without aborting the rest of the
    /// batch.
    pub fn run_batch(&self, include_timestamps: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        let root = self.config.resolve_batch_root()?;
        if !FileManager::dir_exists(&root) {
            return Err(anyhow!("TTML root directory does not exist: {}", root.display()));
        }

        info!("Searching for TTML files in {}", root.display());
        let entries = batch::collect_documents(&root)?;

        if entries.is_empty() {
            warn!("No TTML files found in {}", root.display());
            return Ok(());
        }

        info!("Found {} TTML files", entries.len());
        let names = batch::assign_output_names(&entries);

        FileManager::ensure_dir(&self.config.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.config.output_dir.display())
        })?;

        // Progress bar for batch processing
        let progress_bar = ProgressBar::new(entries.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Processing files");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;

        for (entry, name) in entries.iter().zip(names.iter()) {
            progress_bar.set_message(format!("Processing: {}", name));

            let output = self.config.output_dir.join(name);
            match self.process_document(&entry.path, &output, include_timestamps) {
                Ok(()) => {
                    debug!("Transcript saved to {}", output.display());
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing {}: {}", entry.path.display(), e);
                    error_count += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Batch processing complete");

        let duration = start_time.elapsed();
        info!(
            "Batch completed: {} processed, {} errors - Duration: {}",
            success_count,
            error_count,
            Self::format_duration(duration)
        );

        Ok(())
    }

    /// Read, parse, extract and write a single document
    fn process_document(
        &self,
        input: &Path,
        output: &Path,
        include_timestamps: bool,
    ) -> Result<(), AppError> {
        let content = FileManager::read_to_string(input)?;

        let document = ttml::parse(&content).map_err(|source| AppError::Parse {
            path: input.to_path_buf(),
            source,
        })?;

        let text = transcript::extract_transcript(&document, include_timestamps);
        FileManager::write_to_file(output, &text)?;

        Ok(())
    }

    /// Format a duration for summary output
    fn format_duration(duration: std::time::Duration) -> String {
        let seconds = duration.as_secs();
        if seconds >= 60 {
            let minutes = seconds / 60;
            let seconds = seconds % 60;
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
