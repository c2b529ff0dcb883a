//! Translation of one source file into one target language.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::cache::{TranslationCache, fingerprint};
use crate::fs::atomic_write;
use crate::translation::{TranslationError, TranslationRequest, Translator};
use crate::ui::Spinner;

/// Extension used for outputs when the source file has none.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "ts";

/// Request settings shared by every language in a run.
#[derive(Debug, Clone)]
pub struct TranslateSettings {
    pub source_language: String,
    pub model: String,
    pub max_output_tokens: u32,
    /// Translate even when the cached fingerprint matches.
    pub force: bool,
}

/// Why a language was not refreshed.
#[derive(Debug)]
pub enum Failure {
    /// The source file could not be read.
    Source(anyhow::Error),
    Translation(TranslationError),
    /// The translation could not be written to its output file.
    Write(anyhow::Error),
}

/// Result of translating one source file into one language.
#[derive(Debug)]
pub enum Outcome {
    /// The cached fingerprint matches the source; nothing was done.
    Skipped,
    Translated { output: PathBuf },
    /// Prior output and cache entry are left untouched.
    Failed(Failure),
}

impl Outcome {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Returns the output path for a language: `<lang>.<ext>` beside the source.
pub fn output_path(source: &Path, target_language: &str) -> PathBuf {
    let extension = source
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or(DEFAULT_OUTPUT_EXTENSION);
    source.with_file_name(format!("{target_language}.{extension}"))
}

fn display_name(source: &Path) -> String {
    source.file_name().map_or_else(
        || source.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

pub struct FileTranslator<'a, T: Translator> {
    translator: &'a T,
    settings: TranslateSettings,
}

impl<'a, T: Translator> FileTranslator<'a, T> {
    pub const fn new(translator: &'a T, settings: TranslateSettings) -> Self {
        Self {
            translator,
            settings,
        }
    }

    /// Brings the output for `target_language` up to date with `source`.
    ///
    /// The cache entry is only updated after the output file was written.
    pub async fn translate_file(
        &self,
        source: &Path,
        target_language: &str,
        cache: &mut TranslationCache,
    ) -> Outcome {
        let name = display_name(source);

        let content = match fs::read_to_string(source) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to read {}: {e}", source.display());
                return Outcome::Failed(Failure::Source(e.into()));
            }
        };

        let file_fingerprint = fingerprint(&content);
        if !self.settings.force && cache.is_up_to_date(source, target_language, &file_fingerprint)
        {
            info!("File already up-to-date: {name} for {target_language}");
            return Outcome::Skipped;
        }

        info!("Translating {name} to {target_language}");
        let request = TranslationRequest {
            source_text: content,
            source_language: self.settings.source_language.clone(),
            target_language: target_language.to_string(),
            model: self.settings.model.clone(),
            max_output_tokens: self.settings.max_output_tokens,
        };

        let spinner = Spinner::new(&format!("Translating to {target_language}..."));
        let result = self.translator.translate(&request).await;
        spinner.stop();

        let translated = match result {
            Ok(translated) => translated,
            Err(e) => {
                error!("Failed to translate {name} to {target_language}: {e}");
                return Outcome::Failed(Failure::Translation(e));
            }
        };
        debug!(
            "Received {} bytes of {target_language} translation",
            translated.len()
        );

        let output = output_path(source, target_language);
        if let Err(e) = atomic_write(&output, translated.trim()) {
            error!("Error saving translated file {}: {e:#}", output.display());
            return Outcome::Failed(Failure::Write(e));
        }

        info!("Translated file saved: {}", output.display());
        cache.record(source, target_language, file_fingerprint);
        Outcome::Translated { output }
    }
}
