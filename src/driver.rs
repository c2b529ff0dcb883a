//! One run over all target languages, plus the offline status check.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::cache::{CacheStore, fingerprint};
use crate::translation::Translator;
use crate::translator::{FileTranslator, Outcome, TranslateSettings, output_path};

/// Per-language outcomes of a completed run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(String, Outcome)>,
    /// Whether the cache document was written at the end of the run.
    pub cache_saved: bool,
}

impl RunReport {
    pub fn translated(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Translated { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    /// Languages whose output was not refreshed this run.
    pub fn failed_languages(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .map(|(lang, _)| lang.as_str())
            .collect()
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Translates one source file into every target language, one after another.
pub struct Driver<'a, T: Translator> {
    translator: FileTranslator<'a, T>,
    store: CacheStore,
    source: PathBuf,
    languages: Vec<String>,
}

impl<'a, T: Translator> Driver<'a, T> {
    pub fn new(
        translator: &'a T,
        settings: TranslateSettings,
        store: CacheStore,
        source: PathBuf,
        languages: Vec<String>,
    ) -> Self {
        Self {
            translator: FileTranslator::new(translator, settings),
            store,
            source,
            languages,
        }
    }

    /// Runs every language and saves the cache once at the end.
    ///
    /// Returns `None` without touching the network or the cache file when the
    /// source file does not exist. Individual failures never stop the run.
    pub async fn run(&self) -> Option<RunReport> {
        info!("Starting translation run.");

        if !self.source.is_file() {
            error!("Source file not found: {}", self.source.display());
            return None;
        }

        let mut cache = self.store.load();
        let mut report = RunReport::default();

        for lang in &self.languages {
            let outcome = self
                .translator
                .translate_file(&self.source, lang, &mut cache)
                .await;
            report.outcomes.push((lang.clone(), outcome));
        }

        report.cache_saved = self.store.save(&cache);
        Some(report)
    }
}

/// Freshness of one language's output relative to the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageStatus {
    UpToDate,
    /// The source changed since the last translation, or it was never translated.
    Stale,
    /// The output file does not exist.
    MissingOutput,
}

impl LanguageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToDate => "up to date",
            Self::Stale => "stale",
            Self::MissingOutput => "missing output",
        }
    }
}

/// Compares each language's cached fingerprint with the current source.
///
/// Reads the cache but never writes it and never contacts the network.
pub fn check_status(
    source: &Path,
    store: &CacheStore,
    languages: &[String],
) -> Result<Vec<(String, LanguageStatus)>> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read source file: {}", source.display()))?;
    let current = fingerprint(&content);
    let cache = store.load();

    Ok(languages
        .iter()
        .map(|lang| {
            let status = if !output_path(source, lang).exists() {
                LanguageStatus::MissingOutput
            } else if cache.is_up_to_date(source, lang, &current) {
                LanguageStatus::UpToDate
            } else {
                LanguageStatus::Stale
            };
            (lang.clone(), status)
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cache::TranslationCache;
    use tempfile::TempDir;

    fn languages(langs: &[&str]) -> Vec<String> {
        langs.iter().map(|lang| (*lang).to_string()).collect()
    }

    #[test]
    fn test_report_counts() {
        let report = RunReport {
            outcomes: vec![
                ("es".to_string(), Outcome::Skipped),
                (
                    "vi".to_string(),
                    Outcome::Translated {
                        output: PathBuf::from("vi.ts"),
                    },
                ),
                (
                    "ko".to_string(),
                    Outcome::Failed(crate::translator::Failure::Translation(
                        crate::translation::TranslationError::RateLimited,
                    )),
                ),
            ],
            cache_saved: true,
        };

        assert_eq!(report.skipped(), 1);
        assert_eq!(report.translated(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failed_languages(), vec!["ko"]);
    }

    #[test]
    fn test_status_reports_each_state() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("en.ts");
        fs::write(&source, "Hello").unwrap();
        fs::write(temp_dir.path().join("es.ts"), "Hola").unwrap();
        fs::write(temp_dir.path().join("vi.ts"), "Xin chào").unwrap();

        let store = CacheStore::new(temp_dir.path().join("cache.json"));
        let mut cache = TranslationCache::new();
        cache.record(&source, "es", fingerprint("Hello"));
        cache.record(&source, "vi", fingerprint("Hello (old)"));
        cache.record(&source, "ko", fingerprint("Hello"));
        assert!(store.save(&cache));

        let status = check_status(&source, &store, &languages(&["es", "vi", "ko"])).unwrap();

        assert_eq!(
            status,
            vec![
                ("es".to_string(), LanguageStatus::UpToDate),
                ("vi".to_string(), LanguageStatus::Stale),
                ("ko".to_string(), LanguageStatus::MissingOutput),
            ]
        );
    }

    #[test]
    fn test_status_does_not_create_cache() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("en.ts");
        fs::write(&source, "Hello").unwrap();
        fs::write(temp_dir.path().join("es.ts"), "Hola").unwrap();
        let store = CacheStore::new(temp_dir.path().join("cache.json"));

        let status = check_status(&source, &store, &languages(&["es"])).unwrap();

        assert_eq!(status, vec![("es".to_string(), LanguageStatus::Stale)]);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_status_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("cache.json"));

        let result = check_status(&temp_dir.path().join("en.ts"), &store, &languages(&["es"]));

        assert!(result.is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LanguageStatus::UpToDate.label(), "up to date");
        assert_eq!(LanguageStatus::Stale.label(), "stale");
        assert_eq!(LanguageStatus::MissingOutput.label(), "missing output");
    }
}
