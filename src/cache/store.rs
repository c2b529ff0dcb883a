use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Computes the fingerprint of a source file's content (hex-encoded SHA-256).
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Builds the cache key for a source file and target language: `<path>_<lang>`.
pub fn cache_key(source: &Path, target_language: &str) -> String {
    format!("{}_{target_language}", source.display())
}

/// In-memory mapping of cache keys to source fingerprints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCache {
    entries: BTreeMap<String, String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if the stored fingerprint for this pair equals `fingerprint`.
    pub fn is_up_to_date(&self, source: &Path, target_language: &str, fingerprint: &str) -> bool {
        self.get(&cache_key(source, target_language)) == Some(fingerprint)
    }

    /// Records the fingerprint a translation was produced from.
    pub fn record(&mut self, source: &Path, target_language: &str, fingerprint: String) {
        self.entries
            .insert(cache_key(source, target_language), fingerprint);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads and saves the cache document.
///
/// Neither operation fails the run: a corrupt document loads as an empty
/// cache and a failed save is only logged.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> TranslationCache {
        match self.try_load() {
            Ok(cache) => cache,
            Err(e) => {
                error!("Error loading cache, starting empty: {e:#}");
                TranslationCache::new()
            }
        }
    }

    fn try_load(&self) -> Result<TranslationCache> {
        if !self.path.exists() {
            debug!("No cache file at {}, starting empty", self.path.display());
            return Ok(TranslationCache::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache file: {}", self.path.display()))?;

        let cache: TranslationCache = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", self.path.display()))?;

        debug!("Loaded {} cache entries", cache.len());
        Ok(cache)
    }

    /// Writes the cache back to disk. Returns `true` if it was persisted.
    pub fn save(&self, cache: &TranslationCache) -> bool {
        match self.try_save(cache) {
            Ok(()) => {
                info!("Cache saved successfully.");
                true
            }
            Err(e) => {
                error!("Error saving cache: {e:#}");
                false
            }
        }
    }

    fn try_save(&self, cache: &TranslationCache) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        cache
            .serialize(&mut serializer)
            .context("Failed to serialize cache")?;

        fs::write(&self.path, buffer)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))?;

        Ok(())
    }
}
