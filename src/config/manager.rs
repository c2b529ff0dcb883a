use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::translation::validate_language;

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "i18n-translate.toml";

pub const DEFAULT_SOURCE: &str = "./src/i18n/translations/en.ts";
pub const DEFAULT_CACHE: &str = "./scripts/translation_cache.json";
pub const DEFAULT_LANGUAGES: &[&str] = &["es", "vi", "ko", "zh"];
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en-US";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 16_384;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// The `[translate]` section: what to translate and where the cache lives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateSection {
    /// Base localization file.
    pub source: Option<PathBuf>,
    /// JSON fingerprint cache.
    pub cache: Option<PathBuf>,
    /// Target language tags (`es`, `pt-BR`); each names its output file.
    pub languages: Option<Vec<String>>,
    /// Language tag of the base file, as given to the model.
    pub source_language: Option<String>,
}

/// The `[provider]` section: the completion endpoint and request settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSection {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    pub model: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// The complete settings file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translate: TranslateSection,
    #[serde(default)]
    pub provider: ProviderSection,
}

impl ConfigFile {
    /// Name of the environment variable holding the API key.
    pub fn api_key_env(&self) -> &str {
        self.provider
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

/// Resolved configuration after merging CLI arguments, settings file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: PathBuf,
    pub cache: PathBuf,
    /// Validated, de-duplicated target languages in run order.
    pub languages: Vec<String>,
    pub source_language: String,
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// Reads an API key from the environment variable `env_var`.
///
/// An empty value counts as unset.
pub fn read_api_key(env_var: &str) -> Option<String> {
    std::env::var(env_var).ok().filter(|key| !key.is_empty())
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over settings file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    /// Target languages; empty means "not given on the command line".
    pub languages: Vec<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with settings file values.
///
/// CLI options take precedence over the settings file, which takes precedence
/// over the built-in defaults.
///
/// # Errors
///
/// Returns an error if a target language is unsupported, no target language
/// remains, or a numeric setting is out of range.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let translate = &config_file.translate;
    let provider = &config_file.provider;

    let requested: Vec<String> = if options.languages.is_empty() {
        translate.languages.clone().unwrap_or_else(|| {
            DEFAULT_LANGUAGES
                .iter()
                .map(|lang| (*lang).to_string())
                .collect()
        })
    } else {
        options.languages.clone()
    };

    let mut languages: Vec<String> = Vec::with_capacity(requested.len());
    for lang in requested {
        let lang = lang.trim().to_string();
        if lang.is_empty() {
            continue;
        }
        validate_language(&lang)?;
        if !languages.contains(&lang) {
            languages.push(lang);
        }
    }

    if languages.is_empty() {
        bail!(
            "No target languages configured\n\n\
             Please provide them via:\n  \
             - CLI option: i18n-translate --to es,vi\n  \
             - Config file: languages = [\"es\", \"vi\"] under [translate]"
        );
    }

    let temperature = provider.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Invalid temperature: {temperature} (expected a value between 0.0 and 2.0)");
    }

    let max_output_tokens = provider
        .max_output_tokens
        .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);
    if max_output_tokens == 0 {
        bail!("Invalid max_output_tokens: must be greater than 0");
    }

    Ok(ResolvedConfig {
        source: options
            .source
            .clone()
            .or_else(|| translate.source.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
        cache: options
            .cache
            .clone()
            .or_else(|| translate.cache.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE)),
        languages,
        source_language: translate
            .source_language
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string()),
        endpoint: options
            .endpoint
            .clone()
            .or_else(|| provider.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        model: options
            .model
            .clone()
            .or_else(|| provider.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_key_env: config_file.api_key_env().to_string(),
        max_output_tokens,
        temperature,
    })
}

/// Locates and loads the settings file.
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Creates a config manager for `path`, or for `./i18n-translate.toml`
    /// when no path is given.
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(config_path) => Self {
                config_path,
                explicit: true,
            },
            None => Self {
                config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
                explicit: false,
            },
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the settings file.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicitly requested file is an error.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.explicit && !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }
}
