mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_CACHE, DEFAULT_CONFIG_FILE,
    DEFAULT_LANGUAGES, DEFAULT_SOURCE, ProviderSection, ResolveOptions, ResolvedConfig,
    TranslateSection, read_api_key, resolve_config,
};
