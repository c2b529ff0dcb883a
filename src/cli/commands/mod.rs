//! Subcommand implementations.

/// Status command handler.
pub mod status;

/// Translation run handler.
pub mod translate;

use anyhow::Result;

use crate::cli::Args;
use crate::config::{
    ConfigManager, DEFAULT_API_KEY_ENV, ResolveOptions, ResolvedConfig, read_api_key,
    resolve_config,
};
use self::translate::MissingCredential;

/// Loads the settings file and merges it with the command-line overrides.
pub fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let config_file = ConfigManager::new(args.config.clone()).load()?;
    resolve_config(&resolve_options(args), &config_file)
}

/// Loads the settings for a translation run and reads the API key.
///
/// The key is checked before target languages are validated. When the
/// settings file cannot be read, the default variable is checked first so a
/// missing key is still the error reported.
pub fn load_translate_config(args: &Args) -> Result<(ResolvedConfig, String)> {
    let config_file = ConfigManager::new(args.config.clone()).load();

    let api_key_env = config_file
        .as_ref()
        .map_or(DEFAULT_API_KEY_ENV, |file| file.api_key_env());
    let api_key = read_api_key(api_key_env).ok_or_else(|| MissingCredential {
        env_var: api_key_env.to_string(),
    })?;

    let config = resolve_config(&resolve_options(args), &config_file?)?;
    Ok((config, api_key))
}

fn resolve_options(args: &Args) -> ResolveOptions {
    ResolveOptions {
        source: args.source.clone(),
        cache: args.cache.clone(),
        languages: args.to.clone(),
        endpoint: args.endpoint.clone(),
        model: args.model.clone(),
    }
}
