use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::config::ResolvedConfig;
use crate::driver::{Driver, RunReport};
use crate::translation::TranslationClient;
use crate::translator::TranslateSettings;

/// The credential environment variable is unset or empty.
///
/// `main` turns this into the `EX_CONFIG` exit code.
#[derive(Debug, thiserror::Error)]
#[error("{env_var} environment variable not set.")]
pub struct MissingCredential {
    pub env_var: String,
}

pub struct TranslateOptions {
    pub config: ResolvedConfig,
    /// Read from `config.api_key_env` before any file was touched.
    pub api_key: String,
    pub force: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let TranslateOptions {
        config,
        api_key,
        force,
    } = options;

    debug!(
        "Using endpoint {} with model {}",
        config.endpoint, config.model
    );

    let client = TranslationClient::new(config.endpoint.clone(), api_key, config.temperature);
    let settings = TranslateSettings {
        source_language: config.source_language.clone(),
        model: config.model.clone(),
        max_output_tokens: config.max_output_tokens,
        force,
    };

    let driver = Driver::new(
        &client,
        settings,
        CacheStore::new(&config.cache),
        config.source.clone(),
        config.languages.clone(),
    );

    if let Some(report) = driver.run().await {
        log_summary(&report);
    }

    Ok(())
}

fn log_summary(report: &RunReport) {
    info!(
        "Translation completed: {} translated, {} up-to-date, {} failed.",
        report.translated(),
        report.skipped(),
        report.failed()
    );

    let failed = report.failed_languages();
    if !failed.is_empty() {
        warn!(
            "Not refreshed this run (will retry next run): {}",
            failed.join(", ")
        );
    }
}
