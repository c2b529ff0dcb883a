use anyhow::Result;

use crate::cache::CacheStore;
use crate::config::ResolvedConfig;
use crate::driver::{LanguageStatus, check_status};
use crate::translation::language_name;
use crate::translator::output_path;
use crate::ui::Style;

/// Prints the freshness of every target language to stdout.
pub fn print_status(config: &ResolvedConfig) -> Result<()> {
    let store = CacheStore::new(&config.cache);
    let statuses = check_status(&config.source, &store, &config.languages)?;

    println!(
        "{} {}",
        Style::header("Source:"),
        Style::path(config.source.display())
    );
    for (lang, status) in &statuses {
        let label = format!("{:16}", status.label());
        let label = match status {
            LanguageStatus::UpToDate => Style::success(label),
            LanguageStatus::Stale => Style::warning(label),
            LanguageStatus::MissingOutput => Style::error(label),
        };
        println!(
            "  {} {} {} {}",
            Style::code(format!("{lang:6}")),
            label,
            Style::path(output_path(&config.source, lang).display()),
            Style::secondary(language_name(lang).unwrap_or_default())
        );
    }

    Ok(())
}
