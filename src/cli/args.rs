use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "i18n-translate")]
#[command(about = "Translate a base localization file into other languages with an LLM")]
#[command(version)]
pub struct Args {
    /// Base localization file [default: ./src/i18n/translations/en.ts]
    #[arg(short = 's', long, global = true)]
    pub source: Option<PathBuf>,

    /// Fingerprint cache file [default: ./scripts/translation_cache.json]
    #[arg(short = 'c', long, global = true)]
    pub cache: Option<PathBuf>,

    /// Target language codes, repeatable or comma-separated [default: es,vi,ko,zh]
    #[arg(short = 't', long = "to", value_delimiter = ',', global = true)]
    pub to: Vec<String>,

    /// Model name [default: gpt-4o-mini]
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API endpoint URL [default: https://api.openai.com]
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Settings file [default: ./i18n-translate.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Translate every language even if its cached fingerprint matches
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Log debug details
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which languages are up to date, without calling the API
    Status,
    /// List supported language codes
    Languages,
}
