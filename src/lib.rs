//! # i18n-translate - Localization File Translator
//!
//! `i18n-translate` keeps a set of per-language localization files in sync with
//! a single base file. Each target language is produced by one request to an
//! OpenAI-compatible chat-completion endpoint, and a content fingerprint cache
//! skips languages whose translation is already current.
//!
//! ## Features
//!
//! - **Fingerprint cache**: Only languages whose base content changed are re-translated
//! - **Sequential runs**: One request in flight at a time, failures never abort the run
//! - **Status report**: See which languages are stale without touching the network
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate ./src/i18n/translations/en.ts into es, vi, ko and zh
//! export OPENAI_API_KEY="sk-..."
//! i18n-translate
//!
//! # Pick the targets explicitly
//! i18n-translate --to fr,de
//!
//! # Show which languages need a refresh
//! i18n-translate status
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `./i18n-translate.toml` when it exists:
//!
//! ```toml
//! [translate]
//! source = "./src/i18n/translations/en.ts"
//! cache = "./scripts/translation_cache.json"
//! languages = ["es", "vi", "ko", "zh"]
//!
//! [provider]
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Translation fingerprint cache backed by a JSON document.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// Sequential run over all target languages.
pub mod driver;

/// File system utilities.
pub mod fs;

/// Logging setup and global output settings (quiet mode, colors).
pub mod output;

/// Translation client for OpenAI-compatible APIs.
pub mod translation;

/// Per-language file translation.
pub mod translator;

/// Terminal UI components (spinner, colors).
pub mod ui;
