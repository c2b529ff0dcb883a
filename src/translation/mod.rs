mod client;
mod error;
mod language;
mod prompt;

pub use client::{TranslationClient, TranslationRequest, Translator};
pub use error::TranslationError;
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, validate_language};
pub use prompt::{MAX_PROMPT_TOKENS, Prompt, build_system_prompt, build_user_prompt};
