/// Ways a single translation request can fail.
///
/// None of these abort a run; the affected language is simply not refreshed.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Input exceeds the context limit of {limit} tokens (estimated {estimated})")]
    PromptTooLarge { estimated: usize, limit: usize },

    #[error("Rate limit exceeded during translation")]
    RateLimited,

    #[error("Failed to connect to API endpoint: {0}")]
    Connection(String),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected error during translation: {0}")]
    Other(String),
}
