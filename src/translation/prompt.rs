/// Upper bound on the estimated prompt size accepted by the client.
pub const MAX_PROMPT_TOKENS: usize = 128_000;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "Translate complex scenarios with cultural nuances and idiomatic expressions from {source_language} to {target_language}.

# Guidelines

- Ensure cultural context and local idioms are preserved.
- Maintain the original text's intent and tone.
- Adapt expressions that don't directly translate.
- Don't translate URLs or any text that could break a link.
- Do NOT adjust variable names inside template placeholders such as {{name}}.

# Steps

1. Analyze the provided text for idiomatic expressions or cultural references.
2. Determine if direct translation affects meaning or tone.
3. Adjust the translation to maintain intent, considering cultural context.

# Output Format

Provide the translated text in the same TypeScript format as the input.

# Notes

- For expressions without direct translations, opt for cultural equivalence rather than literal translation.
- Be cautious of false friends: similar words with different meanings in both languages.";

pub const USER_PROMPT_PREFIX: &str = "Translate the following text:\n\n";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    // {source_language} and {target_language} are placeholders, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}

pub fn build_user_prompt(text: &str) -> String {
    format!("{USER_PROMPT_PREFIX}{text}")
}

/// The system and user messages sent for one translation.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn new(source_language: &str, target_language: &str, text: &str) -> Self {
        Self {
            system: build_system_prompt(source_language, target_language),
            user: build_user_prompt(text),
        }
    }

    /// Rough token estimate: whitespace-separated words in both messages.
    pub fn estimated_tokens(&self) -> usize {
        self.system.split_whitespace().count() + self.user.split_whitespace().count()
    }
}
