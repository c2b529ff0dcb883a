//! Language code validation and supported languages.

use anyhow::Result;

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the display name for a language tag.
///
/// Tags with region or script subtags (`es-MX`, `zh-Hans`) fall back to the
/// name of their primary language.
pub fn language_name(tag: &str) -> Option<&'static str> {
    lookup(tag).or_else(|| tag.split_once('-').and_then(|(primary, _)| lookup(primary)))
}

fn lookup(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Checks the `ll(-Subtag)*` shape: a lowercase 2-3 letter primary subtag
/// followed by alphanumeric subtags of 2-8 characters.
fn is_well_formed_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags.next().is_some_and(|primary| {
        (2..=3).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_lowercase())
    });

    primary_ok
        && subtags.all(|subtag| {
            (2..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Validates a target language tag.
///
/// Accepts any listed code, or a well-formed tag whose primary language is
/// listed (`es-MX`, `pt-BR`, `zh-Hans`). The tag is used verbatim as the
/// output file stem.
///
/// # Errors
///
/// Returns an error if the tag is malformed or its primary language is not
/// in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if is_well_formed_tag(lang) && language_name(lang).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Use an ISO 639-1 code, optionally with a region or script: es, vi, ko, zh, es-MX, pt-BR, ...\n\
             Run 'i18n-translate languages' to see all supported codes."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("ja").is_ok());
        assert!(validate_language("en").is_ok());
        assert!(validate_language("zh-TW").is_ok());
    }

    #[test]
    fn test_default_targets_are_supported() {
        for lang in ["es", "vi", "ko", "zh"] {
            assert!(validate_language(lang).is_ok(), "{lang} should be supported");
        }
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("vi"), Some("Vietnamese"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("invalid").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("JP").is_err()); // Case sensitive
    }

    #[test]
    fn test_validate_language_regional_tags() {
        assert!(validate_language("es-MX").is_ok());
        assert!(validate_language("pt-BR").is_ok());
        assert!(validate_language("zh-Hans").is_ok());
        assert!(validate_language("sr-Latn-RS").is_ok());
    }

    #[test]
    fn test_validate_language_malformed_tags() {
        assert!(validate_language("xx-MX").is_err()); // Unknown primary language
        assert!(validate_language("es-").is_err());
        assert!(validate_language("es_MX").is_err());
        assert!(validate_language("ES-MX").is_err());
        assert!(validate_language("es-M").is_err());
        assert!(validate_language("es-../x").is_err());
    }

    #[test]
    fn test_language_name_falls_back_to_primary() {
        assert_eq!(language_name("es-MX"), Some("Spanish"));
        assert_eq!(language_name("pt-BR"), Some("Portuguese"));
        assert_eq!(language_name("zh-TW"), Some("Chinese (Traditional)"));
        assert_eq!(language_name("xx-MX"), None);
    }
}
