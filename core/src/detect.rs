//! Unicode-block language detection.

use crate::Language;

const ALL: [Language; 6] = [
    Language::Tamil,
    Language::Devanagari,
    Language::Malayalam,
    Language::Kannada,
    Language::Telugu,
    Language::Gurmukhi,
];

/// Language of the first recognized Indic scalar in `text`, if any.
///
/// ASCII, punctuation and joiner characters are skipped, so mixed text
/// detects on its Indic content.
pub fn detect_language(text: &str) -> Option<Language> {
    text.chars()
        .find_map(|ch| ALL.iter().copied().find(|lang| lang.contains(ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_script() {
        assert_eq!(detect_language("தமிழ்"), Some(Language::Tamil));
        assert_eq!(detect_language("हिन्दी"), Some(Language::Devanagari));
        assert_eq!(detect_language("മലയാളം"), Some(Language::Malayalam));
        assert_eq!(detect_language("ಕನ್ನಡ"), Some(Language::Kannada));
        assert_eq!(detect_language("తెలుగు"), Some(Language::Telugu));
        assert_eq!(detect_language("ਪੰਜਾਬੀ"), Some(Language::Gurmukhi));
    }

    #[test]
    fn skips_ascii_prefix() {
        assert_eq!(detect_language("note: தமிழ்"), Some(Language::Tamil));
        assert_eq!(detect_language("plain ascii"), None);
        assert_eq!(detect_language(""), None);
    }
}
