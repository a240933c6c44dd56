//! libindic
//!
//! Keystroke-to-script translation for Tamil and five other Indic
//! scripts. Layout data for ten Tamil keyboard maps and the phonetic
//! maps for Devanagari, Malayalam, Kannada, Telugu and Gurmukhi, plus
//! the `KeyTranslator` facade that picks tables and switches languages
//! at runtime.
//!
//! ```no_run
//! use libindic::KeyTranslator;
//! use libindic_core::TranslatorConfig;
//!
//! let mut tr = KeyTranslator::new(TranslatorConfig::default()).unwrap();
//! let edit = tr.translate_key('k');
//! assert_eq!(edit.inserted_text, "க்");
//! ```

pub mod compat;
pub mod devanagari;
pub mod gurmukhi;
pub mod kannada;
pub mod malayalam;
pub mod tamil;
pub mod telugu;
pub mod translator;

pub use compat::{decode_result, encode_result, DELCODE};
pub use translator::{is_layout_supported, supported_layouts, KeyTranslator};

pub use libindic_core::{
    detect_language, Language, Layout, TranslationResult, TranslatorConfig,
};

/// Layout names accepted on the command line and in config files.
static LAYOUT_NAMES: phf::Map<&'static str, Layout> = phf::phf_map! {
    "anjal" => Layout::Anjal,
    "tamil99" => Layout::Tamil99,
    "tamil97" => Layout::Tamil97,
    "mylai" => Layout::Mylai,
    "typewriter-new" => Layout::TypewriterNew,
    "typewriter-old" => Layout::TypewriterOld,
    "anjal-indic" => Layout::AnjalIndic,
    "murasu6" => Layout::Murasu6,
    "bamini" => Layout::Bamini,
    "tn-typewriter" => Layout::TnTypewriter,
};

static LANGUAGE_NAMES: phf::Map<&'static str, Language> = phf::phf_map! {
    "tamil" => Language::Tamil,
    "devanagari" => Language::Devanagari,
    "malayalam" => Language::Malayalam,
    "kannada" => Language::Kannada,
    "telugu" => Language::Telugu,
    "gurmukhi" => Language::Gurmukhi,
};

/// Parse a layout name (case-insensitive).
pub fn layout_from_name(name: &str) -> Option<Layout> {
    LAYOUT_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Parse a language name (case-insensitive).
pub fn language_from_name(name: &str) -> Option<Language> {
    LANGUAGE_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!(layout_from_name("Tamil99"), Some(Layout::Tamil99));
        assert_eq!(layout_from_name("tn-typewriter"), Some(Layout::TnTypewriter));
        assert_eq!(layout_from_name("qwerty"), None);
        assert_eq!(language_from_name("Gurmukhi"), Some(Language::Gurmukhi));
    }
}
