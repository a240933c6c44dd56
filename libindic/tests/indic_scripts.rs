//! Keystroke tests for the non-Tamil scripts and for language switching.

use libindic::{detect_language, supported_layouts, KeyTranslator};
use libindic_core::{Language, Layout, TranslatorConfig};

fn translator(language: Language) -> KeyTranslator {
    let config = TranslatorConfig { language, ..Default::default() };
    KeyTranslator::new(config).expect("phonetic layout")
}

fn feed(tr: &mut KeyTranslator, keys: &str) -> String {
    let mut text = String::new();
    for key in keys.chars() {
        let edit = tr.translate_key(key);
        if !edit.handled {
            if let Some(sub) = tr.unmapped_char(key, &text) {
                text.push_str(&sub);
            } else {
                text.push(key);
            }
            continue;
        }
        for _ in 0..edit.delete_count {
            text.pop();
        }
        text.push_str(&edit.inserted_text);
    }
    text
}

#[test]
fn devanagari_syllables() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "ka"), "क");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kaa"), "का");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "namaste"), "नमस्ते");
}

#[test]
fn devanagari_aspirates() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "kha"), "ख");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "dha"), "ध");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "Tha"), "ठ");
}

#[test]
fn devanagari_candra_chain() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "ke"), "के");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kee"), "कॅ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "keee"), "कॆ");
}

#[test]
fn devanagari_nukta_respell() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "kqqa"), "क़");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "jqqa"), "ज़");
}

#[test]
fn devanagari_anusvara_and_visarga() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "kaM"), "कं");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kaH"), "कः");
}

#[test]
fn devanagari_danda() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "|"), "।");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "||"), "॥");
}

#[test]
fn devanagari_digits_substitute() {
    let mut tr = translator(Language::Devanagari);
    assert_eq!(feed(&mut tr, "12"), "१२");
}

#[test]
fn malayalam_syllables() {
    let mut tr = translator(Language::Malayalam);
    assert_eq!(feed(&mut tr, "ka"), "ക");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "nja"), "ഞ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "malayaaLaM"), "മലയാളം");
}

#[test]
fn malayalam_chillu() {
    let mut tr = translator(Language::Malayalam);
    assert_eq!(feed(&mut tr, "nw"), "ൻ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "Lw"), "ൾ");
    tr.terminate_composition();
    // vowel after a chillu starts a fresh syllable
    assert_eq!(feed(&mut tr, "nwa"), "ൻഅ");
}

#[test]
fn malayalam_standalone_virama_then_vowel() {
    let mut tr = translator(Language::Malayalam);
    let first = tr.translate_key('q');
    assert_eq!(first.delete_count, 0);
    assert_eq!(first.inserted_text, "\u{0D4D}");
    // no consonant under the virama, so the vowel appends its
    // independent form instead of respelling
    let second = tr.translate_key('a');
    assert_eq!(second.delete_count, 0);
    assert_eq!(second.inserted_text, "അ");
}

#[test]
fn malayalam_vocalic_r() {
    let mut tr = translator(Language::Malayalam);
    assert_eq!(feed(&mut tr, "Hr"), "ഋ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kHr"), "കൃ");
}

#[test]
fn kannada_syllables() {
    let mut tr = translator(Language::Kannada);
    assert_eq!(feed(&mut tr, "khaa"), "ಖಾ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kau"), "ಕೌ");
}

#[test]
fn telugu_syllables() {
    let mut tr = translator(Language::Telugu);
    assert_eq!(feed(&mut tr, "kaa"), "కా");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "nja"), "ఞ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "3"), "౩");
}

#[test]
fn gurmukhi_syllables() {
    let mut tr = translator(Language::Gurmukhi);
    assert_eq!(feed(&mut tr, "ka"), "ਕ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kii"), "ਕੀ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "khaa"), "ਖਾ");
}

#[test]
fn gurmukhi_tippi() {
    let mut tr = translator(Language::Gurmukhi);
    assert_eq!(feed(&mut tr, "kaMm"), "ਕੰ");
}

#[test]
fn gurmukhi_addak() {
    let mut tr = translator(Language::Gurmukhi);
    assert_eq!(feed(&mut tr, "kax"), "ਕੱ");
}

#[test]
fn unmapped_digits_follow_composition_context() {
    let tr = translator(Language::Telugu);
    assert_eq!(tr.unmapped_char('3', "").as_deref(), Some("౩"));
    assert_eq!(tr.unmapped_char('3', "శ్రీ").as_deref(), Some("౩"));
    // inside Latin text the host keeps the ASCII digit
    assert_eq!(tr.unmapped_char('3', "abc"), None);
}

#[test]
fn only_tamil_has_extra_layouts() {
    assert_eq!(supported_layouts(Language::Tamil).len(), 10);
    for lang in [
        Language::Devanagari,
        Language::Malayalam,
        Language::Kannada,
        Language::Telugu,
        Language::Gurmukhi,
    ] {
        assert_eq!(supported_layouts(lang), &[Layout::Anjal][..]);
    }
}

#[test]
fn switching_language_starts_fresh() {
    let mut tr = translator(Language::Tamil);
    assert_eq!(feed(&mut tr, "k"), "க்");
    assert!(tr.set_language(Language::Kannada));
    assert_eq!(feed(&mut tr, "ka"), "ಕ");
}

#[test]
fn detects_script_from_text() {
    assert_eq!(detect_language("நான்"), Some(Language::Tamil));
    assert_eq!(detect_language("नमस्ते"), Some(Language::Devanagari));
    assert_eq!(detect_language("ഇന്ത്യ"), Some(Language::Malayalam));
    assert_eq!(detect_language("ಕನ್ನಡ"), Some(Language::Kannada));
    assert_eq!(detect_language("తెలుగు"), Some(Language::Telugu));
    assert_eq!(detect_language("ਪੰਜਾਬੀ"), Some(Language::Gurmukhi));
    assert_eq!(detect_language("hello 123"), None);
}
