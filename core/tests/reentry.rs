//! Composition survives host-side interruptions: unmapped keys reset
//! context, termination forgets it, and the engine never asks the host
//! to delete text it did not produce.

use libindic_core::{
    CompositionEngine, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable,
    TranslatorConfig, VowelEntry,
};

static CONSOS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'க' },
    ConsonantEntry { key: 'm', base: 'ம' },
];
static VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'அ', sign: "" },
    VowelEntry { key: 'i', independent: 'இ', sign: "ி" },
];

static TABLE: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Anjal,
    kind: LayoutKind::Phonetic,
    consonants: CONSOS,
    vowels: VOWELS,
    extensions: &[],
    clusters: &[],
    literals: &[],
    precomposed: &[],
    modifiers: &[],
    auto_pulli: &[],
    word_initial: &[],
};

fn engine() -> CompositionEngine {
    CompositionEngine::new(&TABLE, TranslatorConfig::default())
}

#[test]
fn unmapped_key_starts_fresh_composition() {
    let mut e = engine();
    e.translate_key('k');
    let r = e.translate_key(' ');
    assert!(!r.handled);
    // the vowel no longer respells the consonant typed before the space
    let r = e.translate_key('i');
    assert_eq!(r.delete_count, 0);
    assert_eq!(r.inserted_text, "இ");
}

#[test]
fn termination_forgets_context() {
    let mut e = engine();
    e.translate_key('k');
    e.terminate_composition();
    let r = e.translate_key('a');
    assert_eq!(r.delete_count, 0);
    assert_eq!(r.inserted_text, "அ");
    let r = e.delete_last_char("அ");
    assert!(r.handled);
    assert_eq!(r.delete_count, 1);
}

#[test]
fn delete_never_exceeds_emitted_context() {
    let mut e = engine();
    let mut emitted = 0usize;
    for key in "kami".chars() {
        let r = e.translate_key(key);
        assert!(r.delete_count <= emitted);
        emitted -= r.delete_count;
        emitted += r.inserted_text.chars().count();
    }
}

#[test]
fn backspace_on_empty_state_is_unhandled() {
    let mut e = engine();
    let r = e.delete_last_char("");
    assert!(!r.handled);
    assert_eq!(r.delete_count, 0);
}

#[test]
fn backspace_reanchors_on_foreign_host_text() {
    // the host re-entered composition on text this engine never emitted
    let mut e = engine();
    e.translate_key('k');
    let r = e.delete_last_char("கமி");
    assert!(r.handled);
    assert_eq!(r.delete_count, 1);
    // the adopted context drives the next keystroke: மி ends the
    // window, so a vowel starts fresh instead of respelling
    let r = e.translate_key('a');
    assert_eq!(r.delete_count, 0);
    assert_eq!(r.inserted_text, "அ");
}
