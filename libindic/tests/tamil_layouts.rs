//! End-to-end keystroke tests for the Tamil layouts, applying each edit
//! to a host buffer the way a real host would.

use libindic::KeyTranslator;
use libindic_core::{Language, Layout, TranslatorConfig};

fn translator(layout: Layout) -> KeyTranslator {
    let config = TranslatorConfig { layout, ..Default::default() };
    KeyTranslator::new(config).expect("tamil layout")
}

fn feed(tr: &mut KeyTranslator, keys: &str) -> String {
    let mut text = String::new();
    feed_into(tr, keys, &mut text);
    text
}

fn feed_into(tr: &mut KeyTranslator, keys: &str, text: &mut String) {
    for key in keys.chars() {
        let edit = tr.translate_key(key);
        if !edit.handled {
            text.push(key);
            continue;
        }
        for _ in 0..edit.delete_count {
            text.pop();
        }
        text.push_str(&edit.inserted_text);
    }
}

#[test]
fn anjal_basic_syllables() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "ka"), "க");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kaa"), "கா");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "ki"), "கி");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kai"), "கை");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "kau"), "கௌ");
}

#[test]
fn anjal_standalone_vowels() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "aa"), "ஆ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "ai"), "ஐ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "au"), "ஔ");
}

#[test]
fn anjal_long_vowel_does_not_merge_across_syllables() {
    // kaai is கா + இ, not கை
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "kaai"), "காஇ");
}

#[test]
fn anjal_word_initial_dental() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "naan"), "நான்");
}

#[test]
fn anjal_clusters() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "nta"), "ந்த");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "nda"), "ண்ட");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "ndra"), "ன்ற");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "tra"), "ற்ற");
}

#[test]
fn anjal_sri_and_om() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "sri"), "ஸ்ரீ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "OM"), "ௐ");
}

#[test]
fn anjal_ksha_keeps_zwnj_guard() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "ksha"), "க்\u{200C}ஷ");
}

#[test]
fn anjal_vowel_killer() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "kfa"), "க்அ");
    tr.terminate_composition();
    // doubled killer surfaces the pulli on a live consonant
    assert_eq!(feed(&mut tr, "kaff"), "க்");
}

#[test]
fn anjal_rupee_literal() {
    let mut tr = translator(Layout::Anjal);
    assert_eq!(feed(&mut tr, "$"), "₹");
}

#[test]
fn anjal_digits_pass_through() {
    let mut tr = translator(Layout::Anjal);
    let edit = tr.translate_key('7');
    assert!(!edit.handled);
    assert_eq!(edit.delete_count, 0);
    assert!(tr.unmapped_char('7', "").is_none());
    assert!(tr.unmapped_char('7', "தமிழ்").is_none());
}

#[test]
fn tamil99_direct_typing() {
    let mut tr = translator(Layout::Tamil99);
    // க followed by the ஆ key
    assert_eq!(feed(&mut tr, "hq"), "கா");
    tr.terminate_composition();
    // bare consonant keeps its inherent vowel
    assert_eq!(feed(&mut tr, "ha"), "க");
}

#[test]
fn tamil99_auto_pulli() {
    let mut tr = translator(Layout::Tamil99);
    // ந + த inserts the pulli between the pair
    assert_eq!(feed(&mut tr, ";l"), "ந்த");
    tr.terminate_composition();
    // doubled consonant key does the same
    assert_eq!(feed(&mut tr, "ii"), "ன்ன");
}

#[test]
fn tamil99_auto_pulli_disabled() {
    let config = TranslatorConfig {
        layout: Layout::Tamil99,
        auto_pulli: false,
        ..Default::default()
    };
    let mut tr = KeyTranslator::new(config).expect("tamil99");
    assert_eq!(feed(&mut tr, ";l"), "நத");
}

#[test]
fn tamil99_grantha_clusters() {
    let mut tr = translator(Layout::Tamil99);
    assert_eq!(feed(&mut tr, "T"), "க்ஷ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "Y"), "ஸ்ரீ");
}

#[test]
fn tamil97_direct_typing() {
    let mut tr = translator(Layout::Tamil97);
    // க + இ sign
    assert_eq!(feed(&mut tr, "jd"), "கி");
    tr.terminate_composition();
    // no auto pulli in this layout
    assert_eq!(feed(&mut tr, ";i"), "நத");
}

#[test]
fn murasu6_direct_typing() {
    let mut tr = translator(Layout::Murasu6);
    // த + ஆ sign
    assert_eq!(feed(&mut tr, "hs"), "தா");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "b"), "அ");
}

#[test]
fn typewriter_left_sign_reorders() {
    let mut tr = translator(Layout::TypewriterNew);
    // ெ typed first, then க
    assert_eq!(feed(&mut tr, "bf"), "கெ");
    tr.terminate_composition();
    // ே then ம
    assert_eq!(feed(&mut tr, "nk"), "மே");
}

#[test]
fn typewriter_two_part_vowel_composes() {
    let mut tr = translator(Layout::TypewriterNew);
    // ெ + க + ா collapses into கொ
    assert_eq!(feed(&mut tr, "bfh"), "கொ");
    tr.terminate_composition();
    // ே + ம + ா gives மோ
    assert_eq!(feed(&mut tr, "nkh"), "மோ");
}

#[test]
fn typewriter_au_from_parts() {
    let mut tr = translator(Layout::TypewriterNew);
    // ெ + க + ௗ gives கௌ
    assert_eq!(feed(&mut tr, "bf`"), "கௌ");
}

#[test]
fn typewriter_second_left_sign_replaces_first() {
    let mut tr = translator(Layout::TypewriterNew);
    assert_eq!(feed(&mut tr, "bnf"), "கே");
}

#[test]
fn typewriter_precomposed_keys() {
    let mut tr = translator(Layout::TypewriterNew);
    assert_eq!(feed(&mut tr, "F"), "கு");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "o"), "டி");
}

#[test]
fn typewriter_stray_sign_cleanup() {
    let mut tr = translator(Layout::TypewriterNew);
    let mut text = String::new();
    feed_into(&mut tr, "b", &mut text);
    assert_eq!(text, "\u{200B}ெ");
    let edit = tr.cleanup_stray_vowel_sign(&text);
    assert!(edit.handled);
    assert_eq!(edit.delete_count, 2);
    for _ in 0..edit.delete_count {
        text.pop();
    }
    assert_eq!(text, "");
}

#[test]
fn mylai_typing() {
    let mut tr = translator(Layout::Mylai);
    // ெ then க
    assert_eq!(feed(&mut tr, "ek"), "கெ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "`"), "அ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "K"), "கு");
}

#[test]
fn bamini_typing() {
    let mut tr = translator(Layout::Bamini);
    assert_eq!(feed(&mut tr, "nf"), "கெ");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "fh"), "கா");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "H"), "ர்");
}

#[test]
fn tn_typewriter_literals() {
    let mut tr = translator(Layout::TnTypewriter);
    assert_eq!(feed(&mut tr, "/"), ".");
    tr.terminate_composition();
    assert_eq!(feed(&mut tr, "f;"), "க்");
}
