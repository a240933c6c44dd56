//! Backspace handling inside compositions, in both deletion orders.

use libindic::KeyTranslator;
use libindic_core::{Layout, TranslatorConfig};

fn feed(tr: &mut KeyTranslator, keys: &str, text: &mut String) {
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

fn backspace(tr: &mut KeyTranslator, text: &mut String) {
    let edit = tr.delete_last_char(text.as_str());
    if !edit.handled {
        text.pop();
        return;
    }
    for _ in 0..edit.delete_count {
        text.pop();
    }
    text.push_str(&edit.inserted_text);
}

#[test]
fn backspace_removes_one_scalar() {
    let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
    let mut text = String::new();
    feed(&mut tr, "ki", &mut text);
    assert_eq!(text, "கி");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "க");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "");
}

#[test]
fn backspace_outside_composition_is_unhandled() {
    let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
    let edit = tr.delete_last_char("");
    assert!(!edit.handled);
    assert_eq!(edit.delete_count, 0);
    assert!(edit.inserted_text.is_empty());
}

#[test]
fn backspace_adopts_host_text() {
    // text the engine never produced still gets a one-scalar delete
    let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
    let edit = tr.delete_last_char("தமிழ்");
    assert!(edit.handled);
    assert_eq!(edit.delete_count, 1);
    assert!(edit.inserted_text.is_empty());
}

#[test]
fn append_then_backspace_restores_text() {
    let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
    let mut text = String::new();
    feed(&mut tr, "ka", &mut text);
    let before = text.clone();
    feed(&mut tr, "a", &mut text);
    assert_eq!(text, "கா");
    backspace(&mut tr, &mut text);
    // ா was a pure append, so one backspace restores the old text
    assert_eq!(text, before);
}

#[test]
fn reverse_order_peels_two_part_vowel() {
    let config = TranslatorConfig {
        layout: Layout::TypewriterNew,
        reverse_delete_order: true,
        ..Default::default()
    };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    let mut text = String::new();
    feed(&mut tr, "bfh", &mut text);
    assert_eq!(text, "கொ");
    backspace(&mut tr, &mut text);
    // right part first, consonant stays
    assert_eq!(text, "கெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "க\u{200B}");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "க");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "");
}

#[test]
fn reverse_order_removes_parked_pair_whole() {
    let config = TranslatorConfig {
        layout: Layout::TypewriterNew,
        reverse_delete_order: true,
        ..Default::default()
    };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    let mut text = String::new();
    feed(&mut tr, "b", &mut text);
    assert_eq!(text, "\u{200B}ெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "");
}

#[test]
fn reverse_order_is_ignored_on_logical_layouts() {
    let config = TranslatorConfig { reverse_delete_order: true, ..Default::default() };
    let mut tr = KeyTranslator::new(config).expect("anjal");
    let mut text = String::new();
    feed(&mut tr, "ko", &mut text);
    assert_eq!(text, "கொ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "க");
}

#[test]
fn delete_order_changes_at_runtime() {
    let config = TranslatorConfig { layout: Layout::TypewriterNew, ..Default::default() };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    let mut text = String::new();
    feed(&mut tr, "bf", &mut text);
    assert_eq!(text, "கெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "க");
    tr.set_reverse_delete_order(true);
    feed(&mut tr, "bf", &mut text);
    assert_eq!(text, "ககெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "கக\u{200B}");
}

#[test]
fn default_order_deletes_placeholder_pair_one_by_one() {
    let config = TranslatorConfig { layout: Layout::TypewriterNew, ..Default::default() };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    let mut text = String::new();
    feed(&mut tr, "b", &mut text);
    assert_eq!(text, "\u{200B}ெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "\u{200B}");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "");
}

#[test]
fn backspace_on_parked_sign_forgets_the_pending_vowel() {
    let config = TranslatorConfig { layout: Layout::TypewriterNew, ..Default::default() };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    let mut text = String::from("xy");
    feed(&mut tr, "b", &mut text);
    assert_eq!(text, "xy\u{200B}ெ");
    backspace(&mut tr, &mut text);
    assert_eq!(text, "xy\u{200B}");
    // the sign is gone, so the next consonant must not reorder with it
    feed(&mut tr, "f", &mut text);
    assert_eq!(text, "xy\u{200B}க");
}

#[test]
fn cleanup_recovers_after_external_edit() {
    let config = TranslatorConfig { layout: Layout::TypewriterNew, ..Default::default() };
    let mut tr = KeyTranslator::new(config).expect("typewriter");
    // the host replaced the buffer behind the engine's back, leaving a
    // parked pair the engine never saw
    tr.terminate_composition();
    let edit = tr.cleanup_stray_vowel_sign("வணக்கம்\u{200B}ெ");
    assert!(edit.handled);
    assert_eq!(edit.delete_count, 2);
    assert!(edit.inserted_text.is_empty());
}

#[test]
fn backspace_after_guarded_cluster_removes_guard_with_unit() {
    let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
    let mut text = String::new();
    feed(&mut tr, "ksha", &mut text);
    assert_eq!(text, "க்\u{200C}ஷ");
    backspace(&mut tr, &mut text);
    // the host-side ZWNJ goes together with the letter it guarded
    assert_eq!(text, "க்");
}
