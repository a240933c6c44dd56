//! Phonetic Anjal layout for Tamil.
//!
//! Keys spell sounds: a consonant key emits the dead consonant (base +
//! pulli) and vowel keys respell the syllable. Doubled vowel keys
//! lengthen (`aa` = ஆ), and a handful of consonant sequences rewrite to
//! clusters (`tr` = ற்ற், `nd` = ண்ட்).

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, LiteralEntry,
    ModifierEntry, ModifierKind, VowelEntry, VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'க' },
    ConsonantEntry { key: 'g', base: 'க' },
    ConsonantEntry { key: 'c', base: 'ச' },
    ConsonantEntry { key: 's', base: 'ச' },
    ConsonantEntry { key: 'd', base: 'ட' },
    ConsonantEntry { key: 't', base: 'த' },
    ConsonantEntry { key: 'p', base: 'ப' },
    ConsonantEntry { key: 'b', base: 'ப' },
    ConsonantEntry { key: 'R', base: 'ற' },
    ConsonantEntry { key: 'y', base: 'ய' },
    ConsonantEntry { key: 'r', base: 'ர' },
    ConsonantEntry { key: 'l', base: 'ல' },
    ConsonantEntry { key: 'v', base: 'வ' },
    ConsonantEntry { key: 'z', base: 'ழ' },
    ConsonantEntry { key: 'L', base: 'ள' },
    ConsonantEntry { key: 'N', base: 'ண' },
    ConsonantEntry { key: 'w', base: 'ந' },
    ConsonantEntry { key: 'm', base: 'ம' },
    // Alveolar ன by default; word-initially the dental ந applies.
    ConsonantEntry { key: 'n', base: 'ன' },
    ConsonantEntry { key: 'W', base: 'ன' },
    ConsonantEntry { key: 'j', base: 'ஜ' },
    ConsonantEntry { key: 'S', base: 'ஸ' },
    ConsonantEntry { key: 'h', base: 'ஹ' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'அ', sign: "" },
    VowelEntry { key: 'i', independent: 'இ', sign: "ி" },
    VowelEntry { key: 'u', independent: 'உ', sign: "ு" },
    VowelEntry { key: 'e', independent: 'எ', sign: "ெ" },
    VowelEntry { key: 'o', independent: 'ஒ', sign: "ொ" },
    VowelEntry { key: 'A', independent: 'ஆ', sign: "ா" },
    VowelEntry { key: 'I', independent: 'ஈ', sign: "ீ" },
    VowelEntry { key: 'U', independent: 'ஊ', sign: "ூ" },
    VowelEntry { key: 'E', independent: 'ஏ', sign: "ே" },
    VowelEntry { key: 'O', independent: 'ஓ', sign: "ோ" },
    VowelEntry { key: 'q', independent: 'ஃ', sign: "்" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('அ'), from_sign: None, independent: 'ஆ', sign: 'ா' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('இ'), from_sign: Some('ி'), independent: 'ஈ', sign: 'ீ' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('உ'), from_sign: Some('ு'), independent: 'ஊ', sign: 'ூ' },
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('எ'), from_sign: Some('ெ'), independent: 'ஏ', sign: 'ே' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ஒ'), from_sign: Some('ொ'), independent: 'ஓ', sign: 'ோ' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('அ'), from_sign: None, independent: 'ஐ', sign: 'ை' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('அ'), from_sign: None, independent: 'ஔ', sign: 'ௌ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    // Aspirate respellings fold onto the same letter.
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "ச்", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "த்", delete: 2 },
    // Nasal clusters.
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ங்", delete: 2 },
    ClusterEntry { key: 'j', prev_key: Some('n'), prior: None, text: "ஞ்", delete: 2 },
    ClusterEntry { key: 't', prev_key: Some('n'), prior: None, text: "ந்த்", delete: 2 },
    ClusterEntry { key: 'd', prev_key: Some('n'), prior: None, text: "ண்ட்", delete: 2 },
    ClusterEntry { key: 'r', prev_key: Some('d'), prior: Some("ண்ட்"), text: "ன்ற்", delete: 4 },
    ClusterEntry { key: 'r', prev_key: Some('t'), prior: None, text: "ற்ற்", delete: 2 },
    ClusterEntry { key: 'l', prev_key: Some('L'), prior: None, text: "ள்", delete: 0 },
    // sh respells ச to ஷ; after a dead க the ZWNJ guard kicks in.
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: Some("க்ச்"), text: "ஷ்", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: Some("ச்"), text: "ஷ்", delete: 2 },
    // sri
    ClusterEntry { key: 'r', prev_key: Some('s'), prior: Some("ச்"), text: "ஸ்ர்", delete: 2 },
    ClusterEntry { key: 'i', prev_key: Some('r'), prior: Some("ஸ்ர்"), text: "ஸ்ரீ", delete: 4 },
    ClusterEntry { key: 'x', prev_key: None, prior: None, text: "க்ஷ்", delete: 0 },
    // Om ligature on the completed ஓ only.
    ClusterEntry { key: 'M', prev_key: Some('O'), prior: Some("ஓ"), text: "ௐ", delete: 1 },
];

const LITERALS: &[LiteralEntry] = &[LiteralEntry { key: '$', text: "₹" }];

const MODIFIERS: &[ModifierEntry] =
    &[ModifierEntry { key: 'f', sign: '்', kind: ModifierKind::Respell }];

const WORD_INITIAL: &[(char, &str)] = &[('n', "ந்")];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Anjal,
    kind: LayoutKind::Phonetic,
    consonants: CONSONANTS,
    vowels: VOWELS,
    extensions: EXTENSIONS,
    clusters: CLUSTERS,
    literals: LITERALS,
    precomposed: &[],
    modifiers: MODIFIERS,
    auto_pulli: &[],
    word_initial: WORD_INITIAL,
};
