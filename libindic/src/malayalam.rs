//! Phonetic Malayalam layout.
//!
//! Follows the common phonetic conventions, plus a `w` key that turns a
//! dead consonant into its chillu letter, and vocalic vowels spelled
//! through the visarga (`rH` = ഋ).

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, VowelEntry,
    VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'ക' },
    ConsonantEntry { key: 'g', base: 'ഗ' },
    ConsonantEntry { key: 'n', base: 'ന' },
    ConsonantEntry { key: 'c', base: 'ച' },
    ConsonantEntry { key: 'j', base: 'ജ' },
    ConsonantEntry { key: 'T', base: 'ട' },
    ConsonantEntry { key: 'D', base: 'ഡ' },
    ConsonantEntry { key: 'N', base: 'ണ' },
    ConsonantEntry { key: 't', base: 'ത' },
    ConsonantEntry { key: 'd', base: 'ദ' },
    ConsonantEntry { key: 'p', base: 'പ' },
    ConsonantEntry { key: 'b', base: 'ബ' },
    ConsonantEntry { key: 'm', base: 'മ' },
    ConsonantEntry { key: 'y', base: 'യ' },
    ConsonantEntry { key: 'r', base: 'ര' },
    ConsonantEntry { key: 'R', base: 'റ' },
    ConsonantEntry { key: 'l', base: 'ല' },
    ConsonantEntry { key: 'L', base: 'ള' },
    ConsonantEntry { key: 'z', base: 'ഴ' },
    ConsonantEntry { key: 'v', base: 'വ' },
    ConsonantEntry { key: 'S', base: 'ശ' },
    ConsonantEntry { key: 's', base: 'സ' },
    ConsonantEntry { key: 'h', base: 'ഹ' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'അ', sign: "" },
    VowelEntry { key: 'i', independent: 'ഇ', sign: "ി" },
    VowelEntry { key: 'u', independent: 'ഉ', sign: "ു" },
    VowelEntry { key: 'e', independent: 'എ', sign: "െ" },
    VowelEntry { key: 'o', independent: 'ഒ', sign: "ൊ" },
    VowelEntry { key: 'q', independent: '്', sign: "്" },
    VowelEntry { key: 'M', independent: 'ം', sign: "ം" },
    VowelEntry { key: 'H', independent: 'ഃ', sign: "ഃ" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('അ'), from_sign: None, independent: 'ആ', sign: 'ാ' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('ഇ'), from_sign: Some('ി'), independent: 'ഈ', sign: 'ീ' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('ഉ'), from_sign: Some('ു'), independent: 'ഊ', sign: 'ൂ' },
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('എ'), from_sign: Some('െ'), independent: 'ഏ', sign: 'േ' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ഒ'), from_sign: Some('ൊ'), independent: 'ഓ', sign: 'ോ' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('അ'), from_sign: None, independent: 'ഐ', sign: 'ൈ' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('അ'), from_sign: None, independent: 'ഔ', sign: 'ൌ' },
    // Vocalic r/l ride on the visarga key.
    VowelExtension { key: 'r', prev_key: 'H', from_independent: Some('ഃ'), from_sign: Some('ഃ'), independent: 'ഋ', sign: 'ൃ' },
    VowelExtension { key: 'R', prev_key: 'H', from_independent: Some('ഃ'), from_sign: Some('ഃ'), independent: 'ൠ', sign: 'ൄ' },
    VowelExtension { key: 'l', prev_key: 'H', from_independent: Some('ഃ'), from_sign: Some('ഃ'), independent: 'ഌ', sign: 'ൢ' },
    VowelExtension { key: 'L', prev_key: 'H', from_independent: Some('ഃ'), from_sign: Some('ഃ'), independent: 'ൡ', sign: 'ൣ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'h', prev_key: Some('k'), prior: None, text: "ഖ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('g'), prior: None, text: "ഘ്", delete: 2 },
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ങ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "ഛ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('j'), prior: None, text: "ഝ്", delete: 2 },
    ClusterEntry { key: 'j', prev_key: Some('n'), prior: None, text: "ഞ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('T'), prior: None, text: "ഠ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('D'), prior: None, text: "ഢ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "ഥ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('d'), prior: None, text: "ധ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('p'), prior: None, text: "ഫ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('b'), prior: None, text: "ഭ്", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: None, text: "ഷ്", delete: 2 },
    // Chillu letters replace the dead consonant.
    ClusterEntry { key: 'w', prev_key: Some('N'), prior: None, text: "ൺ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('n'), prior: None, text: "ൻ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('R'), prior: None, text: "ർ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('r'), prior: None, text: "ർ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('l'), prior: None, text: "ൽ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('L'), prior: None, text: "ൾ", delete: 2 },
    ClusterEntry { key: 'w', prev_key: Some('k'), prior: None, text: "ൿ", delete: 2 },
];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Malayalam,
    layout: Layout::Anjal,
    kind: LayoutKind::Phonetic,
    consonants: CONSONANTS,
    vowels: VOWELS,
    extensions: EXTENSIONS,
    clusters: CLUSTERS,
    literals: &[],
    precomposed: &[],
    modifiers: &[],
    auto_pulli: &[],
    word_initial: &[],
};
