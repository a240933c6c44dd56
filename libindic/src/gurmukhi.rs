//! Phonetic Gurmukhi layout.
//!
//! Adds the addak (`x`), tippi (`mM` after a nasal sign) and the
//! pairin yakash (`Y`). Nukta letters have their own keys and can also
//! be respelled with a doubled `q`.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, LiteralEntry,
    VowelEntry, VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'ਕ' },
    ConsonantEntry { key: 'g', base: 'ਗ' },
    ConsonantEntry { key: 'n', base: 'ਨ' },
    ConsonantEntry { key: 'c', base: 'ਚ' },
    ConsonantEntry { key: 'j', base: 'ਜ' },
    ConsonantEntry { key: 'T', base: 'ਟ' },
    ConsonantEntry { key: 'D', base: 'ਡ' },
    ConsonantEntry { key: 'N', base: 'ਣ' },
    ConsonantEntry { key: 't', base: 'ਤ' },
    ConsonantEntry { key: 'd', base: 'ਦ' },
    ConsonantEntry { key: 'p', base: 'ਪ' },
    ConsonantEntry { key: 'b', base: 'ਬ' },
    ConsonantEntry { key: 'm', base: 'ਮ' },
    ConsonantEntry { key: 'y', base: 'ਯ' },
    ConsonantEntry { key: 'r', base: 'ਰ' },
    ConsonantEntry { key: 'l', base: 'ਲ' },
    ConsonantEntry { key: 'L', base: 'ਲ਼' },
    ConsonantEntry { key: 'v', base: 'ਵ' },
    ConsonantEntry { key: 's', base: 'ਸ' },
    ConsonantEntry { key: 'h', base: 'ਹ' },
    ConsonantEntry { key: 'K', base: 'ਖ਼' },
    ConsonantEntry { key: 'G', base: 'ਗ਼' },
    ConsonantEntry { key: 'z', base: 'ਜ਼' },
    ConsonantEntry { key: 'R', base: 'ੜ' },
    ConsonantEntry { key: 'f', base: 'ਫ਼' },
    ConsonantEntry { key: 'Y', base: 'ੵ' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'ਅ', sign: "" },
    VowelEntry { key: 'i', independent: 'ਇ', sign: "ਿ" },
    VowelEntry { key: 'u', independent: 'ਉ', sign: "ੁ" },
    VowelEntry { key: 'e', independent: 'ਏ', sign: "ੇ" },
    VowelEntry { key: 'o', independent: 'ਓ', sign: "ੋ" },
    VowelEntry { key: 'x', independent: 'ੱ', sign: "ੱ" },
    VowelEntry { key: 'M', independent: 'ਂ', sign: "ਂ" },
    VowelEntry { key: 'H', independent: 'ਃ', sign: "ਃ" },
    VowelEntry { key: 'q', independent: '੍', sign: "੍" },
    VowelEntry { key: 'Q', independent: 'ਁ', sign: "ਁ" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('ਅ'), from_sign: None, independent: 'ਆ', sign: 'ਾ' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('ਇ'), from_sign: Some('ਿ'), independent: 'ਈ', sign: 'ੀ' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('ਉ'), from_sign: Some('ੁ'), independent: 'ਊ', sign: 'ੂ' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('ਅ'), from_sign: None, independent: 'ਐ', sign: 'ੈ' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('ਅ'), from_sign: None, independent: 'ਔ', sign: 'ੌ' },
    // Bindi then m turns into tippi.
    VowelExtension { key: 'm', prev_key: 'M', from_independent: Some('ਂ'), from_sign: Some('ਂ'), independent: 'ੰ', sign: 'ੰ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'h', prev_key: Some('k'), prior: None, text: "ਖ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('g'), prior: None, text: "ਘ੍", delete: 2 },
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ਙ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "ਛ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('j'), prior: None, text: "ਝ੍", delete: 2 },
    ClusterEntry { key: 'y', prev_key: Some('n'), prior: None, text: "ਞ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('T'), prior: None, text: "ਠ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('D'), prior: None, text: "ਢ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "ਥ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('d'), prior: None, text: "ਧ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('p'), prior: None, text: "ਫ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('b'), prior: None, text: "ਭ੍", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: None, text: "ਸ਼੍", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ਖ੍"), text: "ਖ਼੍", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ਗ੍"), text: "ਗ਼੍", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ਜ੍"), text: "ਜ਼੍", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ਫ੍"), text: "ਫ਼੍", delete: 2 },
    ClusterEntry { key: '|', prev_key: Some('|'), prior: Some("।"), text: "॥", delete: 1 },
];

const LITERALS: &[LiteralEntry] = &[LiteralEntry { key: '|', text: "।" }];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Gurmukhi,
    layout: Layout::Anjal,
    kind: LayoutKind::Phonetic,
    consonants: CONSONANTS,
    vowels: VOWELS,
    extensions: EXTENSIONS,
    clusters: CLUSTERS,
    literals: LITERALS,
    precomposed: &[],
    modifiers: &[],
    auto_pulli: &[],
    word_initial: &[],
};
