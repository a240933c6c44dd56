//! Phonetic Kannada layout.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, VowelEntry,
    VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'ಕ' },
    ConsonantEntry { key: 'g', base: 'ಗ' },
    ConsonantEntry { key: 'n', base: 'ನ' },
    ConsonantEntry { key: 'c', base: 'ಚ' },
    ConsonantEntry { key: 'j', base: 'ಜ' },
    ConsonantEntry { key: 'T', base: 'ಟ' },
    ConsonantEntry { key: 'D', base: 'ಡ' },
    ConsonantEntry { key: 'N', base: 'ಣ' },
    ConsonantEntry { key: 't', base: 'ತ' },
    ConsonantEntry { key: 'd', base: 'ದ' },
    ConsonantEntry { key: 'p', base: 'ಪ' },
    ConsonantEntry { key: 'b', base: 'ಬ' },
    ConsonantEntry { key: 'm', base: 'ಮ' },
    ConsonantEntry { key: 'y', base: 'ಯ' },
    ConsonantEntry { key: 'r', base: 'ರ' },
    ConsonantEntry { key: 'R', base: 'ಱ' },
    ConsonantEntry { key: 'l', base: 'ಲ' },
    ConsonantEntry { key: 'L', base: 'ಳ' },
    ConsonantEntry { key: 'f', base: 'ೞ' },
    ConsonantEntry { key: 'v', base: 'ವ' },
    ConsonantEntry { key: 'S', base: 'ಶ' },
    ConsonantEntry { key: 's', base: 'ಸ' },
    ConsonantEntry { key: 'h', base: 'ಹ' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'ಅ', sign: "" },
    VowelEntry { key: 'i', independent: 'ಇ', sign: "ಿ" },
    VowelEntry { key: 'u', independent: 'ಉ', sign: "ು" },
    VowelEntry { key: 'e', independent: 'ಎ', sign: "ೆ" },
    VowelEntry { key: 'o', independent: 'ಒ', sign: "ೊ" },
    VowelEntry { key: 'q', independent: '್', sign: "್" },
    VowelEntry { key: 'M', independent: 'ಂ', sign: "ಂ" },
    VowelEntry { key: 'H', independent: 'ಃ', sign: "ಃ" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('ಅ'), from_sign: None, independent: 'ಆ', sign: 'ಾ' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('ಇ'), from_sign: Some('ಿ'), independent: 'ಈ', sign: 'ೀ' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('ಉ'), from_sign: Some('ು'), independent: 'ಊ', sign: 'ೂ' },
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('ಎ'), from_sign: Some('ೆ'), independent: 'ಏ', sign: 'ೇ' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ಒ'), from_sign: Some('ೊ'), independent: 'ಓ', sign: 'ೋ' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('ಅ'), from_sign: None, independent: 'ಐ', sign: 'ೈ' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('ಅ'), from_sign: None, independent: 'ಔ', sign: 'ೌ' },
    VowelExtension { key: 'r', prev_key: 'H', from_independent: Some('ಃ'), from_sign: Some('ಃ'), independent: 'ಋ', sign: 'ೃ' },
    VowelExtension { key: 'R', prev_key: 'H', from_independent: Some('ಃ'), from_sign: Some('ಃ'), independent: 'ೠ', sign: 'ೄ' },
    VowelExtension { key: 'l', prev_key: 'H', from_independent: Some('ಃ'), from_sign: Some('ಃ'), independent: 'ಌ', sign: 'ೢ' },
    VowelExtension { key: 'L', prev_key: 'H', from_independent: Some('ಃ'), from_sign: Some('ಃ'), independent: 'ೡ', sign: 'ೣ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'h', prev_key: Some('k'), prior: None, text: "ಖ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('g'), prior: None, text: "ಘ್", delete: 2 },
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ಙ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "ಛ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('j'), prior: None, text: "ಝ್", delete: 2 },
    ClusterEntry { key: 'j', prev_key: Some('n'), prior: None, text: "ಞ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('T'), prior: None, text: "ಠ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('D'), prior: None, text: "ಢ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "ಥ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('d'), prior: None, text: "ಧ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('p'), prior: None, text: "ಫ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('b'), prior: None, text: "ಭ್", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: None, text: "ಷ್", delete: 2 },
];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Kannada,
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
