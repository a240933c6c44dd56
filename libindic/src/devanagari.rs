//! Phonetic Devanagari layout.
//!
//! Same key conventions as the other phonetic maps: consonants land
//! dead, vowels respell, `h` aspirates, doubled vowels lengthen. The
//! nukta forms hang off `q` after the plain dead consonant, and `|`
//! doubles into the double danda.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, LiteralEntry,
    VowelEntry, VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'क' },
    ConsonantEntry { key: 'g', base: 'ग' },
    ConsonantEntry { key: 'n', base: 'न' },
    ConsonantEntry { key: 'c', base: 'च' },
    ConsonantEntry { key: 'j', base: 'ज' },
    ConsonantEntry { key: 'T', base: 'ट' },
    ConsonantEntry { key: 'D', base: 'ड' },
    ConsonantEntry { key: 'N', base: 'ण' },
    ConsonantEntry { key: 't', base: 'त' },
    ConsonantEntry { key: 'd', base: 'द' },
    ConsonantEntry { key: 'p', base: 'प' },
    ConsonantEntry { key: 'b', base: 'ब' },
    ConsonantEntry { key: 'm', base: 'म' },
    ConsonantEntry { key: 'y', base: 'य' },
    ConsonantEntry { key: 'r', base: 'र' },
    ConsonantEntry { key: 'l', base: 'ल' },
    ConsonantEntry { key: 'z', base: 'श' },
    ConsonantEntry { key: 'v', base: 'व' },
    ConsonantEntry { key: 's', base: 'स' },
    ConsonantEntry { key: 'S', base: 'ष' },
    ConsonantEntry { key: 'h', base: 'ह' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'अ', sign: "" },
    VowelEntry { key: 'i', independent: 'इ', sign: "ि" },
    VowelEntry { key: 'u', independent: 'उ', sign: "ु" },
    VowelEntry { key: 'e', independent: 'ए', sign: "े" },
    VowelEntry { key: 'o', independent: 'ओ', sign: "ो" },
    VowelEntry { key: 'E', independent: 'ऎ', sign: "ॆ" },
    VowelEntry { key: 'O', independent: 'ऒ', sign: "ॊ" },
    VowelEntry { key: 'R', independent: 'ऋ', sign: "ृ" },
    VowelEntry { key: 'L', independent: 'ऌ', sign: "ॢ" },
    VowelEntry { key: 'A', independent: 'आ', sign: "ा" },
    VowelEntry { key: 'I', independent: 'ई', sign: "ी" },
    VowelEntry { key: 'U', independent: 'ऊ', sign: "ू" },
    VowelEntry { key: 'M', independent: 'ं', sign: "ं" },
    VowelEntry { key: 'H', independent: 'ः', sign: "ः" },
    VowelEntry { key: 'Q', independent: 'ँ', sign: "ँ" },
    VowelEntry { key: 'q', independent: '्', sign: "्" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('अ'), from_sign: None, independent: 'आ', sign: 'ा' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('इ'), from_sign: Some('ि'), independent: 'ई', sign: 'ी' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('उ'), from_sign: Some('ु'), independent: 'ऊ', sign: 'ू' },
    // ee gives candra e, eee the short e.
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('ए'), from_sign: Some('े'), independent: 'ऍ', sign: 'ॅ' },
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('ऍ'), from_sign: Some('ॅ'), independent: 'ऎ', sign: 'ॆ' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ओ'), from_sign: Some('ो'), independent: 'ऑ', sign: 'ॉ' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ऑ'), from_sign: Some('ॉ'), independent: 'ऒ', sign: 'ॊ' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('अ'), from_sign: None, independent: 'ऐ', sign: 'ै' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('अ'), from_sign: None, independent: 'औ', sign: 'ौ' },
    VowelExtension { key: 'r', prev_key: 'R', from_independent: Some('ऋ'), from_sign: Some('ृ'), independent: 'ॠ', sign: 'ॄ' },
    VowelExtension { key: 'l', prev_key: 'L', from_independent: Some('ऌ'), from_sign: Some('ॢ'), independent: 'ॡ', sign: 'ॣ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'h', prev_key: Some('k'), prior: None, text: "ख्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('g'), prior: None, text: "घ्", delete: 2 },
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ङ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "छ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('j'), prior: None, text: "झ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('T'), prior: None, text: "ठ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('D'), prior: None, text: "ढ्", delete: 2 },
    ClusterEntry { key: 'y', prev_key: Some('n'), prior: None, text: "ञ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "थ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('d'), prior: None, text: "ध्", delete: 2 },
    ClusterEntry { key: 'n', prev_key: Some('n'), prior: None, text: "ऩ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('p'), prior: None, text: "फ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('b'), prior: None, text: "भ्", delete: 2 },
    ClusterEntry { key: 'r', prev_key: Some('r'), prior: None, text: "ऱ्", delete: 2 },
    ClusterEntry { key: 'l', prev_key: Some('l'), prior: None, text: "ळ्", delete: 2 },
    ClusterEntry { key: 'l', prev_key: Some('l'), prior: Some("ळ्"), text: "ऴ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('z'), prior: None, text: "ऴ्", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: None, text: "श्", delete: 2 },
    // Nukta forms respell the plain dead consonant.
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("क्"), text: "क़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ख्"), text: "ख़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ग्"), text: "ग़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ज्"), text: "ज़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ड्"), text: "ड़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("ढ्"), text: "ढ़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("फ्"), text: "फ़्", delete: 2 },
    ClusterEntry { key: 'q', prev_key: Some('q'), prior: Some("य्"), text: "य़्", delete: 2 },
    ClusterEntry { key: 'M', prev_key: Some('o'), prior: Some("ओ"), text: "ॐ", delete: 1 },
    ClusterEntry { key: '|', prev_key: Some('|'), prior: Some("।"), text: "॥", delete: 1 },
];

const LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: '|', text: "।" },
    LiteralEntry { key: '#', text: "ऽ" },
];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Devanagari,
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
