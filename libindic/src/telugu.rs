//! Phonetic Telugu layout.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, VowelEntry,
    VowelExtension,
};

const CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'k', base: 'క' },
    ConsonantEntry { key: 'g', base: 'గ' },
    ConsonantEntry { key: 'n', base: 'న' },
    ConsonantEntry { key: 'c', base: 'చ' },
    ConsonantEntry { key: 'j', base: 'జ' },
    ConsonantEntry { key: 'T', base: 'ట' },
    ConsonantEntry { key: 'D', base: 'డ' },
    ConsonantEntry { key: 'N', base: 'ణ' },
    ConsonantEntry { key: 't', base: 'త' },
    ConsonantEntry { key: 'd', base: 'ద' },
    ConsonantEntry { key: 'p', base: 'ప' },
    ConsonantEntry { key: 'b', base: 'బ' },
    ConsonantEntry { key: 'm', base: 'మ' },
    ConsonantEntry { key: 'y', base: 'య' },
    ConsonantEntry { key: 'r', base: 'ర' },
    ConsonantEntry { key: 'R', base: 'ఱ' },
    ConsonantEntry { key: 'l', base: 'ల' },
    ConsonantEntry { key: 'L', base: 'ళ' },
    ConsonantEntry { key: 'z', base: 'ఴ' },
    ConsonantEntry { key: 'v', base: 'వ' },
    ConsonantEntry { key: 'S', base: 'శ' },
    ConsonantEntry { key: 's', base: 'స' },
    ConsonantEntry { key: 'h', base: 'హ' },
];

const VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'అ', sign: "" },
    VowelEntry { key: 'i', independent: 'ఇ', sign: "ి" },
    VowelEntry { key: 'u', independent: 'ఉ', sign: "ు" },
    VowelEntry { key: 'e', independent: 'ఎ', sign: "ె" },
    VowelEntry { key: 'o', independent: 'ఒ', sign: "ొ" },
    VowelEntry { key: 'q', independent: '్', sign: "్" },
    VowelEntry { key: 'M', independent: 'ం', sign: "ం" },
    VowelEntry { key: 'H', independent: 'ః', sign: "ః" },
    VowelEntry { key: 'Q', independent: 'ఁ', sign: "ఁ" },
];

const EXTENSIONS: &[VowelExtension] = &[
    VowelExtension { key: 'a', prev_key: 'a', from_independent: Some('అ'), from_sign: None, independent: 'ఆ', sign: 'ా' },
    VowelExtension { key: 'i', prev_key: 'i', from_independent: Some('ఇ'), from_sign: Some('ి'), independent: 'ఈ', sign: 'ీ' },
    VowelExtension { key: 'u', prev_key: 'u', from_independent: Some('ఉ'), from_sign: Some('ు'), independent: 'ఊ', sign: 'ూ' },
    VowelExtension { key: 'e', prev_key: 'e', from_independent: Some('ఎ'), from_sign: Some('ె'), independent: 'ఏ', sign: 'ే' },
    VowelExtension { key: 'o', prev_key: 'o', from_independent: Some('ఒ'), from_sign: Some('ొ'), independent: 'ఓ', sign: 'ో' },
    VowelExtension { key: 'i', prev_key: 'a', from_independent: Some('అ'), from_sign: None, independent: 'ఐ', sign: 'ై' },
    VowelExtension { key: 'u', prev_key: 'a', from_independent: Some('అ'), from_sign: None, independent: 'ఔ', sign: 'ౌ' },
    VowelExtension { key: 'r', prev_key: 'H', from_independent: Some('ః'), from_sign: Some('ః'), independent: 'ఋ', sign: 'ృ' },
    VowelExtension { key: 'R', prev_key: 'H', from_independent: Some('ః'), from_sign: Some('ః'), independent: 'ౠ', sign: 'ౄ' },
    VowelExtension { key: 'l', prev_key: 'H', from_independent: Some('ః'), from_sign: Some('ః'), independent: 'ఌ', sign: 'ౢ' },
    VowelExtension { key: 'L', prev_key: 'H', from_independent: Some('ః'), from_sign: Some('ః'), independent: 'ౡ', sign: 'ౣ' },
];

const CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'h', prev_key: Some('k'), prior: None, text: "ఖ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('g'), prior: None, text: "ఘ్", delete: 2 },
    ClusterEntry { key: 'g', prev_key: Some('n'), prior: None, text: "ఙ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('c'), prior: None, text: "ఛ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('j'), prior: None, text: "ఝ్", delete: 2 },
    ClusterEntry { key: 'j', prev_key: Some('n'), prior: None, text: "ఞ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('T'), prior: None, text: "ఠ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('D'), prior: None, text: "ఢ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('t'), prior: None, text: "థ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('d'), prior: None, text: "ధ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('p'), prior: None, text: "ఫ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('b'), prior: None, text: "భ్", delete: 2 },
    ClusterEntry { key: 'h', prev_key: Some('s'), prior: None, text: "ష్", delete: 2 },
];

pub static TABLE: LayoutTable = LayoutTable {
    language: Language::Telugu,
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
