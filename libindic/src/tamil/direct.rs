//! Direct one-key-one-letter Tamil layouts: Tamil99, Tamil97 and the
//! Murasu6 (Kaniyan) layout.
//!
//! Consonant keys emit the bare letter; vowel keys emit the sign after a
//! consonant and the independent form elsewhere. Tamil99 additionally
//! inserts an automatic pulli between consonants that form one of the
//! standard clusters.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, LiteralEntry,
    VowelEntry,
};

const T99_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'Q', base: 'ஸ' },
    ConsonantEntry { key: 'W', base: 'ஷ' },
    ConsonantEntry { key: 'E', base: 'ஜ' },
    ConsonantEntry { key: 'R', base: 'ஹ' },
    ConsonantEntry { key: 'y', base: 'ள' },
    ConsonantEntry { key: 'u', base: 'ற' },
    ConsonantEntry { key: 'i', base: 'ன' },
    ConsonantEntry { key: 'o', base: 'ட' },
    ConsonantEntry { key: 'p', base: 'ண' },
    ConsonantEntry { key: '[', base: 'ச' },
    ConsonantEntry { key: ']', base: 'ஞ' },
    ConsonantEntry { key: 'h', base: 'க' },
    ConsonantEntry { key: 'j', base: 'ப' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'l', base: 'த' },
    ConsonantEntry { key: ';', base: 'ந' },
    ConsonantEntry { key: '\'', base: 'ய' },
    ConsonantEntry { key: 'v', base: 'வ' },
    ConsonantEntry { key: 'b', base: 'ங' },
    ConsonantEntry { key: 'n', base: 'ல' },
    ConsonantEntry { key: 'm', base: 'ர' },
    ConsonantEntry { key: '/', base: 'ழ' },
];

const T99_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'a', independent: 'அ', sign: "" },
    VowelEntry { key: 'q', independent: 'ஆ', sign: "ா" },
    VowelEntry { key: 's', independent: 'இ', sign: "ி" },
    VowelEntry { key: 'w', independent: 'ஈ', sign: "ீ" },
    VowelEntry { key: 'd', independent: 'உ', sign: "ு" },
    VowelEntry { key: 'e', independent: 'ஊ', sign: "ூ" },
    VowelEntry { key: 'g', independent: 'எ', sign: "ெ" },
    VowelEntry { key: 't', independent: 'ஏ', sign: "ே" },
    VowelEntry { key: 'r', independent: 'ஐ', sign: "ை" },
    VowelEntry { key: 'c', independent: 'ஒ', sign: "ொ" },
    VowelEntry { key: 'x', independent: 'ஓ', sign: "ோ" },
    VowelEntry { key: 'z', independent: 'ஔ', sign: "ௌ" },
    VowelEntry { key: 'f', independent: 'ஃ', sign: "்" },
    VowelEntry { key: 'F', independent: 'ஃ', sign: "்" },
];

const T99_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'T', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
    ClusterEntry { key: 'Y', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
];

// ங்க ஞ்ச ந்த ண்ட ம்ப ன்ற, plus any doubled consonant key.
const T99_AUTO_PULLI: &[(char, char)] =
    &[('b', 'h'), (']', '['), (';', 'l'), ('p', 'o'), ('k', 'j'), ('i', 'u')];

const T99_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: 'O', text: "[" },
    LiteralEntry { key: 'P', text: "]" },
    LiteralEntry { key: 'K', text: "\"" },
    LiteralEntry { key: 'L', text: ":" },
    LiteralEntry { key: ':', text: ";" },
    LiteralEntry { key: '"', text: "'" },
    LiteralEntry { key: 'M', text: "/" },
];

pub static TAMIL99: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Tamil99,
    kind: LayoutKind::Direct,
    consonants: T99_CONSONANTS,
    vowels: T99_VOWELS,
    extensions: &[],
    clusters: T99_CLUSTERS,
    literals: T99_LITERALS,
    precomposed: &[],
    modifiers: &[],
    auto_pulli: T99_AUTO_PULLI,
    word_initial: &[],
};

const T97_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 't', base: 'ற' },
    ConsonantEntry { key: 'u', base: 'வ' },
    ConsonantEntry { key: 'n', base: 'ல' },
    ConsonantEntry { key: 'o', base: 'ன' },
    ConsonantEntry { key: 'p', base: 'ய' },
    ConsonantEntry { key: '[', base: 'ண' },
    ConsonantEntry { key: 'b', base: 'ழ' },
    ConsonantEntry { key: 'i', base: 'த' },
    ConsonantEntry { key: 'j', base: 'க' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'h', base: 'ப' },
    ConsonantEntry { key: 'l', base: 'ட' },
    ConsonantEntry { key: ';', base: 'ந' },
    ConsonantEntry { key: 'm', base: 'ர' },
    ConsonantEntry { key: '\'', base: 'ள' },
    ConsonantEntry { key: 'y', base: 'ச' },
    ConsonantEntry { key: '/', base: 'ங' },
    ConsonantEntry { key: ']', base: 'ஞ' },
    ConsonantEntry { key: 'I', base: 'ஸ' },
    ConsonantEntry { key: 'O', base: 'ஷ' },
    ConsonantEntry { key: 'U', base: 'ஜ' },
    ConsonantEntry { key: 'P', base: 'ஹ' },
];

const T97_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'c', independent: 'அ', sign: "" },
    VowelEntry { key: 's', independent: 'ஆ', sign: "ா" },
    VowelEntry { key: 'd', independent: 'இ', sign: "ி" },
    VowelEntry { key: 'x', independent: 'ஈ', sign: "ீ" },
    VowelEntry { key: 'e', independent: 'உ', sign: "ு" },
    VowelEntry { key: 'q', independent: 'ஊ', sign: "ூ" },
    VowelEntry { key: 'g', independent: 'எ', sign: "ெ" },
    VowelEntry { key: 'r', independent: 'ஏ', sign: "ே" },
    VowelEntry { key: 'a', independent: 'ஐ', sign: "ை" },
    VowelEntry { key: 'v', independent: 'ஒ', sign: "ொ" },
    VowelEntry { key: 'w', independent: 'ஓ', sign: "ோ" },
    VowelEntry { key: 'z', independent: 'ஔ', sign: "ௌ" },
    VowelEntry { key: 'f', independent: 'ஃ', sign: "்" },
    VowelEntry { key: 'F', independent: 'ஃ', sign: "்" },
];

const T97_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: '{', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
    ClusterEntry { key: 'Y', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
];

const T97_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: 'Q', text: "(" },
    LiteralEntry { key: 'W', text: ")" },
    LiteralEntry { key: 'E', text: "(" },
    LiteralEntry { key: 'R', text: ")" },
    LiteralEntry { key: 'K', text: "\"" },
    LiteralEntry { key: 'L', text: "'" },
    LiteralEntry { key: 'Z', text: "<" },
    LiteralEntry { key: 'X', text: ">" },
    LiteralEntry { key: '<', text: ";" },
    LiteralEntry { key: '>', text: "/" },
];

pub static TAMIL97: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Tamil97,
    kind: LayoutKind::Direct,
    consonants: T97_CONSONANTS,
    vowels: T97_VOWELS,
    extensions: &[],
    clusters: T97_CLUSTERS,
    literals: T97_LITERALS,
    precomposed: &[],
    modifiers: &[],
    auto_pulli: &[],
    word_initial: &[],
};

const M6_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'Y', base: 'ஸ' },
    ConsonantEntry { key: 'I', base: 'ஷ' },
    ConsonantEntry { key: 'O', base: 'ஜ' },
    ConsonantEntry { key: 'P', base: 'ஹ' },
    ConsonantEntry { key: 'm', base: 'ள' },
    ConsonantEntry { key: 'y', base: 'ற' },
    ConsonantEntry { key: 'o', base: 'ன' },
    ConsonantEntry { key: ';', base: 'ட' },
    ConsonantEntry { key: '[', base: 'ண' },
    ConsonantEntry { key: '/', base: 'ச' },
    ConsonantEntry { key: 'K', base: 'ஞ' },
    ConsonantEntry { key: 'j', base: 'க' },
    ConsonantEntry { key: 'l', base: 'ப' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'h', base: 'த' },
    ConsonantEntry { key: '\'', base: 'ந' },
    ConsonantEntry { key: 'p', base: 'ய' },
    ConsonantEntry { key: 'u', base: 'வ' },
    ConsonantEntry { key: 'J', base: 'ங' },
    ConsonantEntry { key: 'i', base: 'ல' },
    ConsonantEntry { key: 'n', base: 'ர' },
    ConsonantEntry { key: ']', base: 'ழ' },
];

const M6_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'b', independent: 'அ', sign: "" },
    VowelEntry { key: 's', independent: 'ஆ', sign: "ா" },
    VowelEntry { key: 'd', independent: 'இ', sign: "ி" },
    VowelEntry { key: 'e', independent: 'ஈ', sign: "ீ" },
    VowelEntry { key: 'f', independent: 'உ', sign: "ு" },
    VowelEntry { key: 'w', independent: 'ஊ', sign: "ூ" },
    VowelEntry { key: 'r', independent: 'எ', sign: "ெ" },
    VowelEntry { key: 't', independent: 'ஏ', sign: "ே" },
    VowelEntry { key: 'a', independent: 'ஐ', sign: "ை" },
    VowelEntry { key: 'v', independent: 'ஒ', sign: "ொ" },
    VowelEntry { key: 'c', independent: 'ஓ', sign: "ோ" },
    VowelEntry { key: 'x', independent: 'ஔ', sign: "ௌ" },
    VowelEntry { key: 'g', independent: 'ஃ', sign: "்" },
    VowelEntry { key: 'z', independent: 'ஃ', sign: "்" },
];

const M6_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: 'L', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
    ClusterEntry { key: 'U', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
];

const M6_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: '`', text: ";" },
    LiteralEntry { key: '~', text: "'" },
];

pub static MURASU6: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Murasu6,
    kind: LayoutKind::Direct,
    consonants: M6_CONSONANTS,
    vowels: M6_VOWELS,
    extensions: &[],
    clusters: M6_CLUSTERS,
    literals: M6_LITERALS,
    precomposed: &[],
    modifiers: &[],
    auto_pulli: &[],
    word_initial: &[],
};
