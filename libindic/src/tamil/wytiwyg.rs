//! Visual-order typewriter layouts: Mylai, the modernised typewriter
//! pair, the TN government typewriter map and Bamini.
//!
//! These maps type in display order, so a left-side vowel sign arrives
//! before its consonant. The engine parks the sign behind a placeholder
//! and reorders once the consonant lands. Frequent consonant+u shapes
//! have dedicated precomposed keys.

use libindic_core::{
    ClusterEntry, ConsonantEntry, Language, Layout, LayoutKind, LayoutTable, LiteralEntry,
    ModifierEntry, ModifierKind, PrecomposedEntry, VowelEntry,
};

const MYLAI_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: 'q', base: 'ள' },
    ConsonantEntry { key: 'w', base: 'ஞ' },
    ConsonantEntry { key: 'r', base: 'ர' },
    ConsonantEntry { key: 't', base: 'த' },
    ConsonantEntry { key: 'y', base: 'ய' },
    ConsonantEntry { key: 'p', base: 'ப' },
    ConsonantEntry { key: '[', base: 'ஹ' },
    ConsonantEntry { key: ']', base: 'ஜ' },
    ConsonantEntry { key: 's', base: 'ஸ' },
    ConsonantEntry { key: 'd', base: 'ட' },
    ConsonantEntry { key: 'g', base: 'ங' },
    ConsonantEntry { key: 'h', base: 'ண' },
    ConsonantEntry { key: 'j', base: 'ன' },
    ConsonantEntry { key: 'k', base: 'க' },
    ConsonantEntry { key: 'l', base: 'ல' },
    ConsonantEntry { key: 'z', base: 'ழ' },
    ConsonantEntry { key: 'x', base: 'ஷ' },
    ConsonantEntry { key: 'c', base: 'ச' },
    ConsonantEntry { key: 'v', base: 'வ' },
    ConsonantEntry { key: 'b', base: 'ற' },
    ConsonantEntry { key: 'n', base: 'ந' },
    ConsonantEntry { key: 'm', base: 'ம' },
];

const MYLAI_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: '`', independent: 'அ', sign: "" },
    VowelEntry { key: '~', independent: 'ஆ', sign: "" },
    VowelEntry { key: ';', independent: 'இ', sign: "" },
    VowelEntry { key: ':', independent: 'ஈ', sign: "" },
    VowelEntry { key: 'u', independent: 'உ', sign: "" },
    VowelEntry { key: 'U', independent: 'ஊ', sign: "" },
    VowelEntry { key: '\'', independent: 'எ', sign: "" },
    VowelEntry { key: '"', independent: 'ஏ', sign: "" },
    VowelEntry { key: '_', independent: 'ஐ', sign: "" },
    VowelEntry { key: 'o', independent: 'ஒ', sign: "" },
    VowelEntry { key: 'O', independent: 'ஓ', sign: "" },
    VowelEntry { key: '$', independent: 'ஔ', sign: "" },
    VowelEntry { key: '#', independent: 'ஃ', sign: "" },
];

const MYLAI_PRECOMPOSED: &[PrecomposedEntry] = &[
    PrecomposedEntry { key: 'Q', text: "ளு" },
    PrecomposedEntry { key: 'W', text: "ஞு" },
    PrecomposedEntry { key: 'R', text: "ரு" },
    PrecomposedEntry { key: 'T', text: "து" },
    PrecomposedEntry { key: 'P', text: "கூ" },
    PrecomposedEntry { key: 'D', text: "டு" },
    PrecomposedEntry { key: 'F', text: "டி" },
    PrecomposedEntry { key: 'G', text: "டீ" },
    PrecomposedEntry { key: 'H', text: "ணு" },
    PrecomposedEntry { key: 'J', text: "னு" },
    PrecomposedEntry { key: 'K', text: "கு" },
    PrecomposedEntry { key: 'L', text: "லு" },
    PrecomposedEntry { key: 'Z', text: "ழு" },
    PrecomposedEntry { key: 'C', text: "சு" },
    PrecomposedEntry { key: 'V', text: "சூ" },
    PrecomposedEntry { key: 'B', text: "று" },
    PrecomposedEntry { key: 'N', text: "நு" },
    PrecomposedEntry { key: 'M', text: "மு" },
];

const MYLAI_MODIFIERS: &[ModifierEntry] = &[
    ModifierEntry { key: 'A', sign: 'ை', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'e', sign: 'ெ', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'E', sign: 'ே', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'a', sign: 'ா', kind: ModifierKind::Sign },
    ModifierEntry { key: '{', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: '}', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: 'i', sign: 'ி', kind: ModifierKind::Sign },
    ModifierEntry { key: 'I', sign: 'ீ', kind: ModifierKind::Sign },
    ModifierEntry { key: '<', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: '>', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: 'f', sign: '்', kind: ModifierKind::Sign },
    ModifierEntry { key: 'Y', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '\\', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: 'S', sign: 'ௗ', kind: ModifierKind::AuMark },
];

const MYLAI_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: '!', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
    ClusterEntry { key: 'X', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
];

pub static MYLAI: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Mylai,
    kind: LayoutKind::Wytiwyg,
    consonants: MYLAI_CONSONANTS,
    vowels: MYLAI_VOWELS,
    extensions: &[],
    clusters: MYLAI_CLUSTERS,
    literals: &[],
    precomposed: MYLAI_PRECOMPOSED,
    modifiers: MYLAI_MODIFIERS,
    auto_pulli: &[],
    word_initial: &[],
};

// The new and old typewriter maps share one table; they differ only in
// keys outside the mapped set.
const TW_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: '|', base: 'ஸ' },
    ConsonantEntry { key: '$', base: 'ஜ' },
    ConsonantEntry { key: '&', base: 'ஷ' },
    ConsonantEntry { key: '+', base: 'ஹ' },
    ConsonantEntry { key: 'w', base: 'ற' },
    ConsonantEntry { key: 'e', base: 'ந' },
    ConsonantEntry { key: 'r', base: 'ச' },
    ConsonantEntry { key: 't', base: 'வ' },
    ConsonantEntry { key: 'y', base: 'ல' },
    ConsonantEntry { key: 'u', base: 'ர' },
    ConsonantEntry { key: 'a', base: 'ய' },
    ConsonantEntry { key: 's', base: 'ள' },
    ConsonantEntry { key: 'd', base: 'ன' },
    ConsonantEntry { key: 'f', base: 'க' },
    ConsonantEntry { key: 'g', base: 'ப' },
    ConsonantEntry { key: 'j', base: 'த' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'l', base: 'ட' },
    ConsonantEntry { key: '\'', base: 'ங' },
    ConsonantEntry { key: 'H', base: 'ழ' },
    ConsonantEntry { key: '"', base: 'ஞ' },
    ConsonantEntry { key: 'z', base: 'ண' },
];

const TW_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'm', independent: 'அ', sign: "" },
    VowelEntry { key: 'M', independent: 'ஆ', sign: "" },
    VowelEntry { key: '/', independent: 'இ', sign: "" },
    VowelEntry { key: '<', independent: 'ஈ', sign: "" },
    VowelEntry { key: 'c', independent: 'உ', sign: "" },
    VowelEntry { key: 'C', independent: 'ஊ', sign: "" },
    VowelEntry { key: 'v', independent: 'எ', sign: "" },
    VowelEntry { key: 'V', independent: 'ஏ', sign: "" },
    VowelEntry { key: 'I', independent: 'ஐ', sign: "" },
    VowelEntry { key: 'x', independent: 'ஒ', sign: "" },
    VowelEntry { key: 'X', independent: 'ஓ', sign: "" },
    VowelEntry { key: '~', independent: 'ஃ', sign: "" },
];

const TW_PRECOMPOSED: &[PrecomposedEntry] = &[
    PrecomposedEntry { key: 'q', text: "ணு" },
    PrecomposedEntry { key: 'o', text: "டி" },
    PrecomposedEntry { key: 'W', text: "று" },
    PrecomposedEntry { key: 'E', text: "நு" },
    PrecomposedEntry { key: 'R', text: "சு" },
    PrecomposedEntry { key: 'T', text: "கூ" },
    PrecomposedEntry { key: 'Y', text: "லு" },
    PrecomposedEntry { key: 'U', text: "ரு" },
    PrecomposedEntry { key: 'O', text: "டீ" },
    PrecomposedEntry { key: 'S', text: "ளு" },
    PrecomposedEntry { key: 'D', text: "னு" },
    PrecomposedEntry { key: 'F', text: "கு" },
    PrecomposedEntry { key: 'G', text: "ழு" },
    PrecomposedEntry { key: 'J', text: "து" },
    PrecomposedEntry { key: 'K', text: "மு" },
    PrecomposedEntry { key: 'L', text: "டு" },
    PrecomposedEntry { key: 'N', text: "சூ" },
];

const TW_MODIFIERS: &[ModifierEntry] = &[
    ModifierEntry { key: 'i', sign: 'ை', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'b', sign: 'ெ', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'n', sign: 'ே', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'h', sign: 'ா', kind: ModifierKind::Sign },
    ModifierEntry { key: '%', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: '^', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: 'p', sign: 'ி', kind: ModifierKind::Sign },
    ModifierEntry { key: '[', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: ']', sign: 'ை', kind: ModifierKind::Sign },
    ModifierEntry { key: 'P', sign: 'ீ', kind: ModifierKind::Sign },
    ModifierEntry { key: '{', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '}', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: ';', sign: '்', kind: ModifierKind::Sign },
    ModifierEntry { key: ':', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '`', sign: 'ௗ', kind: ModifierKind::AuMark },
];

const TW_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: '_', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
    ClusterEntry { key: '#', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
];

const TW_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: '>', text: "-" },
    LiteralEntry { key: '-', text: "/" },
    LiteralEntry { key: '*', text: "'" },
];

pub static TYPEWRITER: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::TypewriterNew,
    kind: LayoutKind::Wytiwyg,
    consonants: TW_CONSONANTS,
    vowels: TW_VOWELS,
    extensions: &[],
    clusters: TW_CLUSTERS,
    literals: TW_LITERALS,
    precomposed: TW_PRECOMPOSED,
    modifiers: TW_MODIFIERS,
    auto_pulli: &[],
    word_initial: &[],
};

const TNTW_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: '!', base: 'ஸ' },
    ConsonantEntry { key: '$', base: 'ஜ' },
    ConsonantEntry { key: 'Z', base: 'ஷ' },
    ConsonantEntry { key: ']', base: 'ஹ' },
    ConsonantEntry { key: 'w', base: 'ற' },
    ConsonantEntry { key: 'e', base: 'ந' },
    ConsonantEntry { key: 'r', base: 'ச' },
    ConsonantEntry { key: 't', base: 'வ' },
    ConsonantEntry { key: 'y', base: 'ல' },
    ConsonantEntry { key: 'u', base: 'ர' },
    ConsonantEntry { key: 'a', base: 'ய' },
    ConsonantEntry { key: 's', base: 'ள' },
    ConsonantEntry { key: 'd', base: 'ன' },
    ConsonantEntry { key: 'f', base: 'க' },
    ConsonantEntry { key: 'g', base: 'ப' },
    ConsonantEntry { key: 'j', base: 'த' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'l', base: 'ட' },
    ConsonantEntry { key: '\'', base: 'ங' },
    ConsonantEntry { key: 'H', base: 'ழ' },
    ConsonantEntry { key: '"', base: 'ஞ' },
    ConsonantEntry { key: 'z', base: 'ண' },
];

const TNTW_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'm', independent: 'அ', sign: "" },
    VowelEntry { key: 'M', independent: 'ஆ', sign: "" },
    VowelEntry { key: ',', independent: 'இ', sign: "" },
    VowelEntry { key: '<', independent: 'ஈ', sign: "" },
    VowelEntry { key: 'c', independent: 'உ', sign: "" },
    VowelEntry { key: 'C', independent: 'ஊ', sign: "" },
    VowelEntry { key: 'v', independent: 'எ', sign: "" },
    VowelEntry { key: 'V', independent: 'ஏ', sign: "" },
    VowelEntry { key: 'I', independent: 'ஐ', sign: "" },
    VowelEntry { key: 'x', independent: 'ஒ', sign: "" },
    VowelEntry { key: 'X', independent: 'ஓ', sign: "" },
    VowelEntry { key: '`', independent: 'ஃ', sign: "" },
];

const TNTW_MODIFIERS: &[ModifierEntry] = &[
    ModifierEntry { key: 'i', sign: 'ை', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'b', sign: 'ெ', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'n', sign: 'ே', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'h', sign: 'ா', kind: ModifierKind::Sign },
    ModifierEntry { key: '%', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: '^', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: 'p', sign: 'ி', kind: ModifierKind::Sign },
    ModifierEntry { key: '[', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: 'P', sign: 'ீ', kind: ModifierKind::Sign },
    ModifierEntry { key: '{', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '}', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: ';', sign: '்', kind: ModifierKind::Sign },
    ModifierEntry { key: ':', sign: 'ூ', kind: ModifierKind::Sign },
];

const TNTW_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: '_', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
    ClusterEntry { key: 'B', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
];

const TNTW_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: '~', text: "*" },
    LiteralEntry { key: '*', text: "'" },
    LiteralEntry { key: '-', text: "/" },
    LiteralEntry { key: '@', text: "\"" },
    LiteralEntry { key: '#', text: "%" },
    LiteralEntry { key: '>', text: "?" },
    LiteralEntry { key: '.', text: "," },
    LiteralEntry { key: '/', text: "." },
    LiteralEntry { key: '?', text: "-" },
];

pub static TN_TYPEWRITER: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::TnTypewriter,
    kind: LayoutKind::Wytiwyg,
    consonants: TNTW_CONSONANTS,
    vowels: TNTW_VOWELS,
    extensions: &[],
    clusters: TNTW_CLUSTERS,
    literals: TNTW_LITERALS,
    precomposed: TW_PRECOMPOSED,
    modifiers: TNTW_MODIFIERS,
    auto_pulli: &[],
    word_initial: &[],
};

const BAMINI_CONSONANTS: &[ConsonantEntry] = &[
    ConsonantEntry { key: ']', base: 'ஸ' },
    ConsonantEntry { key: '[', base: 'ஜ' },
    ConsonantEntry { key: '\\', base: 'ஷ' },
    ConsonantEntry { key: '`', base: 'ஹ' },
    ConsonantEntry { key: 'w', base: 'ற' },
    ConsonantEntry { key: 'e', base: 'ந' },
    ConsonantEntry { key: 'r', base: 'ச' },
    ConsonantEntry { key: 't', base: 'வ' },
    ConsonantEntry { key: 'y', base: 'ல' },
    ConsonantEntry { key: 'u', base: 'ர' },
    ConsonantEntry { key: 'a', base: 'ய' },
    ConsonantEntry { key: 's', base: 'ள' },
    ConsonantEntry { key: 'd', base: 'ன' },
    ConsonantEntry { key: 'f', base: 'க' },
    ConsonantEntry { key: 'g', base: 'ப' },
    ConsonantEntry { key: 'j', base: 'த' },
    ConsonantEntry { key: 'k', base: 'ம' },
    ConsonantEntry { key: 'l', base: 'ட' },
    ConsonantEntry { key: 'q', base: 'ங' },
    ConsonantEntry { key: 'o', base: 'ழ' },
    ConsonantEntry { key: 'Q', base: 'ஞ' },
    ConsonantEntry { key: 'z', base: 'ண' },
];

const BAMINI_VOWELS: &[VowelEntry] = &[
    VowelEntry { key: 'm', independent: 'அ', sign: "" },
    VowelEntry { key: 'M', independent: 'ஆ', sign: "" },
    VowelEntry { key: ',', independent: 'இ', sign: "" },
    VowelEntry { key: '<', independent: 'ஈ', sign: "" },
    VowelEntry { key: 'c', independent: 'உ', sign: "" },
    VowelEntry { key: 'C', independent: 'ஊ', sign: "" },
    VowelEntry { key: 'v', independent: 'எ', sign: "" },
    VowelEntry { key: 'V', independent: 'ஏ', sign: "" },
    VowelEntry { key: 'I', independent: 'ஐ', sign: "" },
    VowelEntry { key: 'x', independent: 'ஒ', sign: "" },
    VowelEntry { key: 'X', independent: 'ஓ', sign: "" },
    VowelEntry { key: '/', independent: 'ஃ', sign: "" },
];

const BAMINI_PRECOMPOSED: &[PrecomposedEntry] = &[
    PrecomposedEntry { key: 'b', text: "டி" },
    PrecomposedEntry { key: 'B', text: "டீ" },
    PrecomposedEntry { key: '#', text: "சூ" },
    PrecomposedEntry { key: '$', text: "கூ" },
    PrecomposedEntry { key: '%', text: "மூ" },
    PrecomposedEntry { key: '^', text: "டூ" },
    PrecomposedEntry { key: '&', text: "ரூ" },
    PrecomposedEntry { key: 'W', text: "று" },
    PrecomposedEntry { key: 'E', text: "நு" },
    PrecomposedEntry { key: 'R', text: "சு" },
    PrecomposedEntry { key: 'T', text: "வு" },
    PrecomposedEntry { key: 'Y', text: "லு" },
    PrecomposedEntry { key: 'U', text: "ரு" },
    PrecomposedEntry { key: 'O', text: "ழு" },
    PrecomposedEntry { key: 'A', text: "யு" },
    PrecomposedEntry { key: 'S', text: "ளு" },
    PrecomposedEntry { key: 'D', text: "னு" },
    PrecomposedEntry { key: 'F', text: "கு" },
    PrecomposedEntry { key: 'G', text: "பு" },
    PrecomposedEntry { key: 'J', text: "து" },
    PrecomposedEntry { key: 'K', text: "மு" },
    PrecomposedEntry { key: 'L', text: "டு" },
    PrecomposedEntry { key: 'Z', text: "ணு" },
];

const BAMINI_MODIFIERS: &[ModifierEntry] = &[
    ModifierEntry { key: 'i', sign: 'ை', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'n', sign: 'ெ', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'N', sign: 'ே', kind: ModifierKind::LeftHalf },
    ModifierEntry { key: 'h', sign: 'ா', kind: ModifierKind::Sign },
    ModifierEntry { key: 'p', sign: 'ி', kind: ModifierKind::Sign },
    ModifierEntry { key: 'P', sign: 'ீ', kind: ModifierKind::Sign },
    ModifierEntry { key: ';', sign: '்', kind: ModifierKind::Sign },
    ModifierEntry { key: '_', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '+', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '{', sign: 'ு', kind: ModifierKind::Sign },
    ModifierEntry { key: '}', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: ':', sign: 'ூ', kind: ModifierKind::Sign },
    ModifierEntry { key: '|', sign: 'ௗ', kind: ModifierKind::AuMark },
];

const BAMINI_CLUSTERS: &[ClusterEntry] = &[
    ClusterEntry { key: '=', prev_key: None, prior: None, text: "ஸ்ரீ", delete: 0 },
    ClusterEntry { key: '~', prev_key: None, prior: None, text: "க்ஷ", delete: 0 },
];

const BAMINI_LITERALS: &[LiteralEntry] = &[
    LiteralEntry { key: '>', text: "," },
    LiteralEntry { key: '@', text: ";" },
    LiteralEntry { key: 'H', text: "ர்" },
];

pub static BAMINI: LayoutTable = LayoutTable {
    language: Language::Tamil,
    layout: Layout::Bamini,
    kind: LayoutKind::Wytiwyg,
    consonants: BAMINI_CONSONANTS,
    vowels: BAMINI_VOWELS,
    extensions: &[],
    clusters: BAMINI_CLUSTERS,
    literals: BAMINI_LITERALS,
    precomposed: BAMINI_PRECOMPOSED,
    modifiers: BAMINI_MODIFIERS,
    auto_pulli: &[],
    word_initial: &[],
};
