//! Keyboard layout model.
//!
//! A `LayoutTable` is pure static data: typed entry slices describing what
//! each key produces and which key sequences compose. The engine consults
//! the table; the table never computes anything beyond a linear lookup.
//!
//! Context-keyed entries (clusters, vowel extensions) always win over
//! context-free ones, matching the way the physical layouts are defined:
//! the most specific sequence a user could be in the middle of is the one
//! that applies.

use crate::{Language, Layout};

/// How a layout maps keys to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Keys spell sounds; a consonant key emits consonant + virama and
    /// later vowel keys respell the syllable (Anjal family).
    Phonetic,
    /// One key, one character; vowel keys emit signs after a consonant
    /// (Tamil99, Tamil97).
    Direct,
    /// Visual typing order: left vowel signs are typed before their
    /// consonant (typewriter layouts, Mylai, Bamini).
    Wytiwyg,
}

/// A consonant key.
#[derive(Debug, Clone, Copy)]
pub struct ConsonantEntry {
    pub key: char,
    pub base: char,
}

/// A vowel key with its independent and dependent forms.
///
/// `sign` is empty for the inherent vowel (Anjal `a`), which strips the
/// virama and attaches nothing.
#[derive(Debug, Clone, Copy)]
pub struct VowelEntry {
    pub key: char,
    pub independent: char,
    pub sign: &'static str,
}

/// A vowel key that extends the previous vowel key into a longer vowel
/// (`a`+`a` = ஆ, `a`+`i` = ஐ, `u`+`u` = ஊ).
///
/// `from_independent` / `from_sign` are the scalars the first key left
/// behind; the extension applies only when the composed text still ends
/// with one of them (or with a bare consonant when the first key carried
/// the inherent vowel, i.e. `from_sign` is `None`). Several entries may
/// share a `(key, prev_key)` pair to chain longer sequences.
#[derive(Debug, Clone, Copy)]
pub struct VowelExtension {
    pub key: char,
    pub prev_key: char,
    pub from_independent: Option<char>,
    pub from_sign: Option<char>,
    pub independent: char,
    pub sign: char,
}

/// A contextual consonant cluster or sequence rewrite.
///
/// Matches when `key` follows `prev_key` and, if `prior` is set, the
/// composed text ends with `prior`. `delete` scalars are removed and
/// `text` inserted.
#[derive(Debug, Clone, Copy)]
pub struct ClusterEntry {
    pub key: char,
    pub prev_key: Option<char>,
    pub prior: Option<&'static str>,
    pub text: &'static str,
    pub delete: usize,
}

/// A key that always inserts fixed text (aytham, rupee sign, danda).
#[derive(Debug, Clone, Copy)]
pub struct LiteralEntry {
    pub key: char,
    pub text: &'static str,
}

/// A single key producing a precomposed consonant + vowel glyph
/// (typewriter ukara keys).
#[derive(Debug, Clone, Copy)]
pub struct PrecomposedEntry {
    pub key: char,
    pub text: &'static str,
}

/// What a modifier key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    /// Left vowel sign typed before its consonant; parks behind a ZWSP
    /// placeholder until the consonant arrives.
    LeftHalf,
    /// Plain dependent sign (or virama) appended after a consonant.
    Sign,
    /// Resets vowel context without output; doubled it emits `sign`.
    Respell,
    /// Emits nothing and keys the next stroke (typewriter dead keys).
    Dead,
    /// Length mark that composes with a preceding sign or vowel.
    AuMark,
}

/// A modifier key.
#[derive(Debug, Clone, Copy)]
pub struct ModifierEntry {
    pub key: char,
    pub sign: char,
    pub kind: ModifierKind,
}

/// Static key mapping data for one keyboard layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTable {
    pub language: Language,
    pub layout: Layout,
    pub kind: LayoutKind,
    pub consonants: &'static [ConsonantEntry],
    pub vowels: &'static [VowelEntry],
    pub extensions: &'static [VowelExtension],
    pub clusters: &'static [ClusterEntry],
    pub literals: &'static [LiteralEntry],
    pub precomposed: &'static [PrecomposedEntry],
    pub modifiers: &'static [ModifierEntry],
    /// Consonant key pairs that take an automatic virama between them.
    pub auto_pulli: &'static [(char, char)],
    /// Key to text overrides that apply only with no composed context.
    pub word_initial: &'static [(char, &'static str)],
}

impl LayoutTable {
    pub fn consonant(&self, key: char) -> Option<&ConsonantEntry> {
        self.consonants.iter().find(|e| e.key == key)
    }

    pub fn vowel(&self, key: char) -> Option<&VowelEntry> {
        self.vowels.iter().find(|e| e.key == key)
    }

    pub fn extensions_for(
        &self,
        key: char,
        prev_key: char,
    ) -> impl Iterator<Item = &VowelExtension> {
        self.extensions
            .iter()
            .filter(move |e| e.key == key && e.prev_key == prev_key)
    }

    /// Most specific cluster for `key` in the given context. Entries with
    /// a `prior` guard are tried before entries without one.
    pub fn cluster(
        &self,
        key: char,
        prev_key: Option<char>,
        composed: &str,
    ) -> Option<&ClusterEntry> {
        let matches = |e: &&ClusterEntry| {
            e.key == key
                && (e.prev_key.is_none() || e.prev_key == prev_key)
                && e.prior.map_or(true, |p| composed.ends_with(p))
        };
        self.clusters
            .iter()
            .filter(matches)
            .max_by_key(|e| (e.prior.map_or(0, |p| p.len()), e.prev_key.is_some()))
    }

    pub fn literal(&self, key: char) -> Option<&LiteralEntry> {
        self.literals.iter().find(|e| e.key == key)
    }

    pub fn precomposed_key(&self, key: char) -> Option<&PrecomposedEntry> {
        self.precomposed.iter().find(|e| e.key == key)
    }

    pub fn modifier(&self, key: char) -> Option<&ModifierEntry> {
        self.modifiers.iter().find(|e| e.key == key)
    }

    /// Key doubling counts as a cluster pair only on layouts that define
    /// auto-pulli pairs at all.
    pub fn is_auto_pulli_pair(&self, prev_key: char, key: char) -> bool {
        !self.auto_pulli.is_empty()
            && (prev_key == key || self.auto_pulli.contains(&(prev_key, key)))
    }

    pub fn word_initial(&self, key: char) -> Option<&'static str> {
        self.word_initial
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, t)| t)
    }

    /// Whether any entry kind maps this key.
    pub fn maps_key(&self, key: char) -> bool {
        self.consonant(key).is_some()
            || self.vowel(key).is_some()
            || self.literal(key).is_some()
            || self.precomposed_key(key).is_some()
            || self.modifier(key).is_some()
            || self.clusters.iter().any(|e| e.key == key)
            || self.extensions.iter().any(|e| e.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CONSOS: &[ConsonantEntry] = &[
        ConsonantEntry { key: 'k', base: 'க' },
        ConsonantEntry { key: 'p', base: 'ப' },
    ];
    static VOWELS: &[VowelEntry] = &[
        VowelEntry { key: 'a', independent: 'அ', sign: "" },
        VowelEntry { key: 'i', independent: 'இ', sign: "ி" },
    ];
    static EXTS: &[VowelExtension] = &[VowelExtension {
        key: 'a',
        prev_key: 'a',
        from_independent: Some('அ'),
        from_sign: None,
        independent: 'ஆ',
        sign: 'ா',
    }];
    static CLUSTERS: &[ClusterEntry] = &[
        ClusterEntry { key: 'r', prev_key: Some('t'), prior: None, text: "ற்ற்", delete: 2 },
        ClusterEntry {
            key: 'r',
            prev_key: Some('d'),
            prior: Some("ண்ட்"),
            text: "ன்ற்",
            delete: 4,
        },
    ];

    fn table() -> LayoutTable {
        LayoutTable {
            language: Language::Tamil,
            layout: Layout::Anjal,
            kind: LayoutKind::Phonetic,
            consonants: CONSOS,
            vowels: VOWELS,
            extensions: EXTS,
            clusters: CLUSTERS,
            literals: &[],
            precomposed: &[],
            modifiers: &[],
            auto_pulli: &[],
            word_initial: &[],
        }
    }

    #[test]
    fn lookup_priority() {
        let t = table();
        assert_eq!(t.consonant('k').unwrap().base, 'க');
        assert!(t.consonant('z').is_none());
        assert_eq!(t.extensions_for('a', 'a').count(), 1);
        assert_eq!(t.extensions_for('a', 'i').count(), 0);
        // prior-guarded cluster wins over the unguarded one
        let c = t.cluster('r', Some('d'), "மண்ட்").unwrap();
        assert_eq!(c.text, "ன்ற்");
        let c = t.cluster('r', Some('t'), "பத்").unwrap();
        assert_eq!(c.text, "ற்ற்");
        assert!(t.cluster('r', Some('k'), "க்").is_none());
    }

    #[test]
    fn maps_key_covers_all_entry_kinds() {
        let t = table();
        assert!(t.maps_key('k'));
        assert!(t.maps_key('a'));
        assert!(t.maps_key('r'));
        assert!(!t.maps_key('!'));
    }
}
