//! Per-script character classes and composition rules.
//!
//! A `ScriptRules` value is a static description of one Brahmic script:
//! which code points are consonants, independent vowels or dependent
//! vowel signs, which signs render to the left of their consonant, how
//! two-part vowels compose, and which consonants need a ZWNJ guard to
//! keep them from ligating with a preceding dead consonant.
//!
//! The engine never hardcodes a code point; every classification goes
//! through the active script's rules.

use crate::Language;

/// Static composition rules for one script.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRules {
    pub language: Language,

    /// The vowel-killer mark (pulli / halant).
    pub virama: char,

    /// Inclusive consonant code point ranges.
    pub consonant_ranges: &'static [(char, char)],

    /// Inclusive independent vowel ranges.
    pub vowel_ranges: &'static [(char, char)],

    /// Inclusive dependent vowel sign ranges (virama excluded).
    pub sign_ranges: &'static [(char, char)],

    /// Signs that render to the left of their consonant.
    pub left_signs: &'static [char],

    /// Two-part sign composition: (left half, right part, composed).
    pub two_part_signs: &'static [(char, char, char)],

    /// Independent vowel + length mark composition: (base, mark, composed).
    pub vowel_compose: &'static [(char, char, char)],

    /// (preceding consonant, following consonant) pairs whose ligature
    /// must be blocked with ZWNJ.
    pub zwnj_pairs: &'static [(char, char)],

    /// Native digits 0..=9, empty when the script data carries none.
    pub digits: &'static [char],

    /// Whether ASCII digit keys are substituted with the native digits.
    /// Tamil keeps ASCII digits for the host.
    pub substitute_digits: bool,
}

impl ScriptRules {
    /// Rules for `language`.
    pub fn for_language(language: Language) -> &'static ScriptRules {
        match language {
            Language::Tamil => &TAMIL,
            Language::Devanagari => &DEVANAGARI,
            Language::Malayalam => &MALAYALAM,
            Language::Kannada => &KANNADA,
            Language::Telugu => &TELUGU,
            Language::Gurmukhi => &GURMUKHI,
        }
    }

    pub fn is_consonant(&self, ch: char) -> bool {
        in_ranges(self.consonant_ranges, ch)
    }

    pub fn is_independent_vowel(&self, ch: char) -> bool {
        in_ranges(self.vowel_ranges, ch)
    }

    pub fn is_vowel_sign(&self, ch: char) -> bool {
        in_ranges(self.sign_ranges, ch)
    }

    pub fn is_left_sign(&self, ch: char) -> bool {
        self.left_signs.contains(&ch)
    }

    /// Compose a left half with a right part (kaal or au length mark).
    pub fn compose_sign(&self, left: char, right: char) -> Option<char> {
        self.two_part_signs
            .iter()
            .find(|&&(l, r, _)| l == left && r == right)
            .map(|&(_, _, c)| c)
    }

    /// Compose an independent vowel with a length mark.
    pub fn compose_vowel(&self, base: char, mark: char) -> Option<char> {
        self.vowel_compose
            .iter()
            .find(|&&(b, m, _)| b == base && m == mark)
            .map(|&(_, _, c)| c)
    }

    /// The left half a composed two-part sign decomposes to, if any.
    pub fn left_half_of(&self, sign: char) -> Option<char> {
        self.two_part_signs
            .iter()
            .find(|&&(_, _, c)| c == sign)
            .map(|&(l, _, _)| l)
    }

    /// Whether `follower` after `prior`+virama needs a ZWNJ guard.
    pub fn needs_zwnj(&self, prior: char, follower: char) -> bool {
        self.zwnj_pairs.contains(&(prior, follower))
    }

    /// Last Unicode scalar of `text`, if non-empty.
    pub fn last_scalar(text: &str) -> Option<char> {
        text.chars().next_back()
    }

    /// Whether `text` ends with a dead consonant (consonant + virama).
    pub fn ends_with_dead_consonant(&self, text: &str) -> bool {
        let mut it = text.chars().rev();
        match (it.next(), it.next()) {
            (Some(v), Some(c)) => v == self.virama && self.is_consonant(c),
            _ => false,
        }
    }
}

fn in_ranges(ranges: &[(char, char)], ch: char) -> bool {
    ranges.iter().any(|&(lo, hi)| ch >= lo && ch <= hi)
}

static TAMIL: ScriptRules = ScriptRules {
    language: Language::Tamil,
    virama: '\u{0BCD}',
    consonant_ranges: &[('\u{0B95}', '\u{0BB9}')],
    // Aytham (U+0B83) composes like a vowel for state purposes.
    vowel_ranges: &[('\u{0B83}', '\u{0B94}')],
    sign_ranges: &[('\u{0BBE}', '\u{0BCC}'), ('\u{0BD7}', '\u{0BD7}')],
    left_signs: &['\u{0BC6}', '\u{0BC7}', '\u{0BC8}'],
    two_part_signs: &[
        ('\u{0BC6}', '\u{0BBE}', '\u{0BCA}'), // ெ + ா = ொ
        ('\u{0BC7}', '\u{0BBE}', '\u{0BCB}'), // ே + ா = ோ
        ('\u{0BC6}', '\u{0BD7}', '\u{0BCC}'), // ெ + ௗ = ௌ
    ],
    vowel_compose: &[('\u{0B92}', '\u{0BD7}', '\u{0B94}')], // ஒ + ௗ = ஔ
    zwnj_pairs: &[('\u{0B95}', '\u{0BB7}')], // க்ஷ ligature guard
    digits: &['௦', '௧', '௨', '௩', '௪', '௫', '௬', '௭', '௮', '௯'],
    substitute_digits: false,
};

static DEVANAGARI: ScriptRules = ScriptRules {
    language: Language::Devanagari,
    virama: '\u{094D}',
    consonant_ranges: &[('\u{0915}', '\u{0939}'), ('\u{0958}', '\u{095F}')],
    vowel_ranges: &[('\u{0904}', '\u{0914}'), ('\u{0960}', '\u{0961}')],
    sign_ranges: &[('\u{093E}', '\u{094C}'), ('\u{0962}', '\u{0963}')],
    left_signs: &['\u{093F}'],
    two_part_signs: &[],
    vowel_compose: &[],
    zwnj_pairs: &[],
    digits: &['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'],
    substitute_digits: true,
};

static MALAYALAM: ScriptRules = ScriptRules {
    language: Language::Malayalam,
    virama: '\u{0D4D}',
    consonant_ranges: &[('\u{0D15}', '\u{0D39}'), ('\u{0D7A}', '\u{0D7F}')],
    vowel_ranges: &[('\u{0D05}', '\u{0D14}'), ('\u{0D60}', '\u{0D61}')],
    sign_ranges: &[
        ('\u{0D3E}', '\u{0D4C}'),
        ('\u{0D57}', '\u{0D57}'),
        ('\u{0D62}', '\u{0D63}'),
    ],
    left_signs: &['\u{0D46}', '\u{0D47}', '\u{0D48}'],
    two_part_signs: &[
        ('\u{0D46}', '\u{0D3E}', '\u{0D4A}'),
        ('\u{0D47}', '\u{0D3E}', '\u{0D4B}'),
        ('\u{0D46}', '\u{0D57}', '\u{0D4C}'),
    ],
    vowel_compose: &[('\u{0D12}', '\u{0D57}', '\u{0D14}')],
    zwnj_pairs: &[],
    digits: &['൦', '൧', '൨', '൩', '൪', '൫', '൬', '൭', '൮', '൯'],
    substitute_digits: true,
};

static KANNADA: ScriptRules = ScriptRules {
    language: Language::Kannada,
    virama: '\u{0CCD}',
    consonant_ranges: &[('\u{0C95}', '\u{0CB9}')],
    vowel_ranges: &[('\u{0C85}', '\u{0C94}'), ('\u{0CE0}', '\u{0CE1}')],
    sign_ranges: &[
        ('\u{0CBE}', '\u{0CCC}'),
        ('\u{0CD5}', '\u{0CD6}'),
        ('\u{0CE2}', '\u{0CE3}'),
    ],
    left_signs: &[],
    two_part_signs: &[
        ('\u{0CC6}', '\u{0CD5}', '\u{0CC7}'),
        ('\u{0CC6}', '\u{0CC2}', '\u{0CCA}'),
        ('\u{0CCA}', '\u{0CD5}', '\u{0CCB}'),
        ('\u{0CC6}', '\u{0CD6}', '\u{0CC8}'),
    ],
    vowel_compose: &[],
    zwnj_pairs: &[],
    digits: &['೦', '೧', '೨', '೩', '೪', '೫', '೬', '೭', '೮', '೯'],
    substitute_digits: true,
};

static TELUGU: ScriptRules = ScriptRules {
    language: Language::Telugu,
    virama: '\u{0C4D}',
    consonant_ranges: &[('\u{0C15}', '\u{0C39}')],
    vowel_ranges: &[('\u{0C05}', '\u{0C14}'), ('\u{0C60}', '\u{0C61}')],
    sign_ranges: &[
        ('\u{0C3E}', '\u{0C4C}'),
        ('\u{0C55}', '\u{0C56}'),
        ('\u{0C62}', '\u{0C63}'),
    ],
    left_signs: &[],
    two_part_signs: &[
        ('\u{0C46}', '\u{0C56}', '\u{0C48}'),
    ],
    vowel_compose: &[],
    zwnj_pairs: &[],
    digits: &['౦', '౧', '౨', '౩', '౪', '౫', '౬', '౭', '౮', '౯'],
    substitute_digits: true,
};

static GURMUKHI: ScriptRules = ScriptRules {
    language: Language::Gurmukhi,
    virama: '\u{0A4D}',
    consonant_ranges: &[('\u{0A15}', '\u{0A39}'), ('\u{0A59}', '\u{0A5E}')],
    vowel_ranges: &[('\u{0A05}', '\u{0A14}'), ('\u{0A72}', '\u{0A74}')],
    sign_ranges: &[('\u{0A3E}', '\u{0A4C}')],
    left_signs: &['\u{0A3F}'],
    two_part_signs: &[],
    vowel_compose: &[],
    zwnj_pairs: &[],
    digits: &['੦', '੧', '੨', '੩', '੪', '੫', '੬', '੭', '੮', '੯'],
    substitute_digits: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tamil_classification() {
        let r = ScriptRules::for_language(Language::Tamil);
        assert!(r.is_consonant('க'));
        assert!(r.is_consonant('ஹ'));
        assert!(!r.is_consonant('அ'));
        assert!(r.is_independent_vowel('ஔ'));
        assert!(r.is_vowel_sign('ா'));
        assert!(r.is_vowel_sign('ௗ'));
        assert!(!r.is_vowel_sign(r.virama));
        assert!(r.is_left_sign('ெ'));
        assert!(!r.is_left_sign('ா'));
    }

    #[test]
    fn tamil_two_part_composition() {
        let r = ScriptRules::for_language(Language::Tamil);
        assert_eq!(r.compose_sign('ெ', 'ா'), Some('ொ'));
        assert_eq!(r.compose_sign('ே', 'ா'), Some('ோ'));
        assert_eq!(r.compose_sign('ெ', 'ௗ'), Some('ௌ'));
        assert_eq!(r.compose_sign('ை', 'ா'), None);
        assert_eq!(r.compose_vowel('ஒ', 'ௗ'), Some('ஔ'));
        assert_eq!(r.left_half_of('ொ'), Some('ெ'));
        assert_eq!(r.left_half_of('ோ'), Some('ே'));
        assert_eq!(r.left_half_of('ா'), None);
    }

    #[test]
    fn dead_consonant_detection() {
        let r = ScriptRules::for_language(Language::Tamil);
        assert!(r.ends_with_dead_consonant("க்"));
        assert!(r.ends_with_dead_consonant("தமிழ்"));
        assert!(!r.ends_with_dead_consonant("க"));
        assert!(!r.ends_with_dead_consonant(""));
        assert!(r.needs_zwnj('க', 'ஷ'));
        assert!(!r.needs_zwnj('த', 'ஷ'));
    }

    #[test]
    fn only_tamil_keeps_ascii_digits() {
        assert!(!ScriptRules::for_language(Language::Tamil).substitute_digits);
        for lang in [
            Language::Devanagari,
            Language::Malayalam,
            Language::Kannada,
            Language::Telugu,
            Language::Gurmukhi,
        ] {
            let r = ScriptRules::for_language(lang);
            assert!(r.substitute_digits, "{lang:?}");
            assert_eq!(r.digits.len(), 10, "{lang:?}");
        }
    }

    #[test]
    fn two_part_tables_agree_with_nfc() {
        use unicode_normalization::UnicodeNormalization;
        for lang in [
            Language::Tamil,
            Language::Malayalam,
            Language::Kannada,
            Language::Telugu,
        ] {
            let r = ScriptRules::for_language(lang);
            for &(left, mark, composed) in r.two_part_signs {
                let nfc: String = format!("{left}{mark}").nfc().collect();
                assert_eq!(nfc, composed.to_string(), "{lang:?} {left} + {mark}");
            }
        }
    }

    #[test]
    fn malayalam_two_part_composition() {
        let r = ScriptRules::for_language(Language::Malayalam);
        assert_eq!(r.compose_sign('\u{0D46}', '\u{0D3E}'), Some('\u{0D4A}'));
        assert_eq!(r.left_half_of('\u{0D4C}'), Some('\u{0D46}'));
        assert!(r.is_consonant('\u{0D7A}'), "chillu counts as a consonant");
    }
}
