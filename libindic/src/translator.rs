//! Key translator facade.
//!
//! Owns a `CompositionEngine` plus the language/layout selection logic:
//! which layouts each language supports and switching between them at
//! runtime. A switch to a pair that does not exist is rejected with the
//! previous selection left in place.

use ahash::AHashMap;
use libindic_core::{
    CompositionEngine, CompositionState, Language, Layout, LayoutTable, TranslationResult,
    TranslatorConfig,
};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::{devanagari, gurmukhi, kannada, malayalam, tamil, telugu};

const TAMIL_LAYOUTS: &[Layout] = &[
    Layout::Anjal,
    Layout::Tamil99,
    Layout::Tamil97,
    Layout::Mylai,
    Layout::TypewriterNew,
    Layout::TypewriterOld,
    Layout::AnjalIndic,
    Layout::Murasu6,
    Layout::Bamini,
    Layout::TnTypewriter,
];

const PHONETIC_ONLY: &[Layout] = &[Layout::Anjal];

static TABLES: Lazy<AHashMap<(Language, Layout), &'static LayoutTable>> = Lazy::new(|| {
    let mut m = AHashMap::new();
    for &layout in TAMIL_LAYOUTS {
        m.insert((Language::Tamil, layout), tamil::table(layout));
    }
    m.insert((Language::Devanagari, Layout::Anjal), &devanagari::TABLE);
    m.insert((Language::Malayalam, Layout::Anjal), &malayalam::TABLE);
    m.insert((Language::Kannada, Layout::Anjal), &kannada::TABLE);
    m.insert((Language::Telugu, Layout::Anjal), &telugu::TABLE);
    m.insert((Language::Gurmukhi, Layout::Anjal), &gurmukhi::TABLE);
    m
});

/// Layouts available for a language.
pub fn supported_layouts(language: Language) -> &'static [Layout] {
    match language {
        Language::Tamil => TAMIL_LAYOUTS,
        _ => PHONETIC_ONLY,
    }
}

/// Whether `layout` exists for `language`.
pub fn is_layout_supported(language: Language, layout: Layout) -> bool {
    supported_layouts(language).contains(&layout)
}

fn table_for(language: Language, layout: Layout) -> Option<&'static LayoutTable> {
    TABLES.get(&(language, layout)).copied()
}

/// Stateful keystroke translator for one language/layout pair.
pub struct KeyTranslator {
    engine: CompositionEngine,
}

impl KeyTranslator {
    /// Create a translator from a configuration. Fails when the
    /// configured layout does not exist for the configured language.
    pub fn new(config: TranslatorConfig) -> Result<Self, String> {
        let table = table_for(config.language, config.layout).ok_or_else(|| {
            warn!(language = ?config.language, layout = ?config.layout, "unsupported pair");
            format!(
                "layout {:?} is not available for {:?}",
                config.layout, config.language
            )
        })?;
        debug!(language = ?config.language, layout = ?config.layout, "translator ready");
        Ok(Self { engine: CompositionEngine::new(table, config) })
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.engine.table().language
    }

    /// Active layout.
    pub fn layout(&self) -> Layout {
        self.engine.table().layout
    }

    /// Composition state, for diagnostics.
    pub fn state(&self) -> &CompositionState {
        self.engine.state()
    }

    /// Switch the active language, keeping the current layout. Returns
    /// false and leaves everything untouched when the new language does
    /// not support that layout. On success any composition in progress
    /// is discarded.
    pub fn set_language(&mut self, language: Language) -> bool {
        let layout = self.layout();
        if !is_layout_supported(language, layout) {
            warn!(?language, ?layout, "unsupported pair");
            return false;
        }
        self.rebuild(language, layout);
        true
    }

    /// Switch the active layout within the current language.
    pub fn set_layout(&mut self, layout: Layout) -> Result<(), String> {
        let language = self.language();
        if !is_layout_supported(language, layout) {
            warn!(?language, ?layout, "unsupported pair");
            return Err(format!(
                "layout {:?} is not available for {:?}",
                layout, language
            ));
        }
        self.rebuild(language, layout);
        Ok(())
    }

    fn rebuild(&mut self, language: Language, layout: Layout) {
        let mut config = self.engine.config().clone();
        config.language = language;
        config.layout = layout;
        // Lookup cannot fail: the pair was just validated.
        let table = table_for(language, layout).unwrap_or_else(|| tamil::table(Layout::Anjal));
        self.engine = CompositionEngine::new(table, config);
    }

    /// Change the backspace policy at runtime. Takes effect on the next
    /// `delete_last_char`; the composition in progress is kept.
    pub fn set_reverse_delete_order(&mut self, enabled: bool) {
        self.engine.set_reverse_delete_order(enabled);
    }

    /// Translate one keystroke into an edit operation.
    pub fn translate_key(&mut self, key: char) -> TranslationResult {
        self.engine.translate_key(key)
    }

    /// Handle a backspace inside a composition. `composing_text` is the
    /// host's current buffer; the engine re-anchors on it when its own
    /// context no longer matches.
    pub fn delete_last_char(&mut self, composing_text: &str) -> TranslationResult {
        self.engine.delete_last_char(composing_text)
    }

    /// Remove a parked left vowel sign that never got its consonant.
    pub fn cleanup_stray_vowel_sign(&mut self, composing_text: &str) -> TranslationResult {
        self.engine.cleanup_stray_vowel_sign(composing_text)
    }

    /// Forget all composition context (caret moved, focus changed).
    pub fn terminate_composition(&mut self) {
        self.engine.terminate_composition()
    }

    /// Substitution for a key the layout does not map, if any (native
    /// digits in the non-Tamil scripts, classified against the host's
    /// composing text).
    pub fn unmapped_char(&self, key: char, composing_text: &str) -> Option<String> {
        self.engine.unmapped_char(key, composing_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tamil_supports_ten_layouts() {
        assert_eq!(supported_layouts(Language::Tamil).len(), 10);
        assert!(is_layout_supported(Language::Tamil, Layout::Bamini));
        assert!(!is_layout_supported(Language::Kannada, Layout::Bamini));
    }

    #[test]
    fn rejects_unsupported_pair() {
        let cfg = TranslatorConfig {
            language: Language::Telugu,
            layout: Layout::Tamil99,
            ..Default::default()
        };
        assert!(KeyTranslator::new(cfg).is_err());
    }

    #[test]
    fn language_switch_requires_supported_layout() {
        let cfg = TranslatorConfig { layout: Layout::Tamil99, ..Default::default() };
        let mut tr = KeyTranslator::new(cfg).expect("tamil99");
        let r = tr.translate_key('h');
        assert_eq!(r.inserted_text, "க");

        assert!(!tr.set_language(Language::Devanagari));
        assert_eq!(tr.language(), Language::Tamil);
        assert_eq!(tr.layout(), Layout::Tamil99);
        // the composition in progress survived the rejected switch
        let r = tr.translate_key('q');
        assert_eq!(r.inserted_text, "ா");

        tr.set_layout(Layout::Anjal).expect("anjal");
        assert!(tr.set_language(Language::Devanagari));
        assert_eq!(tr.language(), Language::Devanagari);
        assert_eq!(tr.layout(), Layout::Anjal);
    }

    #[test]
    fn language_switch_discards_composition() {
        let mut tr = KeyTranslator::new(TranslatorConfig::default()).expect("anjal");
        let r = tr.translate_key('k');
        assert_eq!(r.inserted_text, "க்");
        assert!(tr.set_language(Language::Malayalam));
        let r = tr.translate_key('a');
        assert_eq!(r.delete_count, 0);
        assert_eq!(r.inserted_text, "അ");
    }
}
