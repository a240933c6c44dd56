//! libindic-core
//!
//! Script rules, keyboard layout model and the per-keystroke composition
//! engine shared by language-specific crates (libindic).
//!
//! The crate is a pure state machine: a host feeds key characters in and
//! applies the returned edit operations (delete N scalars, insert text) to
//! its own text buffer. No OS integration, no rendering.
//!
//! Public API:
//! - `Language` / `Layout` - supported scripts and keyboard layouts
//! - `ScriptRules` - per-script character classes and composition rules
//! - `LayoutTable` - static key mapping data for one layout
//! - `CompositionEngine` - the per-keystroke state machine
//! - `TranslationResult` - one edit operation (delete count + inserted text)
//! - `TranslatorConfig` - configuration with TOML round-trip
//! - `detect_language` - Unicode-block language detection

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};

pub mod script;
pub use script::ScriptRules;

pub mod layout;
pub use layout::{
    ClusterEntry, ConsonantEntry, LayoutKind, LayoutTable, LiteralEntry, ModifierEntry,
    ModifierKind, PrecomposedEntry, VowelEntry, VowelExtension,
};

pub mod engine;
pub use engine::{CompositionEngine, CompositionState, TranslationResult};

pub mod detect;
pub use detect::detect_language;

/// Zero-width space, used as a visible-order placeholder while a left
/// vowel sign waits for its consonant.
pub const ZWSP: char = '\u{200B}';

/// Zero-width non-joiner, emitted to block unwanted ligatures.
pub const ZWNJ: char = '\u{200C}';

/// Scripts the engine can compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tamil,
    Devanagari,
    Malayalam,
    Kannada,
    Telugu,
    Gurmukhi,
}

impl Language {
    /// Start of this script's Unicode block.
    pub fn block_start(self) -> u32 {
        match self {
            Language::Tamil => 0x0B80,
            Language::Devanagari => 0x0900,
            Language::Malayalam => 0x0D00,
            Language::Kannada => 0x0C80,
            Language::Telugu => 0x0C00,
            Language::Gurmukhi => 0x0A00,
        }
    }

    /// Inclusive end of this script's Unicode block.
    pub fn block_end(self) -> u32 {
        self.block_start() + 0x7F
    }

    /// Whether `ch` belongs to this script's Unicode block.
    pub fn contains(self, ch: char) -> bool {
        let cp = ch as u32;
        cp >= self.block_start() && cp <= self.block_end()
    }
}

/// Keyboard layouts. Only Tamil supports all of them; the other
/// languages use the phonetic Anjal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Anjal,
    Tamil99,
    Tamil97,
    Mylai,
    TypewriterNew,
    TypewriterOld,
    AnjalIndic,
    Murasu6,
    Bamini,
    TnTypewriter,
}

/// Engine configuration.
///
/// Language-agnostic knobs live here; layout data itself is static and
/// never configured.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslatorConfig {
    /// Active script.
    pub language: Language,

    /// Active keyboard layout.
    pub layout: Layout,

    /// Delete composed characters in the reverse of typing order
    /// (a two-part vowel loses its right half first).
    pub reverse_delete_order: bool,

    /// Tamil99 automatic virama between consonants that form a valid
    /// cluster.
    pub auto_pulli: bool,

    /// Emit ZWNJ before ligature-blocking consonants.
    pub emit_zwnj_guard: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            language: Language::Tamil,
            layout: Layout::Anjal,
            reverse_delete_order: false,
            auto_pulli: true,
            emit_zwnj_guard: true,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let mut cfg = TranslatorConfig::default();
        cfg.language = Language::Malayalam;
        cfg.reverse_delete_order = true;
        let s = cfg.to_toml_string().expect("serialize");
        let back = TranslatorConfig::from_toml_str(&s).expect("parse");
        assert_eq!(back.language, Language::Malayalam);
        assert_eq!(back.layout, Layout::Anjal);
        assert!(back.reverse_delete_order);
    }

    #[test]
    fn block_membership() {
        assert!(Language::Tamil.contains('க'));
        assert!(!Language::Tamil.contains('क'));
        assert!(Language::Devanagari.contains('क'));
        assert!(Language::Gurmukhi.contains('ਕ'));
    }
}
