//! Per-keystroke composition engine.
//!
//! The engine owns no text. It tracks a small window of what it last
//! emitted and, for every key, answers with one edit operation: delete N
//! scalars from the end of the host buffer, then insert this text. The
//! host applies the edit; the engine updates its window to match.
//!
//! Classification is derived from the emitted text itself (does the
//! context end in a dead consonant, a sign, a placeholder?) rather than
//! from a remembered key category, so the engine stays consistent even
//! when the host mutates text around it and composition is re-entered.

use crate::layout::{LayoutKind, LayoutTable, ModifierKind, VowelEntry};
use crate::script::ScriptRules;
use crate::{TranslatorConfig, ZWNJ, ZWSP};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalars of composed context the engine keeps. Every composition rule
/// looks at most four scalars back.
const MAX_CONTEXT_SCALARS: usize = 10;

/// One edit operation for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Scalars to delete from the end of the host buffer before inserting.
    pub delete_count: usize,
    /// Text to insert after deleting.
    pub inserted_text: String,
    /// False when the key is not part of the layout and the host should
    /// process it itself. An unhandled result never edits.
    pub handled: bool,
}

impl TranslationResult {
    fn edit(delete_count: usize, inserted_text: String) -> Self {
        Self { delete_count, inserted_text, handled: true }
    }

    fn unhandled() -> Self {
        Self { delete_count: 0, inserted_text: String::new(), handled: false }
    }
}

/// Mutable composition context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompositionState {
    /// Previous key, for sequence rules keyed on keystrokes.
    pub previous_key: Option<char>,
    /// Sliding window over the last scalars the engine emitted. ZWNJ
    /// guards are emitted to the host but never recorded here.
    pub previous_output: String,
    /// Left vowel sign typed ahead of its consonant, parked behind a
    /// ZWSP placeholder in the host buffer.
    pub pending_left_sign: Option<char>,
    /// Set by a vowel-killer key; blocks respelling on the next vowel.
    vowel_barrier: bool,
    /// Scalars emitted since the last ZWNJ guard. The guard lives in the
    /// host buffer but not in the window, so host-side deletes that
    /// reach it must go one scalar further.
    guard_offset: Option<usize>,
}

impl CompositionState {
    fn clear(&mut self) {
        self.previous_key = None;
        self.previous_output.clear();
        self.pending_left_sign = None;
        self.vowel_barrier = false;
        self.guard_offset = None;
    }

    /// Widen a window delete into the host delete, swallowing the ZWNJ
    /// guard when the delete reaches it.
    fn host_delete(&mut self, n: usize) -> usize {
        match self.guard_offset {
            Some(off) if n >= off && n > 0 => {
                self.guard_offset = None;
                n + 1
            }
            Some(off) => {
                self.guard_offset = Some(off - n);
                n
            }
            None => n,
        }
    }

    fn note_inserted(&mut self, n: usize) {
        if let Some(off) = self.guard_offset {
            self.guard_offset = Some(off + n);
        }
    }

    fn scalar_count(&self) -> usize {
        self.previous_output.chars().count()
    }

    /// Drop `n` scalars from the end of the window. Deleting past the
    /// window means the host is editing text the engine never produced;
    /// the window just empties.
    fn drop_scalars(&mut self, n: usize) {
        let len = self.scalar_count();
        if n >= len {
            self.previous_output.clear();
            return;
        }
        let keep = len - n;
        let byte_end = self
            .previous_output
            .char_indices()
            .nth(keep)
            .map(|(i, _)| i)
            .unwrap_or(self.previous_output.len());
        self.previous_output.truncate(byte_end);
    }

    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch != ZWNJ {
                self.previous_output.push(ch);
            }
        }
        let len = self.scalar_count();
        if len > MAX_CONTEXT_SCALARS {
            let cut = self
                .previous_output
                .char_indices()
                .nth(len - MAX_CONTEXT_SCALARS)
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.previous_output.drain(..cut);
        }
    }
}

/// The per-keystroke state machine for one language + layout pair.
pub struct CompositionEngine {
    rules: &'static ScriptRules,
    table: &'static LayoutTable,
    config: TranslatorConfig,
    state: CompositionState,
}

impl CompositionEngine {
    pub fn new(table: &'static LayoutTable, config: TranslatorConfig) -> Self {
        Self {
            rules: ScriptRules::for_language(table.language),
            table,
            config,
            state: CompositionState::default(),
        }
    }

    pub fn table(&self) -> &'static LayoutTable {
        self.table
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn state(&self) -> &CompositionState {
        &self.state
    }

    /// Change the backspace policy without disturbing the composition.
    pub fn set_reverse_delete_order(&mut self, enabled: bool) {
        self.config.reverse_delete_order = enabled;
    }

    /// Translate one keystroke into an edit operation.
    pub fn translate_key(&mut self, key: char) -> TranslationResult {
        let step = match self.table.kind {
            LayoutKind::Wytiwyg => self.step_visual(key),
            LayoutKind::Phonetic | LayoutKind::Direct => self.step_logical(key),
        };

        let Some((delete, insert)) = step else {
            debug!(key = %key, "key not in layout, passing through");
            self.state.clear();
            return TranslationResult::unhandled();
        };

        let host_delete = self.state.host_delete(delete);
        self.state.drop_scalars(delete);

        // ZWNJ guard: block the ligature when a guarded consonant lands
        // after a matching dead consonant. The guard goes to the host
        // only; the context window stays ZWNJ-free.
        let mut emitted = insert.clone();
        if self.config.emit_zwnj_guard {
            if let Some(first) = insert.chars().next() {
                let mut tail = self.state.previous_output.chars().rev();
                if let (Some(v), Some(p)) = (tail.next(), tail.next()) {
                    if v == self.rules.virama && self.rules.needs_zwnj(p, first) {
                        emitted.insert(0, ZWNJ);
                        self.state.guard_offset = Some(0);
                    }
                }
            }
        }

        self.state.push_text(&insert);
        self.state.note_inserted(insert.chars().count());
        self.state.previous_key = Some(key);
        self.state.vowel_barrier = self
            .table
            .modifier(key)
            .map_or(false, |m| m.kind == ModifierKind::Respell && insert.is_empty());

        debug!(key = %key, delete = host_delete, insert = %emitted, "translated");
        TranslationResult::edit(host_delete, emitted)
    }

    /// Phonetic and direct layouts: memory-order composition.
    fn step_logical(&mut self, key: char) -> Option<(usize, String)> {
        let prev_key = self.state.previous_key;

        if let Some(c) = self.table.cluster(key, prev_key, &self.state.previous_output) {
            return Some((c.delete, c.text.to_string()));
        }

        if let Some(pk) = prev_key {
            for e in self.table.extensions_for(key, pk) {
                if let Some(step) = self.extend_vowel(e) {
                    return Some(step);
                }
            }
        }

        if let Some(m) = self.table.modifier(key) {
            return self.logical_modifier(m.key, m.sign, m.kind);
        }

        if self.state.previous_output.is_empty() {
            if let Some(text) = self.table.word_initial(key) {
                return Some((0, text.to_string()));
            }
        }

        if let Some(v) = self.table.vowel(key) {
            return Some(self.attach_vowel(v));
        }

        if let Some(c) = self.table.consonant(key) {
            return Some(self.emit_consonant(c.base, key, prev_key));
        }

        if let Some(l) = self.table.literal(key) {
            return Some((0, l.text.to_string()));
        }

        // Scripts with native digits substitute them for ASCII digit
        // keys; the rest leave digits to the host.
        if key.is_ascii_digit() && self.rules.substitute_digits {
            if let Some(text) = self.native_digit(key) {
                return Some((0, text));
            }
        }

        None
    }

    /// A second vowel key lengthening the previous one. What gets
    /// replaced depends on what the first key actually left behind; when
    /// the context no longer matches, the key falls through and starts a
    /// fresh vowel instead.
    fn extend_vowel(&self, e: &crate::layout::VowelExtension) -> Option<(usize, String)> {
        let mut rev = self.state.previous_output.chars().rev();
        let last = rev.next()?;

        // Marks like visarga look the same standalone and after a
        // consonant; the scalar before decides which form applies.
        if e.from_independent == Some(last) && e.from_sign == Some(last) {
            let after_consonant = rev.next().map_or(false, |c| self.rules.is_consonant(c));
            let text = if after_consonant { e.sign } else { e.independent };
            return Some((1, text.to_string()));
        }
        if e.from_independent == Some(last) {
            return Some((1, e.independent.to_string()));
        }
        if e.from_sign == Some(last) {
            return Some((1, e.sign.to_string()));
        }
        // Inherent-vowel syllable picking up a longer vowel.
        if e.from_sign.is_none() && self.rules.is_consonant(last) {
            return Some((0, e.sign.to_string()));
        }
        None
    }

    fn logical_modifier(
        &self,
        key: char,
        sign: char,
        kind: ModifierKind,
    ) -> Option<(usize, String)> {
        match kind {
            // Vowel killer: silent once, doubled it surfaces the virama
            // unless the syllable already ends dead.
            ModifierKind::Respell => {
                if self.state.previous_key == Some(key)
                    && self
                        .state
                        .previous_output
                        .chars()
                        .next_back()
                        .map_or(false, |c| self.rules.is_consonant(c))
                {
                    Some((0, sign.to_string()))
                } else {
                    Some((0, String::new()))
                }
            }
            ModifierKind::Sign | ModifierKind::AuMark => {
                if let Some(last) = ScriptRules::last_scalar(&self.state.previous_output) {
                    if let Some(composed) = self.rules.compose_sign(last, sign) {
                        return Some((1, composed.to_string()));
                    }
                    if let Some(composed) = self.rules.compose_vowel(last, sign) {
                        return Some((1, composed.to_string()));
                    }
                }
                Some((0, sign.to_string()))
            }
            ModifierKind::Dead => Some((0, String::new())),
            ModifierKind::LeftHalf => Some((0, String::new())),
        }
    }

    fn attach_vowel(&self, v: &VowelEntry) -> (usize, String) {
        let out = &self.state.previous_output;
        match self.table.kind {
            LayoutKind::Direct => {
                match ScriptRules::last_scalar(out) {
                    // Uyirmei: the sign lands on the bare consonant.
                    Some(last) if self.rules.is_consonant(last) => (0, v.sign.to_string()),
                    _ => (0, v.independent.to_string()),
                }
            }
            _ => {
                if !self.state.vowel_barrier && self.rules.ends_with_dead_consonant(out) {
                    // Respell the dead consonant: the trailing two
                    // scalars are the unit, whatever cluster precedes
                    // them stays put.
                    let stem: String = out
                        .chars()
                        .rev()
                        .take(2)
                        .filter(|&c| c != self.rules.virama)
                        .collect();
                    (2, format!("{}{}", stem, v.sign))
                } else {
                    (0, v.independent.to_string())
                }
            }
        }
    }

    fn emit_consonant(&self, base: char, key: char, prev_key: Option<char>) -> (usize, String) {
        match self.table.kind {
            LayoutKind::Direct => {
                let after_consonant = ScriptRules::last_scalar(&self.state.previous_output)
                    .map_or(false, |c| self.rules.is_consonant(c));
                if self.config.auto_pulli
                    && after_consonant
                    && prev_key.map_or(false, |pk| self.table.is_auto_pulli_pair(pk, key))
                {
                    (0, format!("{}{}", self.rules.virama, base))
                } else {
                    (0, base.to_string())
                }
            }
            _ => (0, format!("{}{}", base, self.rules.virama)),
        }
    }

    /// Visual-order layouts: typewriter composition with placeholders.
    fn step_visual(&mut self, key: char) -> Option<(usize, String)> {
        let prev_key = self.state.previous_key;

        if let Some(c) = self.table.cluster(key, prev_key, &self.state.previous_output) {
            return Some((c.delete, c.text.to_string()));
        }

        if let Some(m) = self.table.modifier(key) {
            match m.kind {
                ModifierKind::LeftHalf => {
                    // Park the sign behind a placeholder until its
                    // consonant arrives. A second left sign replaces the
                    // parked one.
                    let replacing = self.state.pending_left_sign.is_some();
                    self.state.pending_left_sign = Some(m.sign);
                    let text = format!("{}{}", ZWSP, m.sign);
                    return Some(if replacing { (2, text) } else { (0, text) });
                }
                ModifierKind::Sign | ModifierKind::AuMark => {
                    if let Some(last) = ScriptRules::last_scalar(&self.state.previous_output) {
                        if let Some(composed) = self.rules.compose_sign(last, m.sign) {
                            return Some((1, composed.to_string()));
                        }
                        if let Some(composed) = self.rules.compose_vowel(last, m.sign) {
                            return Some((1, composed.to_string()));
                        }
                    }
                    return Some((0, m.sign.to_string()));
                }
                ModifierKind::Dead => return Some((0, String::new())),
                ModifierKind::Respell => return Some((0, String::new())),
            }
        }

        if let Some(c) = self.table.consonant(key) {
            if let Some(sign) = self.state.pending_left_sign.take() {
                return Some((2, format!("{}{}", c.base, sign)));
            }
            return Some((0, c.base.to_string()));
        }

        if let Some(p) = self.table.precomposed_key(key) {
            if self.state.pending_left_sign.take().is_some() {
                return Some((2, p.text.to_string()));
            }
            return Some((0, p.text.to_string()));
        }

        if let Some(v) = self.table.vowel(key) {
            return Some((0, v.independent.to_string()));
        }

        if let Some(l) = self.table.literal(key) {
            return Some((0, l.text.to_string()));
        }

        None
    }

    /// Undo one visible step of composition.
    ///
    /// On visual-order layouts with `reverse_delete_order`, the vowel
    /// peels off in parts while the consonant stays: a two-part sign
    /// collapses to its left half, a left sign over a consonant becomes
    /// a placeholder, and a parked placeholder pair disappears whole.
    /// Everywhere else one scalar goes.
    ///
    /// The host passes its current composing text; when it no longer
    /// ends with what the engine last emitted, the engine re-anchors on
    /// the host text before classifying the delete.
    pub fn delete_last_char(&mut self, composing_text: &str) -> TranslationResult {
        self.resync(composing_text);
        let Some(last) = ScriptRules::last_scalar(&self.state.previous_output) else {
            // No composition context; the host performs its own backspace.
            self.state.clear();
            return TranslationResult::unhandled();
        };

        if self.config.reverse_delete_order
            && self.table.kind == LayoutKind::Wytiwyg
            && self.state.scalar_count() >= 2
        {
            if let Some(step) = self.reverse_delete(last) {
                return step;
            }
        }

        // Removing the placeholder or the parked sign itself means no
        // left vowel is waiting any more.
        if last == ZWSP || Some(last) == self.state.pending_left_sign {
            self.state.pending_left_sign = None;
        }
        let host = self.state.host_delete(1);
        self.state.drop_scalars(1);
        self.state.previous_key = None;
        TranslationResult::edit(host, String::new())
    }

    fn reverse_delete(&mut self, last: char) -> Option<TranslationResult> {
        let mut tail = self.state.previous_output.chars().rev();
        tail.next();
        let before = tail.next();

        // Two-part sign over a consonant collapses to its left half.
        if let Some(left) = self.rules.left_half_of(last) {
            if before.map_or(false, |c| self.rules.is_consonant(c)) {
                let host = self.state.host_delete(1);
                self.state.drop_scalars(1);
                self.state.push_text(&left.to_string());
                self.state.note_inserted(1);
                self.state.previous_key = None;
                self.state.pending_left_sign = Some(left);
                return Some(TranslationResult::edit(host, left.to_string()));
            }
        }

        if self.rules.is_left_sign(last) {
            match before {
                // The parked pair goes away whole.
                Some(ZWSP) => {
                    let host = self.state.host_delete(2);
                    self.state.drop_scalars(2);
                    self.state.previous_key = None;
                    self.state.pending_left_sign = None;
                    return Some(TranslationResult::edit(host, String::new()));
                }
                // The vowel goes; a placeholder keeps the slot open
                // next to the consonant.
                Some(c) if self.rules.is_consonant(c) => {
                    let host = self.state.host_delete(1);
                    self.state.drop_scalars(1);
                    self.state.push_text(&ZWSP.to_string());
                    self.state.note_inserted(1);
                    self.state.previous_key = None;
                    self.state.pending_left_sign = None;
                    return Some(TranslationResult::edit(host, ZWSP.to_string()));
                }
                _ => {}
            }
        }

        None
    }

    /// Remove a dangling placeholder + left sign pair at composition
    /// end. Classifies against the host's composing text, so it also
    /// catches pairs left behind by edits that bypassed the engine.
    pub fn cleanup_stray_vowel_sign(&mut self, composing_text: &str) -> TranslationResult {
        self.resync(composing_text);
        if self.state.pending_left_sign.is_some() {
            let mut tail = self.state.previous_output.chars().rev();
            if let (Some(sign), Some(ZWSP)) = (tail.next(), tail.next()) {
                if self.rules.is_left_sign(sign) {
                    debug!("removing stray left vowel sign");
                    let host = self.state.host_delete(2);
                    self.state.drop_scalars(2);
                    self.state.pending_left_sign = None;
                    return TranslationResult::edit(host, String::new());
                }
            }
            self.state.pending_left_sign = None;
        }
        TranslationResult::unhandled()
    }

    /// Forget all composition context.
    pub fn terminate_composition(&mut self) {
        self.state.clear();
    }

    /// Substitute for a key the layout does not map, classified against
    /// the host's composing text. Scripts with native digits swap ASCII
    /// digit keys when the composition tail is in-script; everything
    /// else passes through.
    pub fn unmapped_char(&self, key: char, composing_text: &str) -> Option<String> {
        if !self.rules.substitute_digits {
            return None;
        }
        // Mid-Latin-text digits stay ASCII.
        if let Some(last) = ScriptRules::last_scalar(composing_text) {
            if last.is_ascii() {
                return None;
            }
        }
        self.native_digit(key)
    }

    /// Re-anchor the context window on the host's composing text. When
    /// the host buffer no longer ends with what the engine last emitted
    /// (candidate insertion, edits outside the engine), the tail of the
    /// host text becomes the new window.
    fn resync(&mut self, composing_text: &str) {
        let in_sync = composing_text.ends_with(&self.state.previous_output)
            && !(self.state.previous_output.is_empty() && !composing_text.is_empty());
        if in_sync {
            return;
        }
        self.state.clear();
        let mut tail: Vec<char> = Vec::new();
        for ch in composing_text.chars().rev() {
            if tail.len() == MAX_CONTEXT_SCALARS {
                break;
            }
            if ch == ZWNJ {
                if self.state.guard_offset.is_none() {
                    self.state.guard_offset = Some(tail.len());
                }
                continue;
            }
            tail.push(ch);
        }
        self.state.previous_output = tail.into_iter().rev().collect();
        let mut rev = self.state.previous_output.chars().rev();
        if let (Some(sign), Some(ZWSP)) = (rev.next(), rev.next()) {
            if self.rules.is_left_sign(sign) {
                self.state.pending_left_sign = Some(sign);
            }
        }
    }

    fn native_digit(&self, key: char) -> Option<String> {
        let idx = key.to_digit(10)? as usize;
        self.rules.digits.get(idx).map(|d| d.to_string())
    }
}
