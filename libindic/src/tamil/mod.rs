//! Tamil keyboard layouts.
//!
//! Ten layouts in three families: the phonetic Anjal maps, the direct
//! one-key-one-letter maps (Tamil99, Tamil97, Murasu6) and the
//! visual-order typewriter maps (Mylai, the typewriter variants and
//! Bamini).

mod anjal;
mod direct;
mod wytiwyg;

use libindic_core::{Layout, LayoutTable};

/// Table for a Tamil layout.
pub fn table(layout: Layout) -> &'static LayoutTable {
    match layout {
        Layout::Anjal | Layout::AnjalIndic => &anjal::TABLE,
        Layout::Tamil99 => &direct::TAMIL99,
        Layout::Tamil97 => &direct::TAMIL97,
        Layout::Murasu6 => &direct::MURASU6,
        Layout::Mylai => &wytiwyg::MYLAI,
        Layout::TypewriterNew | Layout::TypewriterOld => &wytiwyg::TYPEWRITER,
        Layout::TnTypewriter => &wytiwyg::TN_TYPEWRITER,
        Layout::Bamini => &wytiwyg::BAMINI,
    }
}
