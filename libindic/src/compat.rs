//! Single-string edit encoding for hosts without a structured edit API.
//!
//! An edit operation flattens to `inserted_text` prefixed with one
//! U+2421 marker per scalar to delete. `decode_result` parses the
//! marker prefix back out; markers after the first non-marker scalar
//! are treated as literal text.

use libindic_core::TranslationResult;

/// Symbol-for-delete marker.
pub const DELCODE: char = '\u{2421}';

/// Flatten an edit operation into a single string.
pub fn encode_result(result: &TranslationResult) -> String {
    let mut out = String::with_capacity(result.delete_count + result.inserted_text.len());
    for _ in 0..result.delete_count {
        out.push(DELCODE);
    }
    out.push_str(&result.inserted_text);
    out
}

/// Split a flattened edit back into delete count and insertion text.
pub fn decode_result(encoded: &str) -> (usize, &str) {
    let mut deletes = 0;
    let mut rest = encoded;
    while let Some(stripped) = rest.strip_prefix(DELCODE) {
        deletes += 1;
        rest = stripped;
    }
    (deletes, rest)
}
