//! Single-pass fallback without a scanner or channel.
//!
//! Only ASCII space separates words here; tabs, newlines and Unicode
//! whitespace are treated as part of a word. The CLI uses this as a
//! baseline to show where the full pipeline differs.

use crate::assembler::reverse_codepoints;

/// Reverse each space-delimited word of `input`, keeping every space.
pub fn reverse_words_simple(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for (i, word) in input.split(' ').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        reverse_codepoints(word, &mut result);
    }
    result
}
