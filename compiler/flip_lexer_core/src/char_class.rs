//! Codepoint classification.

/// Returns `true` if `c` separates words.
///
/// Follows the Unicode `White_Space` property: the ASCII controls
/// `\t \n \v \f \r`, space, U+0085 (NEL), U+00A0 (NBSP), U+1680, the
/// U+2000..=U+200A space range, the line and paragraph separators,
/// U+202F, U+205F and U+3000.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::is_whitespace;

    #[test]
    fn ascii_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}'] {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
        }
    }

    #[test]
    fn unicode_whitespace() {
        for c in ['\u{0085}', '\u{00A0}', '\u{1680}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
        }
    }

    #[test]
    fn non_whitespace() {
        for c in ['a', '0', '-', '\0', 'é', '語', '\u{200B}', '🦀'] {
            assert!(!is_whitespace(c), "{c:?} should not be whitespace");
        }
    }
}
