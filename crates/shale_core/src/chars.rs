//! Code point classification for the tokenizer.
//!
//! Every predicate here looks at a single `char` and nothing else. The sets are deliberately narrow:
//! identifiers are ASCII-only (plus `$` and `_`), and numeric literals are plain decimal digits with an
//! optional decimal point.
//!
//! ## Examples
//! ```rust
//! use shale_core::chars;
//!
//! assert!(chars::is_identifier_start('$'));
//! assert!(!chars::is_identifier_start('9'));
//! assert!(chars::is_numeric_part('.'));
//! ```

/// Byte order mark, treated as ordinary whitespace.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// `$`, `_`, `A-Z` or `a-z`.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphabetic()
}

/// Any identifier start character, or an ASCII digit.
#[inline]
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Horizontal whitespace, including the Unicode space separators and the BOM.
///
/// ## Notes
/// - Line terminators are *not* whitespace; see [`is_line_terminator`].
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | BYTE_ORDER_MARK
    )
}

/// LF, CR, LINE SEPARATOR or PARAGRAPH SEPARATOR.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// A character that may appear inside a numeric literal: a decimal digit or `.`.
#[inline]
pub fn is_numeric_part(c: char) -> bool {
    is_numeric_digit(c) || c == '.'
}

/// `0-9`.
#[inline]
pub fn is_numeric_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_classes() {
        for c in ['a', 'z', 'A', 'Z', '_', '$'] {
            assert!(is_identifier_start(c), "{c:?} should start an identifier");
            assert!(is_identifier_part(c), "{c:?} should continue an identifier");
        }
        for c in '0'..='9' {
            assert!(!is_identifier_start(c));
            assert!(is_identifier_part(c));
        }
        // Identifiers are ASCII-only.
        assert!(!is_identifier_start('é'));
        assert!(!is_identifier_part('π'));
        assert!(!is_identifier_part('-'));
    }

    #[test]
    fn whitespace_and_line_terminators_are_disjoint() {
        let ws = [' ', '\t', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{1680}', '\u{2005}', '\u{3000}', '\u{FEFF}'];
        let lt = ['\n', '\r', '\u{2028}', '\u{2029}'];
        for c in ws {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
            assert!(!is_line_terminator(c));
        }
        for c in lt {
            assert!(is_line_terminator(c), "{c:?} should be a line terminator");
            assert!(!is_whitespace(c));
        }
        assert!(!is_whitespace('\u{200B}'), "zero-width space is not in the set");
    }

    #[test]
    fn numeric_classes() {
        assert!(is_numeric_part('.'));
        assert!(!is_numeric_digit('.'));
        assert!(is_numeric_digit('7'));
        assert!(!is_numeric_part('e'));
        assert!(!is_numeric_part('_'));
    }
}
