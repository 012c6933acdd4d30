//! Word-boundary test for candidate spans.
//!
//! A mention only counts when it stands alone as a word: `Tee` in
//! `"my Tee."` is a mention, the same letters inside `"Teeth"` are not.

/// Whether `c` may sit immediately next to an item mention.
///
/// Whitespace and common sentence punctuation delimit mentions; anything
/// else (letters, digits, hyphens, quotes) glues the span to its
/// neighbour and disqualifies it.
pub(crate) fn is_boundary_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')')
}

/// Whether the span `[start, end)` of `text` is delimited on both sides.
///
/// The char before `start` and the char after `end` must each be a
/// boundary char; the start and end of input count as delimited. Offsets
/// that do not lie on char boundaries never pass.
pub(crate) fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let Some(head) = text.get(..start) else {
        return false;
    };
    let Some(tail) = text.get(end..) else {
        return false;
    };

    let before_ok = head.chars().next_back().map_or(true, is_boundary_char);
    let after_ok = tail.chars().next().map_or(true, is_boundary_char);
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_and_sentence_punctuation_are_boundaries() {
        for c in [' ', '\t', '\n', '.', ',', '!', '?', ';', ':', '(', ')'] {
            assert!(is_boundary_char(c), "{c:?} should be a boundary");
        }
    }

    #[test]
    fn letters_digits_and_joiners_are_not_boundaries() {
        for c in ['a', 'Z', '0', '-', '\'', '"', '_', 'é'] {
            assert!(!is_boundary_char(c), "{c:?} should not be a boundary");
        }
    }

    #[test]
    fn span_at_input_edges_is_delimited() {
        // "Tee" covering the whole input.
        assert!(has_word_boundaries("Tee", 0, 3));
        // Start of input on the left, space on the right.
        assert!(has_word_boundaries("Tee time", 0, 3));
        // Space on the left, end of input on the right.
        assert!(has_word_boundaries("my Tee", 3, 6));
    }

    #[test]
    fn both_sides_must_be_delimited() {
        // "Tee" inside "Teeth": right neighbour is a letter.
        assert!(!has_word_boundaries("Teeth are white", 0, 3));
        // Left neighbour is a letter.
        assert!(!has_word_boundaries("myTee.", 2, 5));
        // One good side does not rescue the other.
        assert!(!has_word_boundaries("Tee-shirt", 0, 3));
    }

    #[test]
    fn multibyte_neighbours_are_checked_as_chars() {
        // é before and after the span; neither is a boundary.
        let text = "éTeeé";
        assert!(!has_word_boundaries(text, 2, 5));

        // Multibyte whitespace neighbours delimit normally.
        let text = "\u{a0}Tee\u{a0}"; // no-break space on each side
        assert!(has_word_boundaries(text, 2, 5));
    }

    #[test]
    fn offsets_off_char_boundaries_never_pass() {
        // 1 is inside the two-byte é.
        assert!(!has_word_boundaries("é Tee", 1, 3));
    }
}
