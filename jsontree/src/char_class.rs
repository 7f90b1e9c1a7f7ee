// SPDX-License-Identifier: Apache-2.0

//! Character classification and numeric conversion used by the tree parser.
//!
//! Everything here is a pure function of its input; the parser owns all state.

/// Marker that suppresses quote-termination of the following character.
pub const ESCAPE_MARKER: char = '\\';

/// Keywords recognized in value position.
pub const KEYWORDS: [(&str, Keyword); 3] = [
    ("true", Keyword::True),
    ("false", Keyword::False),
    ("null", Keyword::Null),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Keyword {
    True,
    False,
    Null,
}

/// Outcome of feeding one more character to a keyword in progress.
#[derive(Debug, PartialEq)]
pub enum KeywordMatch {
    /// The accumulated text is still a prefix of some keyword.
    Partial,
    /// The accumulated text is exactly a keyword.
    Complete(Keyword),
    /// No keyword can be formed anymore.
    Mismatch,
}

/// JSON insignificant whitespace: space, tab, carriage return and newline.
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Both single and double quotes open a string.
pub const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"')
}

/// Only an ASCII digit can start a number token.
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub const fn is_escape(c: char) -> bool {
    c == ESCAPE_MARKER
}

pub const fn is_keyword_start(c: char) -> bool {
    matches!(c, 't' | 'f' | 'n')
}

pub const fn is_closing_bracket(c: char) -> bool {
    matches!(c, ']' | '}')
}

/// Matches `text` against the keyword table.
pub fn match_keyword(text: &str) -> KeywordMatch {
    let mut partial = false;
    for (word, keyword) in KEYWORDS {
        if word == text {
            return KeywordMatch::Complete(keyword);
        }
        partial |= word.starts_with(text);
    }
    if partial {
        KeywordMatch::Partial
    } else {
        KeywordMatch::Mismatch
    }
}

/// Strict text-to-double conversion.
///
/// The whole of `text` must be consumed by the conversion; anything left
/// over (a second sign, a stray letter, a trailing dot in the exponent)
/// makes the number invalid and `None` is returned. Only finite results are
/// accepted, so spellings like `1e999` are rejected as well.
pub fn to_number(text: &str) -> Option<f64> {
    // Rust's float grammar also takes "inf" and "NaN", which never start
    // with a digit and so cannot reach here from the parser
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_space(c), "{c:?} should be whitespace");
        }
        for c in ['\u{0B}', '\u{0C}', '\u{A0}', 'a', ','] {
            assert!(!is_space(c), "{c:?} should not be whitespace");
        }
    }

    #[test]
    fn test_quotes_and_escape() {
        assert!(is_quote('"'));
        assert!(is_quote('\''));
        assert!(!is_quote('`'));
        assert!(is_escape('\\'));
        assert!(!is_escape('/'));
    }

    #[test]
    fn test_number_start_is_digit_only() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('-'));
        assert!(!is_digit('+'));
        assert!(!is_digit('.'));
    }

    #[test]
    fn test_keyword_matching() {
        assert_eq!(match_keyword("t"), KeywordMatch::Partial);
        assert_eq!(match_keyword("fals"), KeywordMatch::Partial);
        assert_eq!(match_keyword("true"), KeywordMatch::Complete(Keyword::True));
        assert_eq!(
            match_keyword("false"),
            KeywordMatch::Complete(Keyword::False)
        );
        assert_eq!(match_keyword("null"), KeywordMatch::Complete(Keyword::Null));
        assert_eq!(match_keyword("tx"), KeywordMatch::Mismatch);
        assert_eq!(match_keyword("True"), KeywordMatch::Mismatch);
        assert_eq!(match_keyword("truee"), KeywordMatch::Mismatch);
    }

    #[test]
    fn test_to_number_accepts_full_text() {
        assert_eq!(to_number("0"), Some(0.0));
        assert_eq!(to_number("1"), Some(1.0));
        assert_eq!(to_number("9.4"), Some(9.4));
        assert_eq!(to_number("1.1"), Some(1.1));
        assert_eq!(to_number("2e3"), Some(2000.0));
        assert_eq!(to_number("2E-1"), Some(0.2));
        assert_eq!(to_number("15e+1"), Some(150.0));
    }

    #[test]
    fn test_to_number_rejects_leftovers() {
        assert_eq!(to_number(""), None);
        assert_eq!(to_number("1-2"), None);
        assert_eq!(to_number("1.2.3"), None);
        assert_eq!(to_number("12abc"), None);
        assert_eq!(to_number("1e"), None);
        assert_eq!(to_number("1}"), None);
        assert_eq!(to_number("-1"), None);
        assert_eq!(to_number("inf"), None);
        assert_eq!(to_number("1e999"), None);
    }
}
