// SPDX-License-Identifier: Apache-2.0

/// Where in the input an error was detected.
///
/// `offset` is the byte offset of the offending character (or the input
/// length for end-of-input errors). `line` and `column` are 1-based, with
/// columns counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub(crate) const fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Position of the character following `c`.
    pub(crate) fn advance(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        if c == '\n' {
            Position {
                offset,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// Non-whitespace seen before the root `{` or `[`.
    ExpectedContainerStart,
    /// Character not allowed in the current parser state.
    UnexpectedChar,
    /// An object key must start with a quote.
    ExpectedQuote,
    /// The key already exists in the enclosing object.
    DuplicateKey,
    /// Numeric text that does not convert completely.
    InvalidNumber,
    /// Text that cannot become `true`, `false` or `null`.
    InvalidKeyword,
    /// Input ended with an open container or an unfinished token.
    UnexpectedEndOfInput,
    /// Containers nested deeper than the configured limit.
    MaxDepthReached,
}

impl ErrKind {
    const fn describe(&self) -> &'static str {
        match self {
            ErrKind::ExpectedContainerStart => "expected '{' or '['",
            ErrKind::UnexpectedChar => "unexpected character",
            ErrKind::ExpectedQuote => "expected quote to start object key",
            ErrKind::DuplicateKey => "duplicate object key",
            ErrKind::InvalidNumber => "invalid number",
            ErrKind::InvalidKeyword => "invalid keyword",
            ErrKind::UnexpectedEndOfInput => "unexpected end of input",
            ErrKind::MaxDepthReached => "maximum nesting depth reached",
        }
    }
}

/// A parse failure, located at the offending character.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ErrKind,
    character: Option<char>,
    position: Position,
}

impl ParseError {
    pub(crate) fn new<T>(kind: ErrKind, character: char, position: Position) -> Result<T, Self> {
        Err(Self {
            kind,
            character: Some(character),
            position,
        })
    }

    pub(crate) fn end_of_input<T>(position: Position) -> Result<T, Self> {
        Err(Self {
            kind: ErrKind::UnexpectedEndOfInput,
            character: None,
            position,
        })
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// The character that triggered the error, `None` at end of input.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.character {
            Some(c) => write!(
                f,
                "{}, got {:?} at {}",
                self.kind.describe(),
                c,
                self.position
            ),
            None => write!(f, "{} at {}", self.kind.describe(), self.position),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use test_log::test;

    #[test]
    fn test_position_advance() {
        let p = Position::start().advance('a').advance('b');
        assert_eq!(
            p,
            Position {
                offset: 2,
                line: 1,
                column: 3
            }
        );
        let p = p.advance('\n');
        assert_eq!(
            p,
            Position {
                offset: 3,
                line: 2,
                column: 1
            }
        );
        // Multi-byte characters move the offset by their encoded length
        let p = p.advance('é');
        assert_eq!(p.offset, 5);
        assert_eq!(p.column, 2);
    }

    #[test]
    fn test_error_constructors() {
        let pos = Position::start().advance('[');
        let err: Result<(), ParseError> = ParseError::new(ErrKind::UnexpectedChar, ':', pos);
        let err = err.unwrap_err();
        assert_eq!(err.kind(), ErrKind::UnexpectedChar);
        assert_eq!(err.character(), Some(':'));
        assert_eq!(err.position().column, 2);

        let err: Result<(), ParseError> = ParseError::end_of_input(pos);
        let err = err.unwrap_err();
        assert_eq!(err.kind(), ErrKind::UnexpectedEndOfInput);
        assert_eq!(err.character(), None);
    }

    #[test]
    fn test_display() {
        let pos = Position {
            offset: 9,
            line: 2,
            column: 4,
        };
        let err = ParseError::new::<()>(ErrKind::ExpectedQuote, 'k', pos).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected quote to start object key, got 'k' at line 2, column 4"
        );
        let err = ParseError::end_of_input::<()>(pos).unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input at line 2, column 4");
    }
}
