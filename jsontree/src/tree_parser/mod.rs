// SPDX-License-Identifier: Apache-2.0

//! Single-pass construction of a [`Value`] tree.
//!
//! The parser looks at exactly one character at a time and never goes back.
//! Everything it knows about the input so far lives in two places: the
//! current [`State`], which carries any partially read token, and the stack
//! of containers that are still open.

mod stack;

use alloc::string::String;

use crate::char_class::{
    self, is_closing_bracket, is_digit, is_escape, is_keyword_start, is_quote, is_space, Keyword,
    KeywordMatch,
};
use crate::parse_error::{ErrKind, ParseError, Position};
use crate::{AccessError, ParserConfig, Value};
use stack::{ContainerStack, Opened};

#[derive(Debug)]
enum State {
    /// Nothing but whitespace seen so far.
    Idle,
    Array { expect: Array },
    Object { expect: Object },
    String(StringToken),
    Number { text: String },
    Keyword { text: String },
    /// The root container is closed; only whitespace may follow.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Array {
    /// Just after `[`.
    ItemOrEnd,
    /// Just after `,`. A closing bracket here would be a trailing comma.
    Item,
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Object {
    /// Just after `{`.
    KeyOrEnd,
    /// Just after `,`.
    Key,
    Colon,
    Value,
    CommaOrEnd,
}

/// A string or object key being read.
#[derive(Debug)]
struct StringToken {
    text: String,
    /// Closes the token; either `'` or `"`.
    quote: char,
    /// Set right after the escape marker.
    escaping: bool,
    key: bool,
}

impl StringToken {
    fn new(quote: char, key: bool) -> Self {
        StringToken {
            text: String::new(),
            quote,
            escaping: false,
            key,
        }
    }
}

/// Builds a [`Value`] from one complete JSON document.
///
/// A parser is consumed by [`TreeParser::parse`]; each document gets its own
/// parser and therefore its own state.
///
/// ```
/// use jsontree::{ParserConfig, TreeParser};
///
/// let config = ParserConfig::default().with_max_depth(4);
/// let doc = TreeParser::with_config(config).parse("[[1], [2]]").unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug)]
pub struct TreeParser {
    state: State,
    stack: ContainerStack,
    root: Option<Value>,
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        TreeParser {
            state: State::Idle,
            stack: ContainerStack::new(config.max_depth),
            root: None,
        }
    }

    /// Parses `input` and returns the root container.
    ///
    /// Stops at the first offending character.
    pub fn parse(mut self, input: &str) -> Result<Value, ParseError> {
        let mut pos = Position::start();
        for c in input.chars() {
            let state = core::mem::replace(&mut self.state, State::Idle);
            self.state = self.step(state, c, pos)?;
            pos = pos.advance(c);
        }
        self.finish(pos)
    }

    fn finish(mut self, pos: Position) -> Result<Value, ParseError> {
        let root = self.root.take();
        match (self.state, root) {
            (State::Finished, Some(root)) => {
                log::debug!(
                    "parsed {} with {} entries from {} bytes",
                    root.kind(),
                    root.len(),
                    pos.offset
                );
                Ok(root)
            }
            (state, _) => {
                log::debug!(
                    "input ended in {:?} with {} open containers",
                    state,
                    self.stack.depth()
                );
                ParseError::end_of_input(pos)
            }
        }
    }

    fn step(&mut self, state: State, c: char, pos: Position) -> Result<State, ParseError> {
        match state {
            State::Finished if is_space(c) => Ok(State::Finished),
            State::Finished => ParseError::new(ErrKind::UnexpectedChar, c, pos),
            State::Array {
                expect: Array::CommaOrEnd,
            }
            | State::Object {
                expect: Object::CommaOrEnd,
            } => self.comma_or_end(c, pos),
            State::Object {
                expect: Object::Colon,
            } => match c {
                ':' => Ok(State::Object {
                    expect: Object::Value,
                }),
                c if is_space(c) => Ok(State::Object {
                    expect: Object::Colon,
                }),
                _ => ParseError::new(ErrKind::UnexpectedChar, c, pos),
            },
            State::Idle => self.start_root(c, pos),
            State::Array { expect } => self.fill_array(expect, c, pos),
            State::Object { expect } => self.fill_object(expect, c, pos),
            State::String(token) => self.continue_string(token, c, pos),
            State::Number { text } => self.continue_number(text, c, pos),
            State::Keyword { text } => self.continue_keyword(text, c, pos),
        }
    }

    fn start_root(&mut self, c: char, pos: Position) -> Result<State, ParseError> {
        match c {
            '{' | '[' => self.open_container(c, pos),
            c if is_space(c) => Ok(State::Idle),
            _ => ParseError::new(ErrKind::ExpectedContainerStart, c, pos),
        }
    }

    fn open_container(&mut self, c: char, pos: Position) -> Result<State, ParseError> {
        match self.stack.open(c) {
            Opened::Array => Ok(State::Array {
                expect: Array::ItemOrEnd,
            }),
            Opened::Object => Ok(State::Object {
                expect: Object::KeyOrEnd,
            }),
            Opened::TooDeep => ParseError::new(ErrKind::MaxDepthReached, c, pos),
        }
    }

    fn close_container(&mut self, c: char, pos: Position) -> Result<State, ParseError> {
        match self.stack.close() {
            Ok(Some(root)) => {
                self.root = Some(root);
                Ok(State::Finished)
            }
            Ok(None) => Ok(self.after_value()),
            Err(err) => Self::rejected(err, c, pos),
        }
    }

    /// State once a value has been stored in the innermost container.
    fn after_value(&self) -> State {
        if self.stack.is_object() {
            State::Object {
                expect: Object::CommaOrEnd,
            }
        } else if self.stack.is_array() {
            State::Array {
                expect: Array::CommaOrEnd,
            }
        } else {
            State::Finished
        }
    }

    fn comma_or_end(&mut self, c: char, pos: Position) -> Result<State, ParseError> {
        match c {
            ',' if self.stack.is_object() => Ok(State::Object {
                expect: Object::Key,
            }),
            ',' => Ok(State::Array {
                expect: Array::Item,
            }),
            c if self.stack.closes_top(c) => self.close_container(c, pos),
            c if is_space(c) => Ok(self.after_value()),
            _ => ParseError::new(ErrKind::UnexpectedChar, c, pos),
        }
    }

    /// Starts whatever value `c` introduces, or `None` if it introduces none.
    fn begin_value(&mut self, c: char, pos: Position) -> Option<Result<State, ParseError>> {
        let state = match c {
            '{' | '[' => return Some(self.open_container(c, pos)),
            c if is_quote(c) => State::String(StringToken::new(c, false)),
            c if is_digit(c) => State::Number {
                text: String::from(c),
            },
            c if is_keyword_start(c) => State::Keyword {
                text: String::from(c),
            },
            _ => return None,
        };
        Some(Ok(state))
    }

    fn fill_array(&mut self, expect: Array, c: char, pos: Position) -> Result<State, ParseError> {
        if is_space(c) {
            return Ok(State::Array { expect });
        }
        if c == ']' && expect == Array::ItemOrEnd {
            return self.close_container(c, pos);
        }
        self.begin_value(c, pos)
            .unwrap_or_else(|| ParseError::new(ErrKind::UnexpectedChar, c, pos))
    }

    fn fill_object(&mut self, expect: Object, c: char, pos: Position) -> Result<State, ParseError> {
        match expect {
            _ if is_space(c) => Ok(State::Object { expect }),
            Object::KeyOrEnd if c == '}' => self.close_container(c, pos),
            Object::KeyOrEnd | Object::Key if is_quote(c) => {
                Ok(State::String(StringToken::new(c, true)))
            }
            Object::Key if c == '}' => ParseError::new(ErrKind::UnexpectedChar, c, pos),
            Object::KeyOrEnd | Object::Key => ParseError::new(ErrKind::ExpectedQuote, c, pos),
            Object::Value => self
                .begin_value(c, pos)
                .unwrap_or_else(|| ParseError::new(ErrKind::UnexpectedChar, c, pos)),
            Object::Colon | Object::CommaOrEnd => {
                ParseError::new(ErrKind::UnexpectedChar, c, pos)
            }
        }
    }

    fn continue_string(
        &mut self,
        mut token: StringToken,
        c: char,
        pos: Position,
    ) -> Result<State, ParseError> {
        if token.escaping {
            // The escaped character is kept as is, without decoding
            token.text.push(c);
            token.escaping = false;
        } else if c == token.quote {
            return self.complete_string(token, c, pos);
        } else if is_escape(c) {
            token.escaping = true;
        } else {
            token.text.push(c);
        }
        Ok(State::String(token))
    }

    fn complete_string(
        &mut self,
        token: StringToken,
        c: char,
        pos: Position,
    ) -> Result<State, ParseError> {
        if !token.key {
            return self.complete_value(Value::String(token.text), c, pos);
        }
        if self.stack.has_key(&token.text) {
            log::debug!("duplicate key {:?} at {}", token.text, pos);
            return ParseError::new(ErrKind::DuplicateKey, c, pos);
        }
        log::trace!("key {:?}", token.text);
        self.stack
            .register_key(token.text)
            .or_else(|err| Self::rejected(err, c, pos))?;
        Ok(State::Object {
            expect: Object::Colon,
        })
    }

    fn continue_number(
        &mut self,
        mut text: String,
        c: char,
        pos: Position,
    ) -> Result<State, ParseError> {
        if !(is_space(c) || c == ',' || self.stack.closes_top(c)) {
            text.push(c);
            return Ok(State::Number { text });
        }
        let Some(number) = char_class::to_number(&text) else {
            log::debug!("rejected number text {:?}", text);
            return ParseError::new(ErrKind::InvalidNumber, c, pos);
        };
        self.complete_value(Value::Number(number), c, pos)?;
        // The terminator still has to act as separator or closing bracket
        self.comma_or_end(c, pos)
    }

    fn continue_keyword(
        &mut self,
        mut text: String,
        c: char,
        pos: Position,
    ) -> Result<State, ParseError> {
        if is_space(c) || c == ',' || is_closing_bracket(c) {
            return ParseError::new(ErrKind::InvalidKeyword, c, pos);
        }
        text.push(c);
        match char_class::match_keyword(&text) {
            KeywordMatch::Partial => Ok(State::Keyword { text }),
            KeywordMatch::Complete(keyword) => {
                let value = match keyword {
                    Keyword::True => Value::Bool(true),
                    Keyword::False => Value::Bool(false),
                    Keyword::Null => Value::Null,
                };
                self.complete_value(value, c, pos)
            }
            KeywordMatch::Mismatch => ParseError::new(ErrKind::InvalidKeyword, c, pos),
        }
    }

    fn complete_value(&mut self, value: Value, c: char, pos: Position) -> Result<State, ParseError> {
        log::trace!("{} value at {}", value.kind(), pos);
        self.stack
            .attach(value)
            .or_else(|err| Self::rejected(err, c, pos))?;
        Ok(self.after_value())
    }

    // The state machine only stores values where the stack can take them,
    // so this is reached only through an inconsistency between the two.
    fn rejected<T>(err: AccessError, c: char, pos: Position) -> Result<T, ParseError> {
        log::debug!("container rejected {:?} at {}: {}", c, pos, err);
        ParseError::new(ErrKind::UnexpectedChar, c, pos)
    }
}
