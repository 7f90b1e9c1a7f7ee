// SPDX-License-Identifier: Apache-2.0

//! Parse a complete JSON document into an owned tree of [`Value`]s.
//!
//! The parser reads the input once, one character at a time, and stops at
//! the first character it cannot accept. A document must be an object or an
//! array at the top level.
//!
//! ```
//! let doc = jsontree::parse(r#"{"a": "b", "c": true, "d": [1, 2, 3]}"#).unwrap();
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc.get("a").unwrap().as_str(), Some("b"));
//! assert_eq!(doc.get("d").unwrap().get(2).unwrap().as_f64(), Some(3.0));
//!
//! let err = jsontree::parse(r#"{"k": 1, "k": 2}"#).unwrap_err();
//! assert_eq!(err.kind(), jsontree::ErrKind::DuplicateKey);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod access_error;
pub use access_error::AccessError;

mod char_class;

#[cfg(feature = "std")]
mod file_loader;
#[cfg(feature = "std")]
pub use file_loader::{parse_file, LoadError};

mod parse_error;
pub use parse_error::{ErrKind, ParseError, Position};

mod parser_config;
pub use parser_config::{ParserConfig, DEFAULT_MAX_DEPTH};

mod tree_parser;
pub use tree_parser::TreeParser;

mod value;
pub use value::{Kind, Map, Value, ValueIndex};

/// Parses one complete document with the default [`ParserConfig`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    TreeParser::new().parse(input)
}
