// SPDX-License-Identifier: Apache-2.0

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{AccessError, ParseError};

/// Object storage. Keys are unique; iteration follows key order.
pub type Map = BTreeMap<String, Value>;

/// A node of a parsed JSON document.
///
/// Containers own their children outright, so a tree is dropped, cloned
/// and compared as a whole. A default-constructed value is [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates a `Null` value.
    pub const fn new() -> Self {
        Value::Null
    }

    pub const fn empty_array() -> Self {
        Value::Array(Vec::new())
    }

    pub const fn empty_object() -> Self {
        Value::Object(BTreeMap::new())
    }

    /// Parses a complete JSON document. See [`crate::parse`].
    pub fn parse(input: &str) -> Result<Value, ParseError> {
        crate::parse(input)
    }

    /// Reads a whole file and parses it. See [`crate::parse_file`].
    #[cfg(feature = "std")]
    pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> Result<Value, crate::LoadError> {
        crate::parse_file(path)
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// True for arrays, including empty ones.
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// True for objects, including empty ones.
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Number of children of an array or object; `0` for every other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keyed or indexed lookup.
    ///
    /// A string index requires an object, a `usize` index requires an array;
    /// anything else is [`AccessError::WrongKind`].
    ///
    /// ```
    /// let doc = jsontree::parse(r#"{"marks": [4, 5]}"#).unwrap();
    /// let marks = doc.get("marks").unwrap();
    /// assert_eq!(marks.get(1).unwrap().as_f64(), Some(5.0));
    /// assert!(marks.get(2).is_err());
    /// assert!(doc.get(0).is_err());
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Result<&Value, AccessError> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`Value::get`], with the same errors.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value, AccessError> {
        index.index_into_mut(self)
    }

    /// Inserts or overwrites `key` in an object, returning the previous value.
    ///
    /// No duplicate check happens here; rejecting repeated keys is up to the
    /// parser.
    pub fn set_key<K: Into<String>>(
        &mut self,
        key: K,
        value: Value,
    ) -> Result<Option<Value>, AccessError> {
        match self {
            Value::Object(entries) => Ok(entries.insert(key.into(), value)),
            other => AccessError::wrong_kind(Kind::Object, other.kind()),
        }
    }

    /// Appends to the end of an array.
    pub fn append(&mut self, value: Value) -> Result<(), AccessError> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => AccessError::wrong_kind(Kind::Array, other.kind()),
        }
    }

    /// True only for an object holding `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Value::Object(entries) => entries.contains_key(key),
            _ => false,
        }
    }

    /// Object keys in iteration order; empty for every other kind.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_object()
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Moves the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(entries: Map) -> Self {
        Value::Object(entries)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for alloc::string::String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types usable with [`Value::get`]: `usize` for arrays, `str`/`String` for
/// objects.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value, AccessError>;
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value, AccessError>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value, AccessError> {
        match v {
            Value::Array(items) => items.get(*self).ok_or(AccessError::IndexOutOfRange {
                index: *self,
                len: items.len(),
            }),
            other => AccessError::wrong_kind(Kind::Array, other.kind()),
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        match v {
            Value::Array(items) => {
                let len = items.len();
                items.get_mut(*self).ok_or(AccessError::IndexOutOfRange {
                    index: *self,
                    len,
                })
            }
            other => AccessError::wrong_kind(Kind::Array, other.kind()),
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value, AccessError> {
        match v {
            Value::Object(entries) => entries
                .get(self)
                .ok_or_else(|| AccessError::MissingKey(self.into())),
            other => AccessError::wrong_kind(Kind::Object, other.kind()),
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        match v {
            Value::Object(entries) => entries
                .get_mut(self)
                .ok_or_else(|| AccessError::MissingKey(self.into())),
            other => AccessError::wrong_kind(Kind::Object, other.kind()),
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value, AccessError> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        self.as_str().index_into_mut(v)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value, AccessError> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        (**self).index_into_mut(v)
    }
}
