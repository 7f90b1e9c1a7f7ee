// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::value::Kind;

/// Errors raised by [`Value`](crate::Value) accessors on a finished tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Keyed access on a non-object, indexed access on a non-array, or a
    /// mutation on the wrong kind of container.
    WrongKind { expected: Kind, found: Kind },
    /// The object has no entry for this key.
    MissingKey(String),
    /// The index is not below the array length.
    IndexOutOfRange { index: usize, len: usize },
}

impl AccessError {
    pub(crate) fn wrong_kind<T>(expected: Kind, found: Kind) -> Result<T, Self> {
        Err(AccessError::WrongKind { expected, found })
    }
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::WrongKind { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            AccessError::MissingKey(key) => write!(f, "no such key: {key:?}"),
            AccessError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}
