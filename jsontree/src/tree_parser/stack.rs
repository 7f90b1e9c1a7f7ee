// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::value::{Kind, Value};
use crate::AccessError;

/// An open container and, for objects, the key whose value comes next.
#[derive(Debug)]
struct Frame {
    container: Value,
    key: Option<String>,
}

/// Containers that have been opened but not yet closed, innermost last.
///
/// Each frame owns its container. Closing a frame moves the container into
/// the frame below it, so the tree is assembled bottom-up without any
/// pointer back to a parent.
#[derive(Debug)]
pub(super) struct ContainerStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

/// Result of opening a container.
#[derive(Debug, PartialEq)]
pub(super) enum Opened {
    Array,
    Object,
    /// Opening would exceed the depth limit.
    TooDeep,
}

impl ContainerStack {
    pub fn new(max_depth: usize) -> Self {
        ContainerStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn top_kind(&self) -> Option<Kind> {
        self.frames.last().map(|frame| frame.container.kind())
    }

    pub fn is_object(&self) -> bool {
        self.top_kind() == Some(Kind::Object)
    }

    pub fn is_array(&self) -> bool {
        self.top_kind() == Some(Kind::Array)
    }

    /// True when `c` is the bracket that closes the innermost container.
    pub fn closes_top(&self, c: char) -> bool {
        match c {
            ']' => self.is_array(),
            '}' => self.is_object(),
            _ => false,
        }
    }

    /// Pushes a new empty container for an opening bracket.
    pub fn open(&mut self, bracket: char) -> Opened {
        if self.frames.len() >= self.max_depth {
            return Opened::TooDeep;
        }
        let (container, opened) = match bracket {
            '[' => (Value::empty_array(), Opened::Array),
            _ => (Value::empty_object(), Opened::Object),
        };
        log::trace!("open {} at depth {}", container.kind(), self.frames.len());
        self.frames.push(Frame {
            container,
            key: None,
        });
        opened
    }

    /// Pops the innermost container and hands it to its parent.
    ///
    /// Returns the container itself when it was the outermost one.
    pub fn close(&mut self) -> Result<Option<Value>, AccessError> {
        let Some(frame) = self.frames.pop() else {
            return Ok(None);
        };
        log::trace!(
            "close {} with {} entries at depth {}",
            frame.container.kind(),
            frame.container.len(),
            self.frames.len()
        );
        if self.frames.is_empty() {
            Ok(Some(frame.container))
        } else {
            self.attach(frame.container)?;
            Ok(None)
        }
    }

    /// True when the innermost object already holds `key`, counting a key
    /// that is still waiting for its value.
    pub fn has_key(&self, key: &str) -> bool {
        self.frames.last().is_some_and(|frame| {
            frame.key.as_deref() == Some(key) || frame.container.contains_key(key)
        })
    }

    /// Holds `key` as pending in the innermost object. The next attached
    /// value is stored under it.
    pub fn register_key(&mut self, key: String) -> Result<(), AccessError> {
        match self.frames.last_mut() {
            Some(frame) if frame.container.is_object() => {
                frame.key = Some(key);
                Ok(())
            }
            Some(frame) => AccessError::wrong_kind(Kind::Object, frame.container.kind()),
            None => AccessError::wrong_kind(Kind::Object, Kind::Null),
        }
    }

    /// Stores a completed value in the innermost container: under the
    /// pending key for objects, at the end for arrays.
    pub fn attach(&mut self, value: Value) -> Result<(), AccessError> {
        let Some(frame) = self.frames.last_mut() else {
            return AccessError::wrong_kind(Kind::Array, Kind::Null);
        };
        match frame.key.take() {
            Some(key) => frame.container.set_key(key, value).map(drop),
            None => frame.container.append(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_open_and_close_root() {
        let mut stack = ContainerStack::new(8);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.open('['), Opened::Array);
        assert!(stack.is_array());
        assert!(stack.closes_top(']'));
        assert!(!stack.closes_top('}'));
        let root = stack.close().unwrap();
        assert_eq!(root, Some(Value::empty_array()));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_nested_container_moves_into_parent() {
        let mut stack = ContainerStack::new(8);
        stack.open('{');
        stack.register_key("inner".into()).unwrap();
        stack.open('[');
        assert_eq!(stack.depth(), 2);
        stack.attach(Value::Bool(true)).unwrap();
        assert_eq!(stack.close().unwrap(), None);
        assert!(stack.is_object());

        let root = stack.close().unwrap().unwrap();
        let inner = root.get("inner").unwrap();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.get(0).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_pending_key_is_stored_on_attach() {
        let mut stack = ContainerStack::new(8);
        stack.open('{');
        assert!(!stack.has_key("a"));
        stack.register_key("a".into()).unwrap();
        assert!(stack.has_key("a"));
        assert_eq!(stack.frames[0].container.len(), 0);

        stack.attach(Value::Number(2.0)).unwrap();
        assert!(stack.has_key("a"));
        assert_eq!(stack.frames[0].key, None);
        let root = stack.close().unwrap().unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root.get("a").unwrap().as_f64(), Some(2.0));
    }

    #[test]
    fn test_pending_key_survives_nested_container() {
        let mut stack = ContainerStack::new(8);
        stack.open('{');
        stack.register_key("list".into()).unwrap();
        stack.open('[');
        assert!(stack.register_key("x".into()).is_err());
        stack.close().unwrap();
        assert!(stack.has_key("list"));
        let root = stack.close().unwrap().unwrap();
        assert_eq!(root.get("list").unwrap(), &Value::empty_array());
    }

    #[test]
    fn test_object_without_pending_key_rejects_value() {
        let mut stack = ContainerStack::new(8);
        stack.open('{');
        assert!(stack.attach(Value::Null).is_err());
    }

    #[test]
    fn test_depth_limit() {
        let mut stack = ContainerStack::new(2);
        assert_eq!(stack.open('['), Opened::Array);
        assert_eq!(stack.open('{'), Opened::Object);
        assert_eq!(stack.open('['), Opened::TooDeep);
        assert_eq!(stack.depth(), 2);
    }
}
