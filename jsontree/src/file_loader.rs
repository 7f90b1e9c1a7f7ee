// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use crate::{ParseError, Value};

/// Errors from [`parse_file`](crate::parse_file).
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read as UTF-8 text.
    Io(std::io::Error),
    /// The file was read but its content is not an accepted document.
    Parse(ParseError),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read input: {e}"),
            LoadError::Parse(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

/// Reads the whole file at `path` and parses it as one document.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(crate::parse(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrKind;
    use std::io::Write;
    use test_log::test;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("jsontree-{}-{}", std::process::id(), name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_file() {
        let path = temp_file("ok.json", "{\n  \"marks\": [4, 5, 5]\n}\n");
        let v = parse_file(&path).unwrap();
        assert_eq!(v.get("marks").unwrap().len(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_parse_file_reports_parse_error() {
        let path = temp_file("bad.json", "[1,2,");
        match parse_file(&path) {
            Err(LoadError::Parse(e)) => assert_eq!(e.kind(), ErrKind::UnexpectedEndOfInput),
            other => panic!("Expected parse error, got {:?}", other),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("jsontree-definitely-not-here.json");
        let err = parse_file(path).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().starts_with("cannot read input"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
