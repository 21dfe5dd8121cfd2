// crates/jotter-core/src/name.rs - Validated note names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a note name fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("note name cannot be empty")]
    Empty,

    #[error("note name '{0}' contains a path separator")]
    PathSeparator(String),

    #[error("note name '{0}' is a reserved path component")]
    Reserved(String),

    #[error("note name '{0}' contains a control character")]
    ControlCharacter(String),
}

/// Result type for name operations
pub type NameResult<T> = Result<T, NameError>;

/// A validated note name, used verbatim as a filename stem.
///
/// Notes map one-to-one onto files in the notes directory, so a name must be
/// a single path component: parsing rejects the empty string, the `.` and
/// `..` components, and anything containing a path separator or a control
/// character. A `NoteName` that exists is always safe to join onto the
/// notes directory; names like `../secret` never reach the filesystem.
///
/// Backslashes are rejected on every platform so a store written on Unix
/// stays one-component-per-note when read on Windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteName(String);

impl NoteName {
    /// Validate a raw string as a note name.
    ///
    /// The input is taken as-is; trimming user input is the prompting
    /// layer's job, not the type's.
    pub fn new<S: Into<String>>(name: S) -> NameResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(NameError::Empty);
        }

        if name == "." || name == ".." {
            return Err(NameError::Reserved(name));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(NameError::PathSeparator(name));
        }

        if name.chars().any(char::is_control) {
            return Err(NameError::ControlCharacter(name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename for this note under the given extension, e.g. `groceries.txt`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteName {
    type Err = NameError;

    fn from_str(s: &str) -> NameResult<Self> {
        Self::new(s)
    }
}

// Serde goes through these so deserialized names are validated too.
impl TryFrom<String> for NoteName {
    type Error = NameError;

    fn try_from(value: String) -> NameResult<Self> {
        Self::new(value)
    }
}

impl From<NoteName> for String {
    fn from(name: NoteName) -> String {
        name.0
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        for name in ["TestNote", "groceries", "meeting notes", "2024 plans", "café"] {
            let parsed = NoteName::new(name).unwrap();
            assert_eq!(parsed.as_str(), name);
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_accepts_hidden_style_names() {
        // Leading dots are fine as long as the name is not "." or ".."
        assert!(NoteName::new(".drafts").is_ok());
        assert!(NoteName::new("...").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(NoteName::new(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_reserved_components() {
        assert_eq!(NoteName::new("."), Err(NameError::Reserved(".".into())));
        assert_eq!(NoteName::new(".."), Err(NameError::Reserved("..".into())));
    }

    #[test]
    fn test_rejects_path_separators() {
        for name in ["a/b", "/etc/passwd", "../secret", "..\\secret", "notes\\inner"] {
            assert_eq!(
                NoteName::new(name),
                Err(NameError::PathSeparator(name.to_string())),
                "expected '{}' to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            NoteName::new("two\nlines"),
            Err(NameError::ControlCharacter("two\nlines".into()))
        );
        assert_eq!(
            NoteName::new("nul\0byte"),
            Err(NameError::ControlCharacter("nul\0byte".into()))
        );
    }

    #[test]
    fn test_from_str_round_trips() {
        let name: NoteName = "TestNote".parse().unwrap();
        assert_eq!(name, NoteName::new("TestNote").unwrap());
        assert!("a/b".parse::<NoteName>().is_err());
    }

    #[test]
    fn test_file_name_appends_extension() {
        let name = NoteName::new("TestNote").unwrap();
        assert_eq!(name.file_name("txt"), "TestNote.txt");
        assert_eq!(name.file_name("md"), "TestNote.md");
    }

    #[test]
    fn test_serde_revalidates_on_deserialize() {
        let name = NoteName::new("TestNote").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"TestNote\"");

        let parsed: NoteName = serde_json::from_str("\"TestNote\"").unwrap();
        assert_eq!(parsed, name);

        assert!(serde_json::from_str::<NoteName>("\"a/b\"").is_err());
        assert!(serde_json::from_str::<NoteName>("\"\"").is_err());
    }
}
