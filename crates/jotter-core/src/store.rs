// crates/jotter-core/src/store.rs - Directory-backed note storage
//
// A NoteStore is one directory of `<name>.<extension>` text files and
// nothing else: no metadata file, no nesting. The filesystem is the sole
// source of truth and no state is held in memory between operations. Every
// operation is a single blocking std::fs call; concurrent writers to the
// same name race at the filesystem level and the last write wins.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::StoreConfig;
use crate::name::NoteName;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The named note has no corresponding file. The only modeled domain
    /// error; everything else is a filesystem fault passed through.
    #[error("note '{0}' not found")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A directory-backed collection of plain-text notes.
///
/// Each note is one file named `<name>.<extension>` directly inside the
/// store's root directory. Notes have exactly two states, absent and
/// present: `create` moves a name to present (overwriting whole-file, never
/// merging), `delete` moves it back to absent. The root directory is
/// created lazily by the first `create`.
pub struct NoteStore {
    root: PathBuf,
    extension: String,
}

impl NoteStore {
    /// Create a store over the configured directory.
    ///
    /// The directory is not touched here; a store over a missing directory
    /// simply lists as empty until the first write.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            root: config.dir,
            extension: config.extension,
        }
    }

    /// The store's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file extension notes are stored under, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Full path of the file backing a note name
    pub fn path_of(&self, name: &NoteName) -> PathBuf {
        self.root.join(name.file_name(&self.extension))
    }

    /// Whether a note currently exists
    pub fn exists(&self, name: &NoteName) -> bool {
        self.path_of(name).is_file()
    }

    /// Write a note, creating the store directory if needed.
    ///
    /// An existing note of the same name is silently replaced in full;
    /// nothing is merged and nothing is reported. Returns the path written.
    pub fn create(&self, name: &NoteName, content: &str) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_of(name);
        fs::write(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote note");

        Ok(path)
    }

    /// List the names of all stored notes, sorted.
    ///
    /// Only regular files with the store's extension count as notes;
    /// subdirectories, other extensions, and non-UTF-8 filenames are
    /// skipped. A store whose directory does not exist yet lists as empty.
    pub fn list(&self) -> StoreResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(OsStr::to_str) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        debug!(count = names.len(), "listed notes");
        Ok(names)
    }

    /// Read a note's full content.
    ///
    /// The existence check and the read are the same syscall: a missing
    /// file surfaces as the filesystem's not-found error and is mapped to
    /// [`StoreError::NotFound`], so there is no check-then-read window.
    pub fn read(&self, name: &NoteName) -> StoreResult<String> {
        let path = self.path_of(name);

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read note");
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a note permanently.
    ///
    /// No confirmation and no undo. Deleting an absent note reports
    /// [`StoreError::NotFound`] and leaves the directory unchanged.
    pub fn delete(&self, name: &NoteName) -> StoreResult<()> {
        let path = self.path_of(name);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "deleted note");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Names of notes whose name or content contains the query,
    /// case-insensitive, sorted.
    ///
    /// Best-effort over content: a note that disappears or fails to read
    /// mid-scan is skipped rather than failing the whole search.
    pub fn search(&self, query: &str) -> StoreResult<Vec<String>> {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();

        for name in self.list()? {
            if name.to_lowercase().contains(&needle) {
                matches.push(name);
                continue;
            }

            let path = self.root.join(format!("{}.{}", name, self.extension));
            if let Ok(content) = fs::read_to_string(&path) {
                if content.to_lowercase().contains(&needle) {
                    matches.push(name);
                }
            }
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> NoteStore {
        NoteStore::new(StoreConfig {
            dir: temp.path().join("notes"),
            extension: "txt".to_string(),
        })
    }

    fn name(s: &str) -> NoteName {
        NoteName::new(s).unwrap()
    }

    #[test]
    fn test_create_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let path = store
            .create(&name("TestNote"), "This is a test note.")
            .unwrap();
        assert_eq!(path, temp.path().join("notes").join("TestNote.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "This is a test note."
        );
        assert_eq!(store.read(&name("TestNote")).unwrap(), "This is a test note.");
    }

    #[test]
    fn test_round_trip_preserves_empty_and_odd_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        for content in ["", "  leading and trailing  ", "line one\nline two\n", "täxt"] {
            store.create(&name("n"), content).unwrap();
            assert_eq!(store.read(&name("n")).unwrap(), content);
        }
    }

    #[test]
    fn test_create_makes_directory_lazily() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(!store.root().exists());
        assert_eq!(store.list().unwrap(), Vec::<String>::new());

        store.create(&name("first"), "hello").unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_create_overwrites_existing_note() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.create(&name("n"), "old content").unwrap();
        store.create(&name("n"), "new content").unwrap();

        assert_eq!(store.read(&name("n")).unwrap(), "new content");
        assert_eq!(store.list().unwrap(), vec!["n"]);
    }

    #[test]
    fn test_list_returns_sorted_stems() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.create(&name("banana"), "").unwrap();
        store.create(&name("apple"), "").unwrap();
        store.create(&name("cherry"), "").unwrap();

        assert_eq!(store.list().unwrap(), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_list_ignores_foreign_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.create(&name("real"), "content").unwrap();

        fs::write(store.root().join("readme.md"), "not a note").unwrap();
        fs::write(store.root().join("no-extension"), "also not").unwrap();
        fs::create_dir(store.root().join("nested")).unwrap();
        fs::write(store.root().join("nested").join("deep.txt"), "ignored").unwrap();

        assert_eq!(store.list().unwrap(), vec!["real"]);
    }

    #[test]
    fn test_read_missing_note_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        match store.read(&name("Ghost")) {
            Err(StoreError::NotFound(n)) => assert_eq!(n, "Ghost"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_delete_removes_note() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.create(&name("TestNote"), "This is a test note.").unwrap();
        assert!(store.exists(&name("TestNote")));

        store.delete(&name("TestNote")).unwrap();
        assert!(!store.exists(&name("TestNote")));
        assert!(matches!(
            store.read(&name("TestNote")),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.list().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_delete_missing_note_is_not_found_and_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.create(&name("keep"), "kept").unwrap();

        assert!(matches!(
            store.delete(&name("Ghost")),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.list().unwrap(), vec!["keep"]);
        assert!(!store.root().join("Ghost.txt").exists());
    }

    #[test]
    fn test_distinct_names_coexist() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.create(&name("one"), "first").unwrap();
        store.create(&name("two"), "second").unwrap();

        assert_eq!(store.list().unwrap(), vec!["one", "two"]);
        assert_eq!(store.read(&name("one")).unwrap(), "first");
        assert_eq!(store.read(&name("two")).unwrap(), "second");
    }

    #[test]
    fn test_extension_is_configurable() {
        let temp = TempDir::new().unwrap();
        let store = NoteStore::new(StoreConfig {
            dir: temp.path().to_path_buf(),
            extension: "md".to_string(),
        });

        store.create(&name("n"), "markdown").unwrap();
        assert!(temp.path().join("n.md").is_file());
        assert_eq!(store.list().unwrap(), vec!["n"]);
    }

    #[test]
    fn test_search_matches_names_and_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.create(&name("groceries"), "milk, eggs, bread").unwrap();
        store.create(&name("meeting"), "Discuss the Groceries budget").unwrap();
        store.create(&name("unrelated"), "nothing here").unwrap();

        assert_eq!(
            store.search("groceries").unwrap(),
            vec!["groceries", "meeting"]
        );
        assert_eq!(store.search("milk").unwrap(), vec!["groceries"]);
        assert_eq!(store.search("absent").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_search_on_empty_store_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(store.search("anything").unwrap(), Vec::<String>::new());
    }
}
