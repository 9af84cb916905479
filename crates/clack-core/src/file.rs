//! File transfer payload.
//!
//! A [`FileTransfer`] names a file to read on the sending side and the bare
//! file name to write on the receiving side. Contents are absent until
//! [`FileTransfer::load`] runs; nothing touches the file system on
//! construction.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::MessageError;

/// Characters treated as directory separators regardless of platform.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// A file name without directory components.
///
/// Never empty, never `.` or `..`, never contains `/` or `\`. The invariant
/// is checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Validate `name` as a bare file name.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: `name` is empty, `.`, `..`, or contains path
    ///   components
    pub fn new(name: impl Into<String>) -> Result<Self, MessageError> {
        let name = name.into();
        if name.contains(SEPARATORS) {
            return Err(MessageError::InvalidArgument {
                reason: format!("file name {name:?} contains path components"),
            });
        }
        if name.is_empty() || name == "." || name == ".." {
            return Err(MessageError::InvalidArgument {
                reason: format!("{name:?} is not a file name"),
            });
        }
        Ok(Self(name))
    }

    /// Reduce `path` to its final component.
    ///
    /// Trailing separators are ignored, so `dir/name.txt` and `dir/name.txt/`
    /// both yield `name.txt`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: the final component is empty, `.` or `..`
    pub fn from_path(path: &str) -> Result<Self, MessageError> {
        let trimmed = path.trim_end_matches(SEPARATORS);
        let last = trimmed.rsplit(SEPARATORS).next().unwrap_or(trimmed);
        Self::new(last)
    }

    /// The file name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FileName {
    type Error = MessageError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File payload: source path, destination name and optional contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileTransfer {
    /// Path of the file to read on the sending side
    source: String,
    /// Bare name to write on the receiving side
    destination: FileName,
    /// Contents, once loaded
    contents: Option<String>,
}

impl FileTransfer {
    /// Create a transfer reading `source` and saving as the final component of
    /// `destination_path`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: `destination_path` has no usable final component
    pub fn new(source: impl Into<String>, destination_path: &str) -> Result<Self, MessageError> {
        let destination = FileName::from_path(destination_path)?;
        Ok(Self { source: source.into(), destination, contents: None })
    }

    /// Path of the file to read.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name the file is saved as.
    pub fn destination(&self) -> &FileName {
        &self.destination
    }

    /// Loaded contents. `None` until [`FileTransfer::load`] succeeds.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Whether contents have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.contents.is_some()
    }

    /// Replace the destination name.
    ///
    /// Unlike [`FileTransfer::new`], this does not strip directories.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: `name` contains path components or is not a file
    ///   name
    pub fn set_destination(&mut self, name: &str) -> Result<(), MessageError> {
        self.destination = FileName::new(name)?;
        Ok(())
    }

    /// Read the source file into this transfer.
    ///
    /// A transfer that is already loaded is left untouched, so retrying after
    /// a partial failure elsewhere never re-reads the file.
    ///
    /// # Errors
    ///
    /// - `NotFound`: the source does not exist or cannot be read as text
    pub fn load(&mut self) -> Result<(), MessageError> {
        if self.contents.is_some() {
            return Ok(());
        }

        let contents = fs::read_to_string(&self.source).map_err(|err| MessageError::NotFound {
            path: self.source.clone(),
            reason: err.to_string(),
        })?;

        tracing::debug!(source = %self.source, bytes = contents.len(), "loaded file contents");
        self.contents = Some(contents);
        Ok(())
    }

    /// Write the loaded contents to `directory/destination`.
    ///
    /// Overwrites an existing file, so a retried store produces the same
    /// result. Returns the path written.
    ///
    /// # Errors
    ///
    /// - `IoFailure`: no contents are loaded, or the write fails
    pub fn store(&self, directory: &Path) -> Result<PathBuf, MessageError> {
        let Some(contents) = &self.contents else {
            return Err(MessageError::IoFailure {
                reason: format!("no contents loaded for {}", self.destination),
            });
        };

        let target = directory.join(self.destination.as_str());
        fs::write(&target, contents).map_err(|err| MessageError::IoFailure {
            reason: format!("{}: {err}", target.display()),
        })?;

        tracing::debug!(target = %target.display(), bytes = contents.len(), "stored file contents");
        Ok(target)
    }

    /// Ordered payload fields: source, destination, contents (empty if not
    /// loaded).
    pub fn data(&self) -> [String; 3] {
        [
            self.source.clone(),
            self.destination.to_string(),
            self.contents.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn destination_is_reduced_to_file_name() {
        let transfer = FileTransfer::new("src/a.txt", "dir/name.txt").unwrap();
        assert_eq!(transfer.source(), "src/a.txt");
        assert_eq!(transfer.destination().as_str(), "name.txt");
        assert!(!transfer.is_loaded());
    }

    #[test]
    fn from_path_handles_both_separators() {
        assert_eq!(FileName::from_path("a\\b\\c.txt").unwrap().as_str(), "c.txt");
        assert_eq!(FileName::from_path("/abs/path/c.txt").unwrap().as_str(), "c.txt");
        assert_eq!(FileName::from_path("dir/").unwrap().as_str(), "dir");
        assert_eq!(FileName::from_path("plain").unwrap().as_str(), "plain");
    }

    #[test]
    fn from_path_rejects_unusable_components() {
        for path in ["", "/", "..", "dir/..", "./"] {
            assert!(
                matches!(FileName::from_path(path), Err(MessageError::InvalidArgument { .. })),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn set_destination_rejects_separators() {
        let mut transfer = FileTransfer::new("a.txt", "a.txt").unwrap();

        let err = transfer.set_destination("dir/name.txt").unwrap_err();
        assert!(matches!(err, MessageError::InvalidArgument { .. }));
        assert_eq!(transfer.destination().as_str(), "a.txt");

        assert!(transfer.set_destination("..\\up.txt").is_err());

        transfer.set_destination("b.txt").unwrap();
        assert_eq!(transfer.destination().as_str(), "b.txt");
    }

    #[test]
    fn data_has_three_fields() {
        let transfer = FileTransfer::new("a.txt", "b.txt").unwrap();
        assert_eq!(transfer.data(), ["a.txt".to_string(), "b.txt".to_string(), String::new()]);
    }

    #[test]
    fn load_then_store() {
        let source_dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("notes.txt");
        fs::write(&source, "line one\nline two\n").unwrap();

        let mut transfer =
            FileTransfer::new(source.to_string_lossy(), "saved/copy.txt").unwrap();
        transfer.load().unwrap();
        assert_eq!(transfer.contents(), Some("line one\nline two\n"));

        let written = transfer.store(target_dir.path()).unwrap();
        assert_eq!(written, target_dir.path().join("copy.txt"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "line one\nline two\n");

        // Store is repeatable
        assert_eq!(transfer.store(target_dir.path()).unwrap(), written);
    }

    #[test]
    fn second_load_keeps_first_contents() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "first").unwrap();

        let mut transfer = FileTransfer::new(source.to_string_lossy(), "a.txt").unwrap();
        transfer.load().unwrap();
        fs::write(&source, "second").unwrap();
        transfer.load().unwrap();

        assert_eq!(transfer.contents(), Some("first"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let mut transfer = FileTransfer::new(missing.to_string_lossy(), "missing.txt").unwrap();
        let err = transfer.load().unwrap_err();

        assert!(matches!(err, MessageError::NotFound { .. }));
        assert!(!transfer.is_loaded());
    }

    #[test]
    fn store_without_contents_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let transfer = FileTransfer::new("a.txt", "a.txt").unwrap();

        let err = transfer.store(dir.path()).unwrap_err();
        assert!(matches!(err, MessageError::IoFailure { .. }));
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn store_into_missing_directory_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "data").unwrap();

        let mut transfer = FileTransfer::new(source.to_string_lossy(), "a.txt").unwrap();
        transfer.load().unwrap();

        let err = transfer.store(&dir.path().join("no/such/dir")).unwrap_err();
        assert!(matches!(err, MessageError::IoFailure { .. }));
    }
}
