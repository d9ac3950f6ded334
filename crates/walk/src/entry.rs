use std::fs;

/// A single filesystem entry produced by the walker.
///
/// The entry keeps the textual path that was built for it, the containing
/// directory path exactly as the walker supplied it, and the metadata
/// captured by a non-dereferencing status query. When the start path is
/// examined as a single file, `parent` and `name` both hold the start path
/// itself.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) path: String,
    pub(crate) parent: String,
    pub(crate) name: String,
    pub(crate) metadata: fs::Metadata,
}

impl WalkEntry {
    /// Returns the full path built for the entry.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the path of the directory that contained the entry.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the entry's name as reported by the enumeration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provides access to the [`fs::Metadata`] captured for the entry.
    ///
    /// The metadata comes from [`fs::symlink_metadata`], so a symbolic link
    /// describes itself rather than its target.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Returns the entry's file type.
    #[must_use]
    pub fn file_type(&self) -> fs::FileType {
        self.metadata.file_type()
    }
}
