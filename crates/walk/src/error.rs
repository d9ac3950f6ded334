use std::error::Error;
use std::fmt;
use std::io;

/// Error describing a single recoverable traversal failure.
///
/// Every error names the path it concerns; yielding one does not end the
/// walk, so callers report it and keep consuming the iterator.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn open_dir(path: String, source: io::Error) -> Self {
        Self::new(WalkErrorKind::OpenDir { path, source })
    }

    pub(crate) fn metadata(path: String, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    pub(crate) fn read_dir_entry(path: String, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    /// Returns the specific failure behind the error.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// Diagnostics always name the offending path, so callers can forward
    /// the returned path into their own messages without pattern matching on
    /// [`WalkErrorKind`].
    #[must_use]
    pub fn path(&self) -> &str {
        self.kind.path()
    }

    /// Returns the operating-system failure that caused the error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match &self.kind {
            WalkErrorKind::OpenDir { source, .. }
            | WalkErrorKind::Metadata { source, .. }
            | WalkErrorKind::ReadDirEntry { source, .. } => source,
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::OpenDir { path, source } => {
                write!(f, "failed to open directory '{path}': {source}")
            }
            WalkErrorKind::Metadata { path, source } => {
                write!(f, "failed to inspect '{path}': {source}")
            }
            WalkErrorKind::ReadDirEntry { path, source } => {
                write!(f, "failed to read entry in '{path}': {source}")
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.io_error())
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// Failed to open a directory for enumeration.
    OpenDir {
        /// Directory that could not be opened.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to query an entry's status.
    Metadata {
        /// Path whose status could not be queried.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during enumeration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            WalkErrorKind::OpenDir { path, .. }
            | WalkErrorKind::Metadata { path, .. }
            | WalkErrorKind::ReadDirEntry { path, .. } => path,
        }
    }
}
