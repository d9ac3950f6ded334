use std::fs;

use crate::file_type::FileType;
use crate::pattern::NamePattern;

/// Immutable search criteria applied to every visited entry.
///
/// Built once from the parsed command line and passed by reference into each
/// filter decision for the duration of the walk.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchCriteria {
    name: Option<NamePattern>,
    file_type: Option<FileType>,
}

impl SearchCriteria {
    /// Creates criteria from an optional name pattern and type filter.
    #[must_use]
    pub fn new(name: Option<NamePattern>, file_type: Option<FileType>) -> Self {
        Self { name, file_type }
    }

    /// Returns the active name pattern, if any.
    #[must_use]
    pub fn name(&self) -> Option<&NamePattern> {
        self.name.as_ref()
    }

    /// Returns the active type filter, if any.
    #[must_use]
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    /// Decides whether an entry should be reported.
    ///
    /// `dir_name` is the containing directory path exactly as the traversal
    /// supplied it; for the start path examined as a single file it equals
    /// `entry_name`. Rules apply in order and short-circuit: name pattern,
    /// type filter, then the pseudo-entry rule, which rejects `.` and `..`
    /// unless the containing directory name is literally the same string.
    #[must_use]
    pub fn matches(&self, dir_name: &str, entry_name: &str, file_type: fs::FileType) -> bool {
        if let Some(pattern) = &self.name {
            if !pattern.matches(entry_name) {
                return false;
            }
        }

        if let Some(wanted) = self.file_type {
            if !wanted.matches(file_type) {
                return false;
            }
        }

        if entry_name == ".." && dir_name != ".." {
            return false;
        }

        if entry_name == "." && dir_name != "." {
            return false;
        }

        true
    }
}
