use std::ffi::OsString;
use std::fs;
use std::io;

use tracing::{debug, trace};

use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::path::join_path;

/// Depth-first iterator over the entries reachable from a start path.
///
/// Construction never touches the filesystem; the first call to `next()`
/// attempts to enumerate the start path as a directory and falls back to
/// examining it as a single file entry when that fails. Directory contents
/// are yielded in the order the operating system reports them, with a
/// subdirectory's contents produced immediately after the subdirectory's own
/// entry.
pub struct Walker {
    start: String,
    started: bool,
    finished: bool,
    stack: Vec<DirFrame>,
}

impl Walker {
    /// Creates a walker rooted at `start`.
    pub fn new<S: Into<String>>(start: S) -> Self {
        Self {
            start: start.into(),
            started: false,
            finished: false,
            stack: Vec::new(),
        }
    }

    /// Returns the start path the walker was created with.
    #[must_use]
    pub fn start_path(&self) -> &str {
        &self.start
    }

    /// Examines the start path as a single file after it failed to open as a
    /// directory.
    ///
    /// A failed status query wins over the original open failure; a start
    /// path that turns out to be a directory after all reports the open
    /// failure itself.
    fn start_as_file(&self, open_error: io::Error) -> Result<WalkEntry, WalkError> {
        let metadata = match fs::symlink_metadata(&self.start) {
            Ok(metadata) => metadata,
            Err(error) => return Err(WalkError::metadata(self.start.clone(), error)),
        };

        if metadata.is_dir() {
            return Err(WalkError::open_dir(self.start.clone(), open_error));
        }

        Ok(WalkEntry {
            path: self.start.clone(),
            parent: self.start.clone(),
            name: self.start.clone(),
            metadata,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            match fs::read_dir(&self.start) {
                Ok(reader) => {
                    debug!(target: "pfind::walk", path = %self.start, "entering directory");
                    self.stack.push(DirFrame::opened(self.start.clone(), reader));
                }
                Err(open_error) => {
                    self.finished = true;
                    return Some(self.start_as_file(open_error));
                }
            }
        }

        loop {
            let step = match self.stack.last_mut() {
                Some(frame) => frame.next_entry(),
                None => {
                    self.finished = true;
                    return None;
                }
            };

            match step {
                FrameStep::OpenFailed(error) => {
                    if let Some(frame) = self.stack.pop() {
                        return Some(Err(WalkError::open_dir(frame.path, error)));
                    }
                }
                FrameStep::Exhausted => {
                    self.stack.pop();
                }
                FrameStep::EntryError(error) => {
                    if let Some(frame) = self.stack.last() {
                        return Some(Err(WalkError::read_dir_entry(frame.path.clone(), error)));
                    }
                }
                FrameStep::Entry(raw_name) => {
                    let parent = match self.stack.last() {
                        Some(frame) => frame.path.clone(),
                        None => continue,
                    };
                    let name = raw_name.to_string_lossy().into_owned();
                    let path = join_path(&parent, &name);

                    let metadata = match fs::symlink_metadata(&path) {
                        Ok(metadata) => metadata,
                        Err(error) => return Some(Err(WalkError::metadata(path, error))),
                    };

                    // Descend into real subdirectories only; the pseudo
                    // entries would re-enter the directory being walked.
                    if metadata.is_dir() && name != "." && name != ".." {
                        self.stack.push(DirFrame::pending(path.clone()));
                    }

                    trace!(target: "pfind::walk", entry = %path, "visiting entry");
                    return Some(Ok(WalkEntry {
                        path,
                        parent,
                        name,
                        metadata,
                    }));
                }
            }
        }
    }
}

/// The self-referential names every directory enumeration contains.
///
/// [`fs::read_dir`] omits the current- and parent-directory entries, so the
/// walker restores them per directory to keep them candidate entries.
const PSEUDO_ENTRIES: [&str; 2] = [".", ".."];

/// One directory being enumerated, with its handle opened on first use.
struct DirFrame {
    path: String,
    pseudo_index: usize,
    reader: Option<fs::ReadDir>,
}

impl DirFrame {
    fn opened(path: String, reader: fs::ReadDir) -> Self {
        Self {
            path,
            pseudo_index: 0,
            reader: Some(reader),
        }
    }

    fn pending(path: String) -> Self {
        Self {
            path,
            pseudo_index: 0,
            reader: None,
        }
    }

    fn next_entry(&mut self) -> FrameStep {
        if self.reader.is_none() {
            match fs::read_dir(&self.path) {
                Ok(reader) => {
                    debug!(target: "pfind::walk", path = %self.path, "entering directory");
                    self.reader = Some(reader);
                }
                Err(error) => return FrameStep::OpenFailed(error),
            }
        }

        if let Some(name) = PSEUDO_ENTRIES.get(self.pseudo_index) {
            self.pseudo_index += 1;
            return FrameStep::Entry(OsString::from(*name));
        }

        match self.reader.as_mut().and_then(|reader| reader.next()) {
            None => FrameStep::Exhausted,
            Some(Err(error)) => FrameStep::EntryError(error),
            Some(Ok(entry)) => FrameStep::Entry(entry.file_name()),
        }
    }
}

/// Outcome of pulling one step from the frame on top of the stack.
enum FrameStep {
    OpenFailed(io::Error),
    Exhausted,
    EntryError(io::Error),
    Entry(OsString),
}
