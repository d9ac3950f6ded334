#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the depth-first filesystem traversal used by `pfind`. The
//! walker starts from a single path and enumerates everything reachable from
//! it: when the start path opens as a directory its contents are streamed in
//! the order the operating system reports them, and subdirectories are
//! descended into as they are encountered; when it does not open as a
//! directory the start path is examined as a single candidate entry instead.
//! Symbolic links are never followed while descending, and every status query
//! inspects the link itself rather than its target.
//!
//! # Design
//!
//! - [`Walker`] implements [`Iterator`] and yields `Result<WalkEntry,
//!   WalkError>` items. Construction is infallible; all I/O happens inside
//!   `next()`, which lets open failures on the start path fall back to the
//!   single-file interpretation.
//! - Traversal keeps an explicit stack of directory frames instead of
//!   recursing natively, so tree depth cannot exhaust the call stack. Child
//!   directories are pushed unopened and opened when reached, which reports
//!   an unreadable subdirectory *after* its own entry has been yielded.
//! - [`join_path`] builds each child path from the containing directory path
//!   and the entry name, deduplicating separators.
//! - [`WalkError`] captures the offending path alongside the underlying
//!   [`std::io::Error`] so callers can surface actionable diagnostics.
//!
//! # Invariants
//!
//! - Every `Err` item is recoverable: the iterator keeps producing the
//!   remaining entries after reporting it. Traversal only ends when the walk
//!   is complete.
//! - The `.` and `..` pseudo-entries are yielded to the caller but never
//!   descended into.
//! - Each directory handle lives exactly as long as its stack frame.
//! - Traversal never panics; unexpected filesystem failures are reported via
//!   [`WalkError`].
//!
//! # Errors
//!
//! [`WalkError`] is produced when a directory cannot be opened, an
//! enumeration step fails, or an entry's status query fails. The offending
//! path is available through [`WalkError::path`] and the operating-system
//! failure through [`WalkError::io_error`].
//!
//! # Examples
//!
//! Walk a small tree and collect the entry names it yields:
//!
//! ```
//! use std::fs;
//! use walk::Walker;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("tree");
//! fs::create_dir(&root)?;
//! fs::write(root.join("note.txt"), b"data")?;
//!
//! let mut names = Vec::new();
//! for item in Walker::new(root.display().to_string()) {
//!     names.push(item?.name().to_string());
//! }
//! names.sort();
//! assert_eq!(names, [".", "..", "note.txt"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod error;
mod path;
mod walker;

pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use path::join_path;
pub use walker::Walker;
