#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides whether a single filesystem entry should be reported by
//! `pfind`. A [`SearchCriteria`] value holds the optional name pattern and
//! optional file-type filter produced by argument parsing; it is immutable
//! once built and consulted for every entry the traversal yields.
//!
//! # Design
//!
//! - [`NamePattern`] compiles the `-name` value with
//!   [`globset`](https://docs.rs/globset/) and layers the fnmatch-style
//!   leading-period rule on top: a name beginning with a period is only
//!   matched when the pattern itself begins with a literal period. Matching
//!   considers a single name component; wildcards are free to cross `/` so
//!   the start-path-as-file case (where the whole path is the name) behaves
//!   like the single-component case.
//! - [`FileType`] maps the seven `-type` character codes onto exact
//!   file-type checks. A type filter matches only when the entry's type
//!   equals the requested type; symlinks never count as their targets.
//! - [`SearchCriteria::matches`] applies the name rule, then the type rule,
//!   then the pseudo-entry rule, short-circuiting on the first failure.
//!
//! # Invariants
//!
//! - The `.` and `..` pseudo-entries are rejected unless the containing
//!   directory name is itself literally `.` or `..` respectively. The
//!   comparison is textual by design; a start path that merely resolves to
//!   the same directory receives no special treatment.
//! - An unrecognised `-type` code is a configuration error
//!   ([`UnknownTypeCode`]), never a per-entry decision.
//! - A `-name` value is stored verbatim. Patterns globset cannot compile
//!   degrade to literal comparison instead of failing.
//!
//! # Examples
//!
//! ```
//! use filters::{NamePattern, SearchCriteria};
//!
//! let criteria = SearchCriteria::new(Some(NamePattern::new("*.rs")), None);
//! let file_type = std::fs::metadata(".").expect("metadata").file_type();
//!
//! assert!(criteria.matches("src", "main.rs", file_type));
//! assert!(!criteria.matches("src", ".hidden.rs", file_type));
//! assert!(!criteria.matches("src", "main.c", file_type));
//! ```

mod criteria;
mod error;
mod file_type;
mod pattern;

pub use criteria::SearchCriteria;
pub use error::UnknownTypeCode;
pub use file_type::FileType;
pub use pattern::NamePattern;
