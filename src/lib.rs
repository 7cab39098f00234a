//! File and directory references with a handful of convenience operations.
//!
//! ### Overview
//!
//! `fsref-kit` works with [`FsRef`], a value that names either a file or a directory.
//! On top of it the crate provides:
//! - **Relative paths**: [`relative_path`] finds the path from one file or directory to
//!   another, the way a shell sitting in the starting directory would spell it
//!   (`./e.txt`, `../d/`, ...). Pure path arithmetic, no disk access.
//! - **Creation**: `mkdir -p` style helpers that create files and subdirectories together
//!   with any missing parents.
//! - **Content**: write bytes from any reader, or text, into a file. Readers are borrowed,
//!   so the caller keeps ownership of its streams. With the `async` feature (on by default)
//!   every content helper has a `tokio` counterpart.
//!
//! ### Example
//! ```
//! use fsref_kit::{FsRef, builders};
//!
//! let root = builders::create_temp_dir().unwrap();
//! let docs = root.create_subdir("docs").unwrap();
//! let note = docs.create_file_with_text("note.txt", "Hello").unwrap();
//!
//! # #[cfg(unix)]
//! assert_eq!(root.relative_path(&note).unwrap(), "docs/note.txt");
//! # #[cfg(unix)]
//! assert_eq!(note.relative_path(&root).unwrap(), "../");
//!
//! std::fs::remove_dir_all(root.path()).unwrap();
//! ```

mod core;
mod fsref;

pub mod builders;

pub use crate::core::{Error, Result};
pub use fsref::{FsRef, relative_path};
