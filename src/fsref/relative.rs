//! Relative paths between two filesystem references.
//!
//! The computation is purely lexical: nothing is read from disk except the current
//! working directory, which is needed to absolutize relative references.

use std::path::{Component, MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

use tracing::trace;

use crate::FsRef;
use crate::core::{Error, Result, utils};

/// Finds the relative path from one file or directory to another.
///
/// `from` is the starting point: a directory stands for itself, a file stands for
/// its parent directory. The returned path ends with the name of `to` when `to`
/// is a file, and with exactly one separator when `to` is a directory.
///
/// Paths that share no root (different drives on Windows) are not an error: the
/// absolute directory of `to` is used instead of a relative one.
///
/// # Examples
/// ```
/// use fsref_kit::{FsRef, relative_path};
///
/// let from = FsRef::file("/a/b/f/c.txt");
/// let to = FsRef::file("/a/b/d/e.txt");
/// # #[cfg(unix)]
/// assert_eq!(relative_path(&from, &to).unwrap(), "../d/e.txt");
///
/// let same = FsRef::dir("/a/b/c");
/// # #[cfg(unix)]
/// assert_eq!(relative_path(&same, &same).unwrap(), "./");
/// ```
///
/// # Errors
/// `Error::InvalidReference` if either path is empty or whitespace, if a file
/// reference has no parent directory, or if the result is not valid unicode.
pub fn relative_path(from: &FsRef, to: &FsRef) -> Result<String> {
    let from_anchor = anchor(from)?;
    let to_anchor = anchor(to)?;
    trace!(
        from = %from_anchor.display(),
        to = %to_anchor.display(),
        "computing relative path"
    );

    let relative = relative_dir(&from_anchor, &to_anchor);

    let result = match to {
        FsRef::File(_) => {
            let full = to.full_path()?;
            let name = full.file_name().ok_or_else(|| {
                Error::InvalidReference(format!("{} has no file name", to.path().display()))
            })?;
            relative.join(name).into_os_string()
        }
        FsRef::Directory(_) => {
            let mut dir = relative.into_os_string();
            if !dir.to_string_lossy().ends_with(MAIN_SEPARATOR) {
                dir.push(MAIN_SEPARATOR_STR);
            }
            dir
        }
    };

    result
        .into_string()
        .map_err(|s| Error::InvalidReference(format!("{:?} is not valid unicode", s)))
}

impl FsRef {
    /// Same as [`relative_path`] with `self` as the starting point.
    pub fn relative_path(&self, to: &FsRef) -> Result<String> {
        relative_path(self, to)
    }
}

/// Directory the relative path is computed from: the parent for a file, the entry
/// itself for a directory. Always absolute and normalized.
pub(crate) fn anchor(reference: &FsRef) -> Result<PathBuf> {
    let full = reference.full_path()?;
    match reference {
        FsRef::File(_) => full.parent().map(Path::to_path_buf).ok_or_else(|| {
            Error::InvalidReference(format!(
                "cannot identify parent directory of {}",
                reference.path().display()
            ))
        }),
        FsRef::Directory(_) => Ok(full),
    }
}

/// Lexical relative path between two absolute normalized directories.
fn relative_dir(from: &Path, to: &Path) -> PathBuf {
    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| utils::same_component(a, b))
        .count();

    if common == 0 {
        // different roots, nothing to be relative to
        return to.to_path_buf();
    }
    if common == from_parts.len() && common == to_parts.len() {
        return PathBuf::from(Component::CurDir.as_os_str());
    }

    let mut relative = PathBuf::new();
    for _ in common..from_parts.len() {
        relative.push(Component::ParentDir);
    }
    for part in &to_parts[common..] {
        relative.push(part);
    }
    relative
}
