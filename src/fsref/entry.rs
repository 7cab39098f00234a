use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::core::{Result, utils};

/// A reference to a file or a directory on the host filesystem.
///
/// The reference is a plain value: it does not have to exist on disk and
/// constructing one performs no I/O. Paths may be absolute or relative; relative
/// paths are resolved against the current working directory only when an
/// operation needs the absolute form (see [`FsRef::full_path`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FsRef {
    File(PathBuf),
    Directory(PathBuf),
}

impl FsRef {
    pub fn file<P: AsRef<Path>>(path: P) -> FsRef {
        FsRef::File(path.as_ref().to_path_buf())
    }

    pub fn dir<P: AsRef<Path>>(path: P) -> FsRef {
        FsRef::Directory(path.as_ref().to_path_buf())
    }

    /// Returns the path exactly as it was given.
    pub fn path(&self) -> &Path {
        match self {
            FsRef::File(path) | FsRef::Directory(path) => path,
        }
    }

    pub fn into_path_buf(self) -> PathBuf {
        match self {
            FsRef::File(path) | FsRef::Directory(path) => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsRef::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsRef::Directory(_))
    }

    /// Returns the last component of the path, if it is a regular name.
    pub fn name(&self) -> Option<&OsStr> {
        self.path().file_name()
    }

    /// Absolute normalized path (`.` and `..` resolved lexically, trailing separators removed).
    pub fn full_path(&self) -> Result<PathBuf> {
        utils::absolute(self.path())
    }

    /// Returns the directory containing this entry.
    ///
    /// The result keeps the form of the original path where possible, so the parent
    /// of `./folder/file` is `./folder` and the parent of a bare `file` is `.`.
    /// Paths ending in `.` or `..` go through their absolute form.
    /// `None` is returned for a root or an empty path.
    pub fn parent(&self) -> Option<FsRef> {
        let path = self.path();
        match path.components().next_back() {
            Some(Component::Normal(_)) => match utils::parent_dir(path) {
                Some(parent) => Some(FsRef::dir(parent)),
                None => Some(FsRef::dir(Component::CurDir)),
            },
            Some(Component::CurDir) | Some(Component::ParentDir) => {
                self.full_path().ok()?.parent().map(FsRef::dir)
            }
            _ => None,
        }
    }

    /// Checks whether an entry of the matching kind exists on the host filesystem.
    pub fn exists(&self) -> bool {
        match self {
            FsRef::File(path) => path.is_file(),
            FsRef::Directory(path) => path.is_dir(),
        }
    }
}

impl fmt::Display for FsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert!(FsRef::file("/a/b.txt").is_file());
        assert!(!FsRef::file("/a/b.txt").is_dir());
        assert!(FsRef::dir("/a/b").is_dir());
        assert!(!FsRef::dir("/a/b").is_file());
    }

    #[test]
    fn test_name() {
        assert_eq!(FsRef::file("/a/b.txt").name(), Some(OsStr::new("b.txt")));
        assert_eq!(FsRef::dir("./folder").name(), Some(OsStr::new("folder")));
        assert_eq!(FsRef::dir("/").name(), None);
    }

    #[test]
    fn test_parent() {
        assert_eq!(FsRef::file("/a/b/c.txt").parent(), Some(FsRef::dir("/a/b")));
        assert_eq!(FsRef::file("./folder/file").parent(), Some(FsRef::dir("./folder")));
        assert_eq!(FsRef::file("file").parent(), Some(FsRef::dir(".")));
        assert_eq!(FsRef::dir("/").parent(), None);
        assert_eq!(FsRef::file("").parent(), None);
    }

    #[test]
    fn test_parent_of_dot() {
        let cwd = std::env::current_dir().unwrap();
        let expected = utils::normalize(&cwd).parent().map(FsRef::dir);
        assert_eq!(FsRef::dir(".").parent(), expected);
    }

    #[test]
    fn test_full_path() {
        assert_eq!(
            FsRef::dir("/a/b/../c/").full_path().unwrap(),
            utils::absolute("/a/c").unwrap()
        );
        assert!(FsRef::file("").full_path().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FsRef::file("/a/b.txt").to_string(),
            Path::new("/a/b.txt").display().to_string()
        );
    }

    #[test]
    fn test_into_path_buf() {
        assert_eq!(FsRef::file("./a/b.txt").into_path_buf(), PathBuf::from("./a/b.txt"));
        assert_eq!(FsRef::dir("/a/b").into_path_buf(), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_exists() {
        let tmp = std::env::temp_dir();
        assert!(FsRef::dir(&tmp).exists());
        assert!(!FsRef::file(&tmp).exists());
    }
}
