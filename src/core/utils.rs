use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::core::{Error, Result};

/// Lexically normalizes `path`: drops `.` segments, resolves `..` against the preceding
/// segment and removes trailing separators. Never climbs above a root.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            _ => result.push(component),
        }
    }
    result
}

/// Returns the absolute normalized form of `path`.
/// A relative `path` is resolved against the process current working directory.
/// Symbolic links are not followed and the path does not have to exist.
pub fn absolute<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if is_blank(path) {
        return Err(Error::InvalidReference("path is empty".to_string()));
    }
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(normalize(std::env::current_dir()?.join(path)))
}

/// True if `path` is empty or consists of whitespace only.
pub fn is_blank<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().as_os_str().to_string_lossy().trim().is_empty()
}

/// Compares two path segments the way the host filesystem does.
#[cfg(windows)]
pub fn same_component(a: &Component, b: &Component) -> bool {
    let a = a.as_os_str().to_string_lossy().to_lowercase();
    let b = b.as_os_str().to_string_lossy().to_lowercase();
    a == b
}

/// Compares two path segments the way the host filesystem does.
#[cfg(not(windows))]
pub fn same_component(a: &Component, b: &Component) -> bool {
    a == b
}

/// Returns the lexical parent of `path`, or `None` when there is nothing to create
/// (a root or a bare relative name).
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Make directories recursively.
/// Returns vector of created directories, outermost first.
/// Existing directories are left untouched; an existing non-directory on the way is an error.
pub fn mkdir_all<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();

    // Looking for the closest existing ancestor
    let mut missing = Vec::new();
    let mut current = Some(path);
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || std::fs::exists(dir)? {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                return Err(Error::Io(std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    format!("path '{}' exists but is not a directory", dir.display()),
                )));
            }
            break;
        }
        missing.push(dir.to_path_buf());
        current = dir.parent();
    }

    // Create from the closest existing ancestor to the target path
    let mut created = Vec::new();
    for dir in missing.into_iter().rev() {
        match std::fs::create_dir(&dir) {
            Ok(()) => created.push(dir),
            // somebody else was faster
            Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    mod normalize {
        use super::*;

        #[test]
        fn test_normalize_path() {
            assert_eq!(normalize("/a/b/c/"), PathBuf::from("/a/b/c"));
            assert_eq!(normalize("/a/b/./c"), PathBuf::from("/a/b/c"));
            assert_eq!(normalize("/a/b/../c"), PathBuf::from("/a/c"));
            assert_eq!(normalize("/"), PathBuf::from("/"));
            assert_eq!(normalize("/.."), PathBuf::from("/"));
            assert_eq!(normalize(".."), PathBuf::from(""));
            assert_eq!(normalize(""), PathBuf::from(""));
            assert_eq!(normalize("../a"), PathBuf::from("a"));
            assert_eq!(normalize("./a"), PathBuf::from("a"));
        }
    }

    mod absolute {
        use super::*;

        #[test]
        fn test_absolute_keeps_absolute_path() {
            let root = std::env::temp_dir();
            let path = root.join("x").join("..").join("y");
            assert_eq!(absolute(&path).unwrap(), normalize(root.join("y")));
        }

        #[test]
        fn test_absolute_resolves_against_cwd() {
            let cwd = std::env::current_dir().unwrap();
            assert_eq!(absolute("a/./b").unwrap(), normalize(cwd.join("a/b")));
            assert_eq!(absolute(".").unwrap(), normalize(&cwd));
        }

        #[test]
        fn test_absolute_rejects_blank() {
            assert!(matches!(absolute(""), Err(Error::InvalidReference(_))));
            assert!(matches!(absolute("   "), Err(Error::InvalidReference(_))));
        }
    }

    mod mkdir_all {
        use super::*;

        #[test]
        fn test_mkdir_all_nested() {
            let temp_dir = setup_test_env();
            let target = temp_dir.path().join("a/b/c");

            let created = mkdir_all(&target).unwrap();

            assert_eq!(
                created,
                vec![
                    temp_dir.path().join("a"),
                    temp_dir.path().join("a/b"),
                    temp_dir.path().join("a/b/c"),
                ]
            );
            assert!(target.is_dir());
        }

        #[test]
        fn test_mkdir_all_target_exists() {
            let temp_dir = setup_test_env();

            let created = mkdir_all(temp_dir.path()).unwrap();

            assert!(created.is_empty());
        }

        #[test]
        fn test_mkdir_all_file_in_path() {
            let temp_dir = setup_test_env();
            let file = temp_dir.path().join("file.txt");
            std::fs::write(&file, b"content").unwrap();

            assert!(mkdir_all(&file).is_err());
            assert!(mkdir_all(file.join("sub")).is_err());
        }
    }

    // Helper function: Creates a temporary directory for tests
    fn setup_test_env() -> TempDir {
        TempDir::new("utils_test").unwrap()
    }
}
