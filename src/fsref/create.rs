//! Creation helpers: files, subdirectories and file content.
//!
//! Every helper creates missing parent directories first (like `mkdir -p`) and
//! overwrites an existing file. Readers passed in are only borrowed: they are
//! never closed and stay usable after the call.

use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::FsRef;
use crate::core::{Error, Result, utils};

impl FsRef {
    /// Returns a reference to the file `name` inside this directory.
    /// Neither the directory nor the file have to exist.
    ///
    /// Error returns if `self` is not a directory or `name` is empty or whitespace.
    pub fn child_file(&self, name: &str) -> Result<FsRef> {
        let dir = self.expect_dir()?;
        if name.trim().is_empty() {
            return Err(Error::InvalidReference("file name must have a value".to_string()));
        }
        Ok(FsRef::File(dir.join(name)))
    }

    /// Returns a reference to the subdirectory `name`. Does not create it.
    pub fn child_dir(&self, name: &str) -> Result<FsRef> {
        let dir = self.expect_dir()?;
        if name.trim().is_empty() {
            return Err(Error::InvalidReference(
                "directory name must have a value".to_string(),
            ));
        }
        Ok(FsRef::Directory(dir.join(name)))
    }

    /// Creates an empty file `name` in this directory.
    /// The directory is created recursively if it does not exist.
    /// An existing file is truncated.
    pub fn create_file(&self, name: &str) -> Result<FsRef> {
        let file = self.child_file(name)?;
        mkdir_all(self.path())?;
        std::fs::File::create(file.path())?;
        debug!(path = %file, "created file");
        Ok(file)
    }

    /// Creates the subdirectory `name` and all missing parents.
    /// If the directory already exists, nothing happens and its content is preserved.
    pub fn create_subdir(&self, name: &str) -> Result<FsRef> {
        let subdir = self.child_dir(name)?;
        mkdir_all(subdir.path())?;
        Ok(subdir)
    }

    /// Creates the file `name` in this directory filled with everything `reader` yields.
    /// See [`FsRef::write_content`].
    pub fn create_file_with_content<R: Read + ?Sized>(
        &self,
        name: &str,
        reader: &mut R,
    ) -> Result<FsRef> {
        self.child_file(name)?.write_content(reader)
    }

    /// Creates the file `name` in this directory containing `text`.
    pub fn create_file_with_text(&self, name: &str, text: &str) -> Result<FsRef> {
        self.child_file(name)?.write_text(text)
    }

    /// Creates (or truncates) this file and copies `reader` into it.
    ///
    /// Missing parent directories are created. The reader is consumed up to EOF but
    /// is not dropped, so the caller can still seek or reuse it.
    pub fn write_content<R: Read + ?Sized>(&self, reader: &mut R) -> Result<FsRef> {
        let path = self.expect_file()?;
        if let Some(parent) = utils::parent_dir(path) {
            mkdir_all(parent)?;
        }

        let mut fd = std::fs::File::create(path)?;
        let written = std::io::copy(reader, &mut fd)?;
        fd.flush()?;

        debug!(path = %path.display(), bytes = written, "wrote file");
        Ok(self.clone())
    }

    /// Creates (or truncates) this file and writes `text` into it.
    pub fn write_text(&self, text: &str) -> Result<FsRef> {
        self.write_content(&mut text.as_bytes())
    }

    pub(crate) fn expect_dir(&self) -> Result<&Path> {
        match self {
            FsRef::Directory(path) => Ok(path),
            FsRef::File(path) => Err(Error::InvalidReference(format!(
                "{} is not a directory reference",
                path.display()
            ))),
        }
    }

    pub(crate) fn expect_file(&self) -> Result<&Path> {
        match self {
            FsRef::File(path) => Ok(path),
            FsRef::Directory(path) => Err(Error::InvalidReference(format!(
                "{} is not a file reference",
                path.display()
            ))),
        }
    }
}

fn mkdir_all(path: &Path) -> Result<()> {
    for dir in utils::mkdir_all(path)? {
        debug!(path = %dir.display(), "created directory");
    }
    Ok(())
}
