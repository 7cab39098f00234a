//! Asynchronous counterparts of the content helpers, built on `tokio::fs`.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncRead, AsyncWriteExt};
use tracing::debug;

use crate::FsRef;
use crate::core::{Result, utils};

impl FsRef {
    /// Async version of [`FsRef::create_file_with_content`].
    pub async fn create_file_with_content_async<R: AsyncRead + Unpin + ?Sized>(
        &self,
        name: &str,
        reader: &mut R,
    ) -> Result<FsRef> {
        self.child_file(name)?.write_content_async(reader).await
    }

    /// Async version of [`FsRef::create_file_with_text`].
    pub async fn create_file_with_text_async(&self, name: &str, text: &str) -> Result<FsRef> {
        self.child_file(name)?.write_text_async(text).await
    }

    /// Async version of [`FsRef::write_content`].
    /// The reader is borrowed and stays usable after the call.
    pub async fn write_content_async<R: AsyncRead + Unpin + ?Sized>(
        &self,
        reader: &mut R,
    ) -> Result<FsRef> {
        let path = self.expect_file()?;
        if let Some(parent) = utils::parent_dir(path) {
            mkdir_all(parent).await?;
        }

        let mut fd = tokio::fs::File::create(path).await?;
        let written = tokio::io::copy(reader, &mut fd).await?;
        fd.flush().await?;

        debug!(path = %path.display(), bytes = written, "wrote file");
        Ok(self.clone())
    }

    /// Async version of [`FsRef::write_text`].
    pub async fn write_text_async(&self, text: &str) -> Result<FsRef> {
        self.write_content_async(&mut text.as_bytes()).await
    }
}

/// Async `mkdir -p` that reports every directory it had to create.
async fn mkdir_all(path: &Path) -> Result<()> {
    // Looking for the closest existing ancestor
    let mut missing: Vec<PathBuf> = Vec::new();
    let mut current = Some(path);
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || tokio::fs::try_exists(dir).await? {
            break;
        }
        missing.push(dir.to_path_buf());
        current = dir.parent();
    }

    tokio::fs::create_dir_all(path).await?;
    for dir in missing.iter().rev() {
        debug!(path = %dir.display(), "created directory");
    }
    Ok(())
}
