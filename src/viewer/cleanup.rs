use crate::errors::{AppError, AppResult};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Exclusive owner of a downloaded file.
///
/// The file is deleted when this value is dropped, so it is removed on every
/// exit path. Call [`DownloadedFile::remove`] to delete it explicitly and see
/// the outcome.
#[derive(Debug)]
pub struct DownloadedFile {
    path: PathBuf,
    removed: bool,
}

impl DownloadedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file now.
    ///
    /// A file that is already gone is not an error.
    pub fn remove(mut self) -> AppResult<()> {
        self.removed = true;
        remove_if_exists(&self.path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to delete {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl Drop for DownloadedFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_if_exists(&self.path) {
            warn!(
                file_path = %self.path.display(),
                error = %e,
                "Failed to delete downloaded file"
            );
        }
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(file_path = %path.display(), "Deleted downloaded file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(file_path = %path.display(), "Downloaded file already gone");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
