use fs2::FileExt;
use std::fs::File;
use std::path::Path;
use tracing::warn;

use crate::storage_engine::error::{RecordFileError, Result};

/// Exclusive advisory lock over an open file, held for the guard's lifetime.
///
/// The lock is advisory and per-process: it keeps other processes that also
/// lock the file out, but two guards inside one process are not prevented on
/// every platform. Callers must not open the same path twice in-process.
///
/// Release happens either explicitly through [`FileLock::release`], which
/// reports failures, or on drop, where failures are only logged.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    released: bool,
}

impl FileLock {
    /// Takes the lock without blocking.
    ///
    /// # Returns:
    /// - `Ok(FileLock)` owning `file`.
    /// - `Err(RecordFileError::File)` if another holder has the lock
    ///   (`WouldBlock`) or the platform call fails.
    pub fn acquire(file: File, path: &Path) -> Result<Self> {
        file.try_lock_exclusive()
            .map_err(|e| RecordFileError::file(path, e))?;

        Ok(Self {
            file,
            released: false,
        })
    }

    #[inline]
    pub fn file(&self) -> &File {
        &self.file
    }

    #[inline]
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Unlocks and closes the file.
    pub fn release(mut self, path: &Path) -> Result<()> {
        self.released = true;
        FileExt::unlock(&self.file).map_err(|e| RecordFileError::file(path, e))
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release file lock on drop: {}", e);
        }
    }
}
