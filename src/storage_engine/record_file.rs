use crate::storage_engine::buffer;
use crate::storage_engine::codec;
use crate::storage_engine::constants::ALIGN;
use crate::storage_engine::error::{RecordFileError, Result};
use crate::storage_engine::file_lock::FileLock;
use crate::storage_engine::padding::{debug_assert_aligned_offset, padding_for, zero_padding};
use crate::storage_engine::slot_search::{FindOutcome, FnSearch, Slot, SlotSearch};
use crate::storage_engine::traits::{RecordReader, RecordWriter};
use crate::storage_engine::RecordPtr;
use crate::utils::verify_file_existence;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Append-mostly record file.
///
/// Owns one locked file and the belief about where valid data ends
/// (`filesize`). Every record starts on an `ALIGN` boundary; there is no
/// header, index or checksum on disk, so records are addressed purely by the
/// `(offset, csize)` pairs handed out by [`RecordWriter::write`].
///
/// # Concurrency:
/// - All operations take `&mut self` and block on file I/O.
/// - One handle per file. The exclusive lock taken at open keeps other
///   processes out; callers must not share a path between handles in the
///   same process.
pub struct RecordFile {
    lock: FileLock,
    filesize: u64,
    path: PathBuf,
}

impl std::fmt::Debug for RecordFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFile")
            .field("path", &self.path)
            .field("filesize", &self.filesize)
            .finish()
    }
}

impl RecordFile {
    /// Opens an **existing** or **new** record file.
    ///
    /// This function:
    /// 1. **Opens the file** in read/write mode (creating it if necessary).
    /// 2. **Locks it** exclusively, failing instead of waiting if another
    ///    holder has it.
    /// 3. **Seeks to the end** to learn the initial `filesize`.
    ///
    /// # Returns:
    /// - `Ok(RecordFile)`: A handle positioned at end-of-file.
    /// - `Err(RecordFileError::File)`: If open, lock or seek fails.
    pub fn open(path: &Path) -> Result<Self> {
        // Note: `append` is not used here; Windows can reject it together with
        // read access. Every write seeks to the end instead.
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| RecordFileError::file(path, e))?;

        let mut lock = FileLock::acquire(file, path)?;

        let filesize = lock
            .file_mut()
            .seek(SeekFrom::End(0))
            .map_err(|e| RecordFileError::file(path, e))?;

        debug!("Opened record file {} ({} bytes).", path.display(), filesize);

        Ok(Self {
            lock,
            filesize,
            path: path.to_path_buf(),
        })
    }

    /// Opens an **existing** record file, failing if it is missing or is not
    /// a regular file.
    pub fn open_existing(path: &Path) -> Result<Self> {
        verify_file_existence(path).map_err(|e| RecordFileError::file(path, e))?;
        Self::open(path)
    }

    /// Flushes the file, releases the lock and closes it.
    ///
    /// Consumes the handle, so it cannot be used afterwards. Pending write-back
    /// errors surface here through `sync_all`; the final OS `close` happens when
    /// the file is dropped and its result is not observable. Dropping a handle
    /// without calling `close` also releases the lock, but failures are then
    /// only logged.
    ///
    /// # Returns:
    /// - `Err(RecordFileError::File)`: If the sync or the unlock fails. The
    ///   lock is still released on drop in that case.
    pub fn close(self) -> Result<()> {
        let Self {
            lock,
            filesize,
            path,
        } = self;

        lock.file()
            .sync_all()
            .map_err(|e| RecordFileError::file(&path, e))?;
        lock.release(&path)?;
        debug!("Closed record file {} ({} bytes).", path.display(), filesize);

        Ok(())
    }

    /// Flushes file data and metadata to the device.
    pub fn sync(&mut self) -> Result<()> {
        self.lock
            .file()
            .sync_all()
            .map_err(|e| RecordFileError::file(&self.path, e))
    }

    /// Logical end of valid data, as tracked by this handle.
    ///
    /// Never larger than the physical file length. It can be smaller after a
    /// failed write left a partial tail behind.
    #[inline]
    pub fn filesize(&self) -> u64 {
        self.filesize
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scans fixed-width slots from end-of-file back to offset 0.
    ///
    /// The file is padded to alignment first, then slots of `size` bytes are
    /// read at `filesize - size`, `filesize - 2 * size`, ... while a whole slot
    /// still fits. The first slot `search` accepts is returned, so the most
    /// recently written match wins. If none matches, `search.on_miss` runs
    /// exactly once and its value is returned.
    ///
    /// # Parameters:
    /// - `size`: Slot width, on disk. Intended for raw slots (`size <= ALIGN`).
    /// - `search`: Match and miss strategy; see [`SlotSearch`].
    ///
    /// # Returns:
    /// - `Ok(FindOutcome::Matched(slot))` or `Ok(FindOutcome::Missed(value))`.
    /// - `Err(_)`: The padding write or any slot read failed. A failed read
    ///   aborts the scan; the miss handler is not called.
    ///
    /// # Notes:
    /// - Worst case is linear in the file size.
    /// - A zero `size` has no slots to scan and goes straight to the miss
    ///   handler with `None`.
    pub fn find<S: SlotSearch>(
        &mut self,
        size: u64,
        mut search: S,
    ) -> Result<FindOutcome<S::Output>> {
        self.pad()?;

        let mut offset = self.filesize;
        let mut last = None;

        while size > 0 && offset >= size {
            let slot_offset = offset - size;
            let bytes = self.read(slot_offset, size)?;
            let slot = Slot {
                offset: slot_offset,
                bytes,
            };

            if search.matches(self, &slot) {
                trace!(offset = slot_offset, size, "slot matched");
                return Ok(FindOutcome::Matched(slot));
            }

            last = Some(slot);
            offset = slot_offset;
        }

        trace!(size, filesize = self.filesize, "slot scan exhausted");
        search.on_miss(self, last).map(FindOutcome::Missed)
    }

    /// Closure form of [`RecordFile::find`].
    pub fn find_with<P, M, T>(
        &mut self,
        size: u64,
        predicate: P,
        miss: M,
    ) -> Result<FindOutcome<T>>
    where
        P: FnMut(&Slot) -> bool,
        M: FnOnce(&mut RecordFile, Option<Slot>) -> Result<T>,
    {
        self.find(size, FnSearch::new(predicate, miss))
    }

    /// Appends `bytes` at the physical end of the file.
    ///
    /// `write_all` turns a short write into an error, so success means every
    /// byte landed.
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let file = self.lock.file_mut();
        file.seek(SeekFrom::End(0))
            .map_err(RecordFileError::FileWrite)?;
        file.write_all(bytes).map_err(RecordFileError::FileWrite)
    }
}

impl RecordWriter for RecordFile {
    fn pad(&mut self) -> Result<u64> {
        let padding = padding_for(self.filesize);
        if padding == 0 {
            return Ok(0);
        }

        self.append(zero_padding(padding))?;
        self.filesize += padding;

        trace!(padding, filesize = self.filesize, "padded to alignment");
        Ok(padding)
    }

    fn write(&mut self, payload: &[u8]) -> Result<Option<RecordPtr>> {
        self.pad()?;

        if payload.is_empty() {
            return Ok(None);
        }

        let offset = self.filesize;
        debug_assert_aligned_offset(offset);

        let size = payload.len() as u64;
        let csize = if size <= ALIGN {
            self.append(payload)?;
            size
        } else {
            let compressed = codec::compress(payload)?;
            self.append(&compressed)?;
            compressed.len() as u64
        };

        self.filesize += csize;

        trace!(offset, size, csize, "record written");
        Ok(Some(RecordPtr {
            offset,
            size,
            csize,
        }))
    }
}

impl RecordReader for RecordFile {
    fn read(&mut self, offset: u64, size: u64) -> Result<Vec<u8>> {
        let in_bounds = offset
            .checked_add(size)
            .is_some_and(|end| end <= self.filesize);
        if !in_bounds {
            return Err(RecordFileError::OutOfBounds {
                offset,
                size,
                filesize: self.filesize,
            });
        }

        if size == 0 {
            return Ok(Vec::new());
        }

        let mut raw = buffer::zeroed(size)?;
        let file = self.lock.file_mut();
        file.seek(SeekFrom::Start(offset))
            .map_err(RecordFileError::FileRead)?;
        file.read_exact(&mut raw)
            .map_err(RecordFileError::FileRead)?;

        trace!(offset, size, "record read");

        // No compression for small records
        if size <= ALIGN {
            return Ok(raw);
        }

        codec::decompress(&raw)
    }
}
