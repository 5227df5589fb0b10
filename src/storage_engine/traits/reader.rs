use crate::storage_engine::RecordPtr;
use crate::storage_engine::error::Result;

pub trait RecordReader {
    /// Reads the record stored at `offset`.
    ///
    /// # Parameters:
    /// - `offset`: A start offset previously returned by a write.
    /// - `size`: The **on-disk** size of the record (`csize`).
    ///
    /// # Returns:
    /// - `Ok(Vec<u8>)`: The original payload; its length is the logical size.
    ///   Sizes up to `ALIGN` come back verbatim, larger ones are decompressed.
    /// - `Err(OutOfBounds)`: `offset + size` exceeds the tracked file size
    ///   (overflow included). No I/O is attempted.
    /// - `Err(FileRead)`: Fewer than `size` bytes could be read.
    /// - `Err(Allocation)` / `Err(Decompression)`: Buffer or codec failure.
    ///
    /// # Notes:
    /// - A zero `size` returns an empty vector without touching the file.
    /// - Sizes are trusted: reading a span that was not written as one record
    ///   yields whatever bytes are there, or a decompression error.
    fn read(&mut self, offset: u64, size: u64) -> Result<Vec<u8>>;

    /// Reads the record described by `ptr` (`ptr.offset`, `ptr.csize`).
    fn read_ptr(&mut self, ptr: &RecordPtr) -> Result<Vec<u8>> {
        self.read(ptr.offset, ptr.csize)
    }
}
