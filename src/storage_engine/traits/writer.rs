use crate::storage_engine::RecordPtr;
use crate::storage_engine::error::Result;

pub trait RecordWriter {
    /// Appends zero bytes until the file size is a multiple of `ALIGN`.
    ///
    /// # Returns:
    /// - `Ok(padding)`: Number of zero bytes written (`0..ALIGN`).
    /// - `Err(FileWrite)`: The padding could not be written in full; the
    ///   tracked file size is left unchanged.
    fn pad(&mut self) -> Result<u64>;

    /// Pads to alignment, then appends `payload` as one record.
    ///
    /// # Returns:
    /// - `Ok(Some(RecordPtr))`: Where the record landed and its on-disk size.
    /// - `Ok(None)`: `payload` was empty; only padding was written.
    /// - `Err(FileWrite)`: Padding or payload write failed.
    /// - `Err(Compression)` / `Err(Allocation)`: Codec or buffer failure.
    ///
    /// # Notes:
    /// - Payloads up to `ALIGN` bytes are stored raw (`csize == size`).
    /// - Larger payloads are snappy-compressed; their `csize` always exceeds
    ///   `ALIGN`, which is how reads tell the two apart.
    /// - After a failed payload write the file may hold a partial tail that
    ///   the tracked size does not cover. Recovering from that is left to
    ///   the caller.
    fn write(&mut self, payload: &[u8]) -> Result<Option<RecordPtr>>;
}
