/// Location of a written record, as returned by `RecordFile::write`.
///
/// The file keeps no directory of its own; whatever structure sits above it
/// has to remember `offset` and `csize` to read the record back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordPtr {
    /// Start of the record. Always a multiple of `ALIGN`.
    pub offset: u64,

    /// Logical payload length.
    pub size: u64,

    /// On-disk length. Equal to `size` for raw records; for compressed
    /// records it is the snappy stream length and always exceeds `ALIGN`.
    pub csize: u64,
}

impl RecordPtr {
    /// Whether the record went through the compressed path.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.csize > crate::storage_engine::constants::ALIGN
    }

    /// End of the on-disk span (exclusive).
    #[inline]
    pub fn end(&self) -> u64 {
        self.offset + self.csize
    }
}
