/// Alignment unit, in bytes, for the start of every record.
///
/// Also the raw/compressed threshold: payloads of at most `ALIGN` bytes are
/// stored verbatim, larger payloads go through snappy. Max pre-pad per record
/// is `ALIGN - 1` bytes.
pub const ALIGN: u64 = 1024;

/// `ALIGN` as a buffer length.
pub const ALIGN_USIZE: usize = ALIGN as usize;

// A zero alignment would divide by zero in the padding math, and the codec
// stores an `ALIGN`-byte literal whose length must fit in two bytes.
const _: () = assert!(ALIGN > 0 && ALIGN <= 1 << 16);

/// Stream copy chunk size.
pub const WRITE_STREAM_BUFFER_SIZE: usize = 64 * 1024; // 64 KB
