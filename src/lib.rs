//! # bplus-writer
//!
//! Record-level storage for an on-disk B+-tree.
//!
//! A [`RecordFile`] owns one exclusively locked, append-mostly file. Records
//! are padded to start on [`ALIGN`](storage_engine::constants::ALIGN)
//! boundaries, stored raw when small and snappy-compressed when large, and
//! addressed only by the `(offset, csize)` pairs that writes hand back.
//! [`RecordFile::find`] scans fixed-width slots from the end of the file
//! backwards so index code can locate records by predicate.
//!
//! ```text
//! offset 0        ALIGN           2*ALIGN
//! ├───────────────┼───────────────┼──────────────────────────┄
//! │ rec │ 0 pad   │ compressed record (csize > ALIGN)  │ 0 pad
//! └───────────────┴───────────────┴──────────────────────────┄
//! ```
//!
//! The codec and padding helpers stay internal; records go in and out only
//! through [`RecordFile`].
//!
//! ```compile_fail
//! use bplus_writer::storage_engine::padding::zero_padding;
//! ```
//!
//! ```compile_fail
//! let _ = bplus_writer::storage_engine::codec::compress(b"payload");
//! ```

pub mod storage_engine;
pub use storage_engine::*;

pub mod utils;
