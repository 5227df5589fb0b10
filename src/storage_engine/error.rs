//! Error types for record file operations.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `RecordFileError`
pub type Result<T> = std::result::Result<T, RecordFileError>;

/// Unified error type for `RecordFile` operations.
///
/// Every failure is surfaced verbatim; nothing in the storage layer retries or
/// repairs the file after an error.
#[derive(Debug, Error)]
pub enum RecordFileError {
    // -------------------------------------------------------------------------
    // File lifecycle
    // -------------------------------------------------------------------------
    /// Open, lock, seek, sync or close failure.
    #[error("file error on '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Data transfer
    // -------------------------------------------------------------------------
    /// Failed or short write, padding included.
    #[error("file write failed: {0}")]
    FileWrite(#[source] std::io::Error),

    /// Failed or short read, EOF truncation included.
    #[error("file read failed: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("read of {size} bytes at offset {offset} exceeds file size {filesize}")]
    OutOfBounds { offset: u64, size: u64, filesize: u64 },

    // -------------------------------------------------------------------------
    // Buffers and codec
    // -------------------------------------------------------------------------
    #[error("failed to allocate {size} bytes")]
    Allocation {
        size: u64,
        #[source]
        source: Option<TryReserveError>,
    },

    #[error("compression failed: {0}")]
    Compression(#[source] snap::Error),

    #[error("decompression failed: {0}")]
    Decompression(#[source] snap::Error),
}

/// Coarse failure category, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFileErrorKind {
    File,
    FileWrite,
    FileRead,
    OutOfBounds,
    Allocation,
    Compression,
    Decompression,
}

impl RecordFileError {
    pub fn kind(&self) -> RecordFileErrorKind {
        match self {
            Self::File { .. } => RecordFileErrorKind::File,
            Self::FileWrite(_) => RecordFileErrorKind::FileWrite,
            Self::FileRead(_) => RecordFileErrorKind::FileRead,
            Self::OutOfBounds { .. } => RecordFileErrorKind::OutOfBounds,
            Self::Allocation { .. } => RecordFileErrorKind::Allocation,
            Self::Compression(_) => RecordFileErrorKind::Compression,
            Self::Decompression(_) => RecordFileErrorKind::Decompression,
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn allocation(size: u64, source: TryReserveError) -> Self {
        Self::Allocation {
            size,
            source: Some(source),
        }
    }
}
