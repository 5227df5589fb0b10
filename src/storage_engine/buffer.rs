use crate::storage_engine::error::{RecordFileError, Result};

/// Allocates a zero-filled buffer of `len` bytes.
///
/// Uses `try_reserve_exact` so an impossible size comes back as
/// `RecordFileError::Allocation` instead of aborting the process.
pub(crate) fn zeroed(len: u64) -> Result<Vec<u8>> {
    let len_usize = usize::try_from(len).map_err(|_| RecordFileError::Allocation {
        size: len,
        source: None,
    })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len_usize)
        .map_err(|e| RecordFileError::allocation(len, e))?;
    buf.resize(len_usize, 0);

    Ok(buf)
}

/// Allocates an empty buffer with room for `capacity` bytes.
pub(crate) fn with_capacity(capacity: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|e| RecordFileError::allocation(capacity as u64, e))?;

    Ok(buf)
}
