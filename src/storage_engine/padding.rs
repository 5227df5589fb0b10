use crate::storage_engine::constants::{ALIGN, ALIGN_USIZE};

/// Zero bytes used as the padding source.
///
/// Kept apart from `ALIGN` so the threshold math never depends on the size of
/// this buffer. It only has to be at least `ALIGN - 1` bytes long.
static ZERO_PAD: [u8; ALIGN_USIZE] = [0u8; ALIGN_USIZE];

/// Number of zero bytes needed to bring `filesize` up to the next multiple of
/// `ALIGN`. Returns `0` when `filesize` is already aligned.
#[inline]
pub fn padding_for(filesize: u64) -> u64 {
    match filesize % ALIGN {
        0 => 0,
        rem => ALIGN - rem,
    }
}

/// A zero-filled slice of exactly `len` bytes.
///
/// # Panics
/// - If `len` is `ALIGN` or larger; `padding_for` never produces such a value.
#[inline]
pub fn zero_padding(len: u64) -> &'static [u8] {
    &ZERO_PAD[..len as usize]
}

/// Debug-only check that a record start offset sits on an `ALIGN` boundary.
///
/// Always present so callers need no cfg fences; in release builds the body
/// compiles away.
#[inline]
pub fn debug_assert_aligned_offset(off: u64) {
    #[cfg(any(test, debug_assertions))]
    {
        debug_assert!(
            off.is_multiple_of(ALIGN),
            "record start not {}-byte aligned (got {})",
            ALIGN,
            off
        );
    }

    #[cfg(not(any(test, debug_assertions)))]
    {
        // Release/bench: no-op. Keep arg used to avoid warnings.
        let _ = off;
    }
}
