//! Snappy boundary for the compressed record path.
//!
//! Records longer than `ALIGN` are stored as snappy raw streams, and readers
//! tell raw records from compressed ones by on-disk size alone. That only
//! works if every compressed record is itself longer than `ALIGN`, so
//! `compress` guarantees it: when snappy shrinks a payload to `ALIGN` bytes or
//! less, the first `ALIGN` payload bytes are re-emitted as a single literal
//! element ahead of the compressed remainder. The result is still a plain
//! snappy stream and decodes with any snappy decoder.

use snap::raw::{Decoder, Encoder, decompress_len, max_compress_len};
use tracing::trace;

use crate::storage_engine::buffer;
use crate::storage_engine::constants::{ALIGN, ALIGN_USIZE};
use crate::storage_engine::error::{RecordFileError, Result};

/// Compresses `payload` into a snappy raw stream.
///
/// For payloads longer than `ALIGN` the returned stream is always longer than
/// `ALIGN` as well.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    let compressed = compress_raw(payload)?;

    if payload.len() <= ALIGN_USIZE || compressed.len() > ALIGN_USIZE {
        return Ok(compressed);
    }

    trace!(
        size = payload.len(),
        csize = compressed.len(),
        "compressed below alignment threshold, storing literal head"
    );
    literal_head(payload)
}

/// Most output a snappy element can produce per input byte: a 3-byte
/// two-byte-offset copy yields up to 64 bytes.
const MAX_EXPANSION: usize = 22;

/// Decompresses a snappy raw stream.
///
/// The expected length is taken from the stream header; both the header query
/// and the decode report failures as `RecordFileError::Decompression`. A header
/// claiming more than `compressed` could ever expand to is rejected before any
/// output buffer is allocated.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let usize_len = decompress_len(compressed).map_err(RecordFileError::Decompression)?;

    let max_len = compressed.len().saturating_mul(MAX_EXPANSION);
    if usize_len > max_len {
        return Err(RecordFileError::Decompression(snap::Error::TooBig {
            given: usize_len as u64,
            max: max_len as u64,
        }));
    }

    let mut out = buffer::zeroed(usize_len as u64)?;

    let written = Decoder::new()
        .decompress(compressed, &mut out)
        .map_err(RecordFileError::Decompression)?;
    out.truncate(written);

    Ok(out)
}

fn compress_raw(input: &[u8]) -> Result<Vec<u8>> {
    // `max_compress_len` is 0 for inputs snappy cannot take; the encoder
    // then reports `TooBig` itself.
    let mut out = buffer::zeroed(max_compress_len(input.len()) as u64)?;

    let written = Encoder::new()
        .compress(input, &mut out)
        .map_err(RecordFileError::Compression)?;
    out.truncate(written);

    Ok(out)
}

/// Builds `header | literal(payload[..ALIGN]) | elements(compress(payload[ALIGN..]))`.
///
/// Snappy copy elements address backwards relative to the current output
/// position, so the elements of an independently compressed tail stay valid
/// behind any prefix.
fn literal_head(payload: &[u8]) -> Result<Vec<u8>> {
    let (head, tail) = payload.split_at(ALIGN_USIZE);

    let tail_stream = compress_raw(tail)?;
    let tail_elements = &tail_stream[varint_len(&tail_stream)..];

    let mut out = buffer::with_capacity(10 + 3 + head.len() + tail_elements.len())?;
    put_varint(&mut out, payload.len() as u64);
    put_literal_tag(&mut out, head.len());
    out.extend_from_slice(head);
    out.extend_from_slice(tail_elements);

    debug_assert!(out.len() as u64 > ALIGN);
    Ok(out)
}

/// Number of bytes taken by the little-endian base-128 length header.
fn varint_len(stream: &[u8]) -> usize {
    stream
        .iter()
        .position(|b| b & 0x80 == 0)
        .map_or(stream.len(), |i| i + 1)
}

fn put_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Literal element tag; `len` is 1..=65536.
fn put_literal_tag(out: &mut Vec<u8>, len: usize) {
    let n = len - 1;
    if n < 60 {
        out.push((n as u8) << 2);
    } else if n < 1 << 8 {
        out.push(60 << 2);
        out.push(n as u8);
    } else {
        out.push(61 << 2);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::error::RecordFileErrorKind;
    use rand::Rng;

    #[test]
    fn compressible_payload_stays_above_threshold() {
        let payload = vec![b'x'; 2000];

        let compressed = compress(&payload).unwrap();
        assert!(compressed.len() as u64 > ALIGN);
        assert!(compressed.len() < payload.len());

        assert_eq!(decompress(&compressed).unwrap(), payload);
    }

    #[test]
    fn literal_head_stream_is_plain_snappy() {
        let payload = vec![7u8; 64 * 1024];

        let compressed = compress(&payload).unwrap();
        let decoded = Decoder::new().decompress_vec(&compressed).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn incompressible_payload_round_trips() {
        let mut payload = vec![0u8; 10_000];
        rand::rng().fill(&mut payload[..]);

        let compressed = compress(&payload).unwrap();
        assert!(compressed.len() as u64 > ALIGN);
        assert_eq!(decompress(&compressed).unwrap(), payload);
    }

    #[test]
    fn threshold_holds_for_sizes_just_above_align() {
        for len in [ALIGN_USIZE + 1, ALIGN_USIZE + 2, ALIGN_USIZE + 60, 2 * ALIGN_USIZE] {
            let payload = vec![0u8; len];
            let compressed = compress(&payload).unwrap();
            assert!(compressed.len() as u64 > ALIGN, "len {len}");
            assert_eq!(decompress(&compressed).unwrap(), payload, "len {len}");
        }
    }

    #[test]
    fn garbage_fails_to_decompress() {
        // Header claims 1000 bytes, body is a truncated literal.
        let garbage = [0xe8, 0x07, 0xf0, 0x01, 0x02];
        let err = decompress(&garbage).unwrap_err();
        assert_eq!(err.kind(), RecordFileErrorKind::Decompression);
    }

    #[test]
    fn oversized_header_is_rejected_before_allocating() {
        // Header claims ~4 GiB; the body could never expand that far.
        let mut stream = vec![0u8; 2048];
        stream[..5].copy_from_slice(&[0xf0, 0xff, 0xff, 0xff, 0x0f]);

        let err = decompress(&stream).unwrap_err();
        assert_eq!(err.kind(), RecordFileErrorKind::Decompression);
        assert!(matches!(
            err,
            RecordFileError::Decompression(snap::Error::TooBig { given, max })
                if given >= 1 << 31 && max == 2048 * MAX_EXPANSION as u64
        ));
    }

    #[test]
    fn highly_repetitive_payload_is_within_expansion_limit() {
        let payload = vec![0u8; 1 << 20];
        let compressed = compress_raw(&payload).unwrap();
        assert!(payload.len() <= compressed.len() * MAX_EXPANSION);
        assert_eq!(decompress(&compressed).unwrap(), payload);
    }

    #[test]
    fn empty_input_fails_to_decompress() {
        let err = decompress(&[]).unwrap_err();
        assert_eq!(err.kind(), RecordFileErrorKind::Decompression);
    }

    #[test]
    fn literal_tags_cover_all_widths() {
        let mut out = Vec::new();
        put_literal_tag(&mut out, 1);
        put_literal_tag(&mut out, 61);
        put_literal_tag(&mut out, 1024);
        assert_eq!(out, vec![0x00, 0xf0, 60, 0xf4, 0xff, 0x03]);
    }

    #[test]
    fn varint_header_length() {
        let mut out = Vec::new();
        put_varint(&mut out, 2000);
        assert_eq!(out, vec![0xd0, 0x0f]);
        assert_eq!(varint_len(&out), 2);
    }
}
