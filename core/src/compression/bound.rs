//! compression/bound.rs
//! Size estimation: worst-case compressed size and declared content size.
//!
//! Pure functions over the frame/dictionary bytes; nothing here allocates.
use crate::constants::{BOUND_LOW_LIMIT, MAGIC_DICTIONARY};

/// Worst-case compressed size of `src_size` input bytes.
///
/// Matches the native `ZSTD_COMPRESSBOUND` for single-shot compression.
#[inline]
pub const fn compress_bound(src_size: usize) -> usize {
    let margin = if src_size < BOUND_LOW_LIMIT {
        (BOUND_LOW_LIMIT - src_size) >> 11
    } else {
        0
    };
    src_size + (src_size >> 8) + margin
}

/// Decompressed size declared by a frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSize {
    Known(u64),
    /// Valid header without a content-size field (streamed frames).
    Unknown,
    /// Not a frame, or a truncated header.
    Invalid,
}

impl ContentSize {
    /// Probe the first frame of `src`.
    pub fn probe(src: &[u8]) -> Self {
        match zstd_safe::get_frame_content_size(src) {
            Ok(Some(size)) => ContentSize::Known(size),
            Ok(None) => ContentSize::Unknown,
            Err(_) => ContentSize::Invalid,
        }
    }
}

/// Dictionary id stored in a formatted dictionary blob.
/// Raw-content dictionaries have none.
pub fn dict_id_of(raw: &[u8]) -> Option<u32> {
    if raw.len() < 8 {
        return None;
    }
    let magic = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
    if magic != MAGIC_DICTIONARY {
        return None;
    }
    match u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]) {
        0 => None,
        id => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_matches_native() {
        for n in [0usize, 1, 15, 1000, 2047, 2048, 131_071, 131_072, 131_073, 1 << 20, 10_000_000] {
            assert_eq!(compress_bound(n), zstd_safe::compress_bound(n), "size {}", n);
        }
    }

    #[test]
    fn bound_margin_vanishes_at_low_limit() {
        assert_eq!(compress_bound(BOUND_LOW_LIMIT), BOUND_LOW_LIMIT + (BOUND_LOW_LIMIT >> 8));
        assert_eq!(compress_bound(0), BOUND_LOW_LIMIT >> 11);
    }

    #[test]
    fn probe_rejects_garbage() {
        assert_eq!(ContentSize::probe(b"not a zstd frame"), ContentSize::Invalid);
        assert_eq!(ContentSize::probe(&[]), ContentSize::Invalid);
    }

    #[test]
    fn dict_id_requires_magic() {
        assert_eq!(dict_id_of(b"abcabcabc"), None);
        let mut raw = MAGIC_DICTIONARY.to_le_bytes().to_vec();
        raw.extend_from_slice(&0x1234u32.to_le_bytes());
        raw.extend_from_slice(&[0u8; 16]);
        assert_eq!(dict_id_of(&raw), Some(0x1234));
    }
}
