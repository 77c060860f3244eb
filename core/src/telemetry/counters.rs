//! telemetry/counters.rs
//! Live counters updated on every compress/decompress call.
//!
//! Summary: which sizing path each call took and how many bytes moved.
//! Converted into an immutable `CodecSnapshot` on demand.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::telemetry::snapshot::CodecSnapshot;

/// Sizing path a successful call completed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CallPath {
    /// In place, into existing spare capacity.
    Fast,
    /// After growing the destination to a computed size.
    Slow,
    /// Through the streaming decoder (unknown content size).
    Streamed,
}

#[derive(Default, Debug)]
pub struct CodecCounters {
    compress_fast: AtomicU64,
    compress_slow: AtomicU64,
    bytes_raw_in: AtomicU64,
    bytes_compressed_out: AtomicU64,

    decompress_fast: AtomicU64,
    decompress_slow: AtomicU64,
    decompress_streamed: AtomicU64,
    bytes_compressed_in: AtomicU64,
    bytes_raw_out: AtomicU64,

    decompress_errors: AtomicU64,
    codec_defects: AtomicU64,
    defragmentations: AtomicU64,
}

impl CodecCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful compression.
    ///
    /// - `src_len`: uncompressed bytes consumed
    /// - `out_len`: compressed bytes appended to the destination
    pub fn add_compress(&self, path: CallPath, src_len: usize, out_len: usize) {
        match path {
            CallPath::Fast => self.compress_fast.fetch_add(1, Ordering::Relaxed),
            CallPath::Slow | CallPath::Streamed => self.compress_slow.fetch_add(1, Ordering::Relaxed),
        };
        self.bytes_raw_in.fetch_add(src_len as u64, Ordering::Relaxed);
        self.bytes_compressed_out.fetch_add(out_len as u64, Ordering::Relaxed);
    }

    /// Record one successful decompression.
    ///
    /// - `src_len`: compressed bytes consumed
    /// - `out_len`: decompressed bytes appended to the destination
    pub fn add_decompress(&self, path: CallPath, src_len: usize, out_len: usize) {
        let slot = match path {
            CallPath::Fast => &self.decompress_fast,
            CallPath::Slow => &self.decompress_slow,
            CallPath::Streamed => &self.decompress_streamed,
        };
        slot.fetch_add(1, Ordering::Relaxed);
        self.bytes_compressed_in.fetch_add(src_len as u64, Ordering::Relaxed);
        self.bytes_raw_out.fetch_add(out_len as u64, Ordering::Relaxed);
    }

    pub fn add_decompress_error(&self) {
        self.decompress_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_defect(&self) {
        self.codec_defects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_defragmentation(&self) {
        self.defragmentations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CodecSnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        let bytes_raw_in = load(&self.bytes_raw_in);
        let bytes_compressed_out = load(&self.bytes_compressed_out);
        CodecSnapshot {
            compress_fast_path: load(&self.compress_fast),
            compress_slow_path: load(&self.compress_slow),
            decompress_fast_path: load(&self.decompress_fast),
            decompress_slow_path: load(&self.decompress_slow),
            decompress_streamed: load(&self.decompress_streamed),
            bytes_raw_in,
            bytes_compressed_out,
            bytes_compressed_in: load(&self.bytes_compressed_in),
            bytes_raw_out: load(&self.bytes_raw_out),
            decompress_errors: load(&self.decompress_errors),
            codec_defects: load(&self.codec_defects),
            defragmentations: load(&self.defragmentations),
            compression_ratio: CodecSnapshot::ratio(bytes_compressed_out, bytes_raw_in),
            contexts_created: 0,
        }
    }
}
