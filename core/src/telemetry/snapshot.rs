//! telemetry/snapshot.rs
//! Immutable view of `CodecCounters` at one point in time.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub compress_fast_path: u64,
    pub compress_slow_path: u64,
    pub decompress_fast_path: u64,
    pub decompress_slow_path: u64,
    pub decompress_streamed: u64,
    pub bytes_raw_in: u64,
    pub bytes_compressed_out: u64,
    pub bytes_compressed_in: u64,
    pub bytes_raw_out: u64,
    pub decompress_errors: u64,
    pub codec_defects: u64,
    pub defragmentations: u64,
    /// `bytes_compressed_out / bytes_raw_in`, 0.0 before any compression.
    pub compression_ratio: f64,
    /// Native contexts created across all pools of the owning service.
    pub contexts_created: u64,
}

impl CodecSnapshot {
    pub(crate) fn ratio(compressed: u64, raw: u64) -> f64 {
        if raw > 0 {
            compressed as f64 / raw as f64
        } else {
            0.0
        }
    }

    pub fn compress_calls(&self) -> u64 {
        self.compress_fast_path + self.compress_slow_path
    }

    pub fn decompress_calls(&self) -> u64 {
        self.decompress_fast_path + self.decompress_slow_path + self.decompress_streamed
    }

    /// Share of successful calls served without resizing the destination.
    pub fn fast_path_ratio(&self) -> f64 {
        let total = self.compress_calls() + self.decompress_calls();
        if total == 0 {
            return 0.0;
        }
        (self.compress_fast_path + self.decompress_fast_path) as f64 / total as f64
    }

    // Combine snapshots from independent service objects.
    pub fn merge(&mut self, other: &CodecSnapshot) {
        self.compress_fast_path += other.compress_fast_path;
        self.compress_slow_path += other.compress_slow_path;
        self.decompress_fast_path += other.decompress_fast_path;
        self.decompress_slow_path += other.decompress_slow_path;
        self.decompress_streamed += other.decompress_streamed;
        self.bytes_raw_in += other.bytes_raw_in;
        self.bytes_compressed_out += other.bytes_compressed_out;
        self.bytes_compressed_in += other.bytes_compressed_in;
        self.bytes_raw_out += other.bytes_raw_out;
        self.decompress_errors += other.decompress_errors;
        self.codec_defects += other.codec_defects;
        self.defragmentations += other.defragmentations;
        self.contexts_created += other.contexts_created;
        self.compression_ratio = Self::ratio(self.bytes_compressed_out, self.bytes_raw_in);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
