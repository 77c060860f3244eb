//! compression/codec.rs
//! `Codec`: the explicit service object behind every public operation.
//!
//! Construct one at startup (or lazily) and share it by reference or `Arc`.
//! It owns every native context it creates; dropping it frees them.
use std::sync::Arc;

use crate::compression::bound;
use crate::compression::decoder::Decoder;
use crate::compression::dict::{CompressionDict, DecompressionDict};
use crate::compression::encoder::Encoder;
use crate::config::CodecConfig;
use crate::telemetry::{CodecCounters, CodecSnapshot};
use crate::types::CodecError;

pub struct Codec {
    encoder: Encoder,
    decoder: Decoder,
    counters: Arc<CodecCounters>,
}

impl Codec {
    pub fn new() -> Self {
        let counters = Arc::new(CodecCounters::new());
        let config = CodecConfig::default();
        Self {
            encoder: Encoder::lazy(config.clone(), counters.clone()),
            decoder: Decoder::lazy(config, counters.clone()),
            counters,
        }
    }

    pub fn with_config(config: CodecConfig) -> Result<Self, CodecError> {
        let counters = Arc::new(CodecCounters::new());
        Ok(Self {
            encoder: Encoder::with_counters(config.clone(), counters.clone())?,
            decoder: Decoder::with_counters(config, counters.clone())?,
            counters,
        })
    }

    pub fn config(&self) -> &CodecConfig {
        self.encoder.config()
    }

    /// Compress at the configured default level.
    pub fn compress(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<usize, CodecError> {
        self.encoder.compress(dst, src)
    }

    pub fn compress_level(&self, dst: &mut Vec<u8>, src: &[u8], level: i32) -> Result<usize, CodecError> {
        self.encoder.compress_level(dst, src, level)
    }

    pub fn compress_dict(&self, dst: &mut Vec<u8>, src: &[u8], dict: &CompressionDict) -> Result<usize, CodecError> {
        self.encoder.compress_dict(dst, src, dict)
    }

    pub fn decompress(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<usize, CodecError> {
        self.decoder.decompress(dst, src)
    }

    pub fn decompress_dict(&self, dst: &mut Vec<u8>, src: &[u8], dict: &DecompressionDict) -> Result<usize, CodecError> {
        self.decoder.decompress_dict(dst, src, dict)
    }

    pub fn compress_bound(&self, src_size: usize) -> usize {
        bound::compress_bound(src_size)
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Destroy all idle native contexts. Subsequent calls recreate them lazily.
    pub fn clear_pools(&self) -> usize {
        self.encoder.clear_pools() + self.decoder.clear_pools()
    }

    pub fn snapshot(&self) -> CodecSnapshot {
        let mut snapshot = self.counters.snapshot();
        snapshot.contexts_created = (self.encoder.contexts_created() + self.decoder.contexts_created()) as u64;
        snapshot
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}
