//! compression/decoder.rs
//! Decompression service: owns the one-shot and streaming context pools.
use std::io::{Read, Write};
use std::sync::Arc;

use crate::compression::decompressor::{decompress_into, stream_into, DecompressContext};
use crate::compression::dict::DecompressionDict;
use crate::compression::pool::ContextPool;
use crate::compression::stream::StreamDecompressor;
use crate::config::CodecConfig;
use crate::telemetry::{CodecCounters, CodecSnapshot};
use crate::types::CodecError;

pub struct Decoder {
    plain: ContextPool<DecompressContext>,
    dict: ContextPool<DecompressContext>,
    streams: ContextPool<StreamDecompressor>,
    config: CodecConfig,
    counters: Arc<CodecCounters>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::lazy(CodecConfig::default(), Arc::new(CodecCounters::new()))
    }

    pub(crate) fn lazy(config: CodecConfig, counters: Arc<CodecCounters>) -> Self {
        Self {
            plain: ContextPool::new(),
            dict: ContextPool::new(),
            streams: ContextPool::new(),
            config,
            counters,
        }
    }

    pub fn with_config(config: CodecConfig) -> Result<Self, CodecError> {
        Self::with_counters(config, Arc::new(CodecCounters::new()))
    }

    pub(crate) fn with_counters(config: CodecConfig, counters: Arc<CodecCounters>) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self {
            plain: ContextPool::with_prewarmed(config.prewarm_contexts)?,
            dict: ContextPool::with_prewarmed(config.prewarm_contexts)?,
            streams: ContextPool::with_prewarmed(config.prewarm_contexts)?,
            config,
            counters,
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Append the decompressed `src` to `dst`.
    pub fn decompress(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<usize, CodecError> {
        if src.is_empty() {
            return Ok(0);
        }
        let mut ctx = self.plain.acquire()?;
        decompress_into(&mut ctx, &self.streams, dst, src, None, &self.config, &self.counters)
    }

    pub fn decompress_dict(&self, dst: &mut Vec<u8>, src: &[u8], dict: &DecompressionDict) -> Result<usize, CodecError> {
        if src.is_empty() {
            return Ok(0);
        }
        let mut ctx = self.dict.acquire()?;
        decompress_into(&mut ctx, &self.streams, dst, src, Some(dict), &self.config, &self.counters)
    }

    /// Decode through the streaming path regardless of what the frame declares.
    pub fn decompress_streaming(
        &self,
        dst: &mut Vec<u8>,
        src: &[u8],
        dict: Option<&DecompressionDict>,
    ) -> Result<usize, CodecError> {
        if src.is_empty() {
            return Ok(0);
        }
        stream_into(&self.streams, dst, src, dict, &self.counters)
    }

    /// Decode every frame `reader` yields into `writer` with a pooled stream
    /// decompressor. Returns the number of bytes written.
    pub fn copy_decode<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        dict: Option<&DecompressionDict>,
    ) -> Result<u64, CodecError> {
        let mut decoder = self.streams.acquire()?;
        decoder.run(reader, writer, dict).map_err(|e| {
            if e.is_defect() {
                self.counters.add_defect();
            } else {
                self.counters.add_decompress_error();
            }
            e
        })
    }

    pub fn clear_pools(&self) -> usize {
        self.plain.clear() + self.dict.clear() + self.streams.clear()
    }

    pub fn contexts_created(&self) -> usize {
        self.plain.created() + self.dict.created() + self.streams.created()
    }

    pub fn snapshot(&self) -> CodecSnapshot {
        let mut snapshot = self.counters.snapshot();
        snapshot.contexts_created = self.contexts_created() as u64;
        snapshot
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
