//! compression/encoder.rs
//! Compression service: owns its context pools and a default level.
use std::sync::Arc;

use crate::compression::compressor::{compress_into, CompressContext, CompressParams};
use crate::compression::dict::CompressionDict;
use crate::compression::pool::ContextPool;
use crate::config::CodecConfig;
use crate::telemetry::{CodecCounters, CodecSnapshot};
use crate::types::CodecError;

/// Pooled compressor. Cheap to share by reference across threads; contexts
/// are destroyed when the encoder is dropped.
pub struct Encoder {
    plain: ContextPool<CompressContext>,
    dict: ContextPool<CompressContext>,
    config: CodecConfig,
    counters: Arc<CodecCounters>,
}

impl Encoder {
    /// Encoder at `level` with otherwise default settings.
    pub fn new(level: i32) -> Self {
        Self::lazy(CodecConfig { level, ..CodecConfig::default() }, Arc::new(CodecCounters::new()))
    }

    /// No validation, no prewarming: every context is created on first use.
    pub(crate) fn lazy(config: CodecConfig, counters: Arc<CodecCounters>) -> Self {
        Self { plain: ContextPool::new(), dict: ContextPool::new(), config, counters }
    }

    pub fn with_config(config: CodecConfig) -> Result<Self, CodecError> {
        Self::with_counters(config, Arc::new(CodecCounters::new()))
    }

    pub(crate) fn with_counters(config: CodecConfig, counters: Arc<CodecCounters>) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self {
            plain: ContextPool::with_prewarmed(config.prewarm_contexts)?,
            dict: ContextPool::with_prewarmed(config.prewarm_contexts)?,
            config,
            counters,
        })
    }

    pub fn level(&self) -> i32 {
        self.config.level
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Append `src` compressed at the encoder's level to `dst`.
    pub fn compress(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<usize, CodecError> {
        self.compress_level(dst, src, self.config.level)
    }

    pub fn compress_level(&self, dst: &mut Vec<u8>, src: &[u8], level: i32) -> Result<usize, CodecError> {
        if src.is_empty() {
            return Ok(0);
        }
        let mut ctx = self.plain.acquire()?;
        compress_into(&mut ctx, dst, src, CompressParams::Level(level), &self.config, &self.counters)
    }

    /// Append `src` compressed with `dict` (at the dictionary's level) to `dst`.
    pub fn compress_dict(&self, dst: &mut Vec<u8>, src: &[u8], dict: &CompressionDict) -> Result<usize, CodecError> {
        if src.is_empty() {
            return Ok(0);
        }
        let mut ctx = self.dict.acquire()?;
        compress_into(&mut ctx, dst, src, CompressParams::Dict(dict), &self.config, &self.counters)
    }

    /// Destroy idle contexts; returns how many were freed.
    pub fn clear_pools(&self) -> usize {
        self.plain.clear() + self.dict.clear()
    }

    pub fn contexts_created(&self) -> usize {
        self.plain.created() + self.dict.created()
    }

    pub fn snapshot(&self) -> CodecSnapshot {
        let mut snapshot = self.counters.snapshot();
        snapshot.contexts_created = self.contexts_created() as u64;
        snapshot
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(CodecConfig::default().level)
    }
}
