//! compression/compressor.rs
//! One-shot compression into a caller-owned destination.
//!
//! Design notes:
//! - Fast path: compress straight into the destination's spare capacity.
//!   "Destination too small" falls through to the slow path.
//! - Slow path: grow the destination to `compress_bound + 1` spare bytes and
//!   compress once more. Any failure there violates the bound and is a defect.
//! - Dictionary frames carry a content checksum, so decoding them with the
//!   wrong dictionary fails instead of returning different bytes.
//! - Dictionary compression shrinks the destination after a slow path when it
//!   is left with more slack than the defragmentation threshold.
use zstd_safe::{CCtx, CParameter, ResetDirective};

use crate::compression::bound::compress_bound;
use crate::compression::dict::CompressionDict;
use crate::compression::pin::SpareTail;
use crate::compression::pool::CodecContext;
use crate::compression::status::{classify, describe, encode_error, error_code, Status};
use crate::config::CodecConfig;
use crate::telemetry::{CallPath, CodecCounters};
use crate::types::CodecError;
use crate::utils::{defragment, grow_spare, spare_capacity};

/// Pooled native compression context.
pub struct CompressContext {
    cctx: CCtx<'static>,
}

impl CodecContext for CompressContext {
    const KIND: &'static str = "compression";

    fn create() -> Result<Self, CodecError> {
        CCtx::try_create()
            .map(|cctx| Self { cctx })
            .ok_or(CodecError::ContextCreation(Self::KIND))
    }

    fn recycle(&mut self) {
        // Drops any referenced dictionary; the next dictionary call binds again.
        if let Err(code) = self.cctx.reset(ResetDirective::SessionAndParameters) {
            tracing::warn!(reason = %describe(error_code(code)), "compression context reset failed");
        }
    }
}

/// What a compression call is keyed on.
#[derive(Clone, Copy, Debug)]
pub enum CompressParams<'d> {
    Level(i32),
    Dict(&'d CompressionDict),
}

impl CompressParams<'_> {
    fn op(&self) -> &'static str {
        match self {
            CompressParams::Level(_) => "compress",
            CompressParams::Dict(_) => "compress_dict",
        }
    }
}

impl CompressContext {
    /// Single native call into the spare tail of `dst`.
    fn compress_tail(&mut self, dst: &mut Vec<u8>, src: &[u8], params: CompressParams<'_>) -> Status {
        let mut tail = SpareTail::new(dst);
        let result = match params {
            CompressParams::Level(level) => self.cctx.compress(&mut tail, src, level),
            CompressParams::Dict(dict) => match self.bind_dict(dict) {
                Ok(_) => self.cctx.compress2(&mut tail, src),
                Err(code) => Err(code),
            },
        };
        classify(result)
    }

    /// Fresh session referencing `dict`, with the content checksum on.
    fn bind_dict(&mut self, dict: &CompressionDict) -> zstd_safe::SafeResult {
        self.cctx.reset(ResetDirective::SessionAndParameters)?;
        self.cctx.set_parameter(CParameter::ChecksumFlag(true))?;
        self.cctx.ref_cdict(dict.native())
    }
}

/// Append the compressed form of `src` to `dst`; returns the bytes appended.
///
/// On error `dst.len()` is unchanged.
pub fn compress_into(
    ctx: &mut CompressContext,
    dst: &mut Vec<u8>,
    src: &[u8],
    params: CompressParams<'_>,
    config: &CodecConfig,
    counters: &CodecCounters,
) -> Result<usize, CodecError> {
    if src.is_empty() {
        return Ok(0);
    }

    let min_slack = match params {
        CompressParams::Level(_) => config.fast_path_min_slack,
        CompressParams::Dict(_) => 1,
    };

    if spare_capacity(dst) >= min_slack {
        match ctx.compress_tail(dst, src, params) {
            Status::Ok(written) => {
                tracing::trace!(op = params.op(), src_len = src.len(), written, "compressed in place");
                counters.add_compress(CallPath::Fast, src.len(), written);
                return Ok(written);
            }
            Status::DstTooSmall => {}
            other => {
                counters.add_defect();
                return Err(encode_error(params.op(), other));
            }
        }
    }

    let bound = compress_bound(src.len()) + 1;
    grow_spare(dst, bound);
    tracing::debug!(op = params.op(), src_len = src.len(), bound, capacity = dst.capacity(), "compress slow path");

    let written = match ctx.compress_tail(dst, src, params) {
        Status::Ok(written) => written,
        other => {
            counters.add_defect();
            return Err(encode_error(params.op(), other));
        }
    };

    if let CompressParams::Dict(_) = params {
        if defragment(dst, config.defrag_slack_threshold) {
            tracing::debug!(len = dst.len(), "defragmented compression output");
            counters.add_defragmentation();
        }
    }

    counters.add_compress(CallPath::Slow, src.len(), written);
    Ok(written)
}
