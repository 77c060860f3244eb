//! compression/decompressor.rs
//! One-shot decompression into a caller-owned destination.
//!
//! Design notes:
//! - Fast path: decode straight into spare capacity. "Destination too small"
//!   falls through; any other native error means the input is malformed.
//! - Slow path: probe the frame header. A known size is allocated exactly,
//!   an unknown size goes through the pooled `StreamDecompressor`, and an
//!   invalid header fails before anything is allocated.
//! - Every error leaves `dst.len()` at its pre-call value.
use zstd_safe::DCtx;

use crate::compression::bound::ContentSize;
use crate::compression::dict::DecompressionDict;
use crate::compression::pin::SpareTail;
use crate::compression::pool::{CodecContext, ContextPool};
use crate::compression::status::{classify, decode_error, Status};
use crate::compression::stream::StreamDecompressor;
use crate::config::CodecConfig;
use crate::telemetry::{CallPath, CodecCounters};
use crate::types::CodecError;
use crate::utils::{defragment, spare_capacity, try_grow_spare_exact};

/// Pooled native decompression context.
pub struct DecompressContext {
    dctx: DCtx<'static>,
}

impl CodecContext for DecompressContext {
    const KIND: &'static str = "decompression";

    fn create() -> Result<Self, CodecError> {
        DCtx::try_create()
            .map(|dctx| Self { dctx })
            .ok_or(CodecError::ContextCreation(Self::KIND))
    }
}

impl DecompressContext {
    fn decompress_tail(&mut self, dst: &mut Vec<u8>, src: &[u8], dict: Option<&DecompressionDict>) -> Status {
        let mut tail = SpareTail::new(dst);
        let result = match dict {
            None => self.dctx.decompress(&mut tail, src),
            Some(dict) => self.dctx.decompress_using_ddict(&mut tail, src, dict.native()),
        };
        classify(result)
    }
}

fn op_name(dict: Option<&DecompressionDict>) -> &'static str {
    if dict.is_some() {
        "decompress_dict"
    } else {
        "decompress"
    }
}

fn failed(counters: &CodecCounters, err: CodecError) -> CodecError {
    if err.is_defect() {
        counters.add_defect();
    } else {
        counters.add_decompress_error();
    }
    err
}

/// Append the decompressed form of `src` to `dst`; returns the bytes appended.
pub fn decompress_into(
    ctx: &mut DecompressContext,
    streams: &ContextPool<StreamDecompressor>,
    dst: &mut Vec<u8>,
    src: &[u8],
    dict: Option<&DecompressionDict>,
    config: &CodecConfig,
    counters: &CodecCounters,
) -> Result<usize, CodecError> {
    if src.is_empty() {
        return Ok(0);
    }
    let op = op_name(dict);

    let min_slack = if dict.is_some() { 1 } else { config.fast_path_min_slack };
    if spare_capacity(dst) >= min_slack {
        match ctx.decompress_tail(dst, src, dict) {
            Status::Ok(written) => {
                tracing::trace!(op, src_len = src.len(), written, "decompressed in place");
                counters.add_decompress(CallPath::Fast, src.len(), written);
                return Ok(written);
            }
            Status::DstTooSmall => {}
            other => {
                tracing::warn!(op, src_len = src.len(), "rejected compressed input");
                return Err(failed(counters, decode_error(op, other)));
            }
        }
    }

    let declared = match ContentSize::probe(src) {
        ContentSize::Known(size) => size,
        ContentSize::Unknown => {
            tracing::debug!(op, src_len = src.len(), "content size unknown, streaming");
            return stream_into(streams, dst, src, dict, counters);
        }
        ContentSize::Invalid => {
            tracing::warn!(op, src_len = src.len(), "invalid frame header");
            return Err(failed(counters, CodecError::InvalidFrame));
        }
    };

    if let Some(limit) = config.max_content_size {
        if declared > limit {
            return Err(failed(counters, CodecError::ContentSizeTooLarge { declared, limit }));
        }
    }
    let wanted = usize::try_from(declared)
        .ok()
        .and_then(|size| size.checked_add(1))
        .ok_or(CodecError::Allocation { requested: declared })
        .map_err(|e| failed(counters, e))?;
    try_grow_spare_exact(dst, wanted).map_err(|e| failed(counters, e))?;
    tracing::debug!(op, src_len = src.len(), declared, capacity = dst.capacity(), "decompress slow path");

    let written = match ctx.decompress_tail(dst, src, dict) {
        Status::Ok(written) => written,
        Status::DstTooSmall => {
            // Only the first frame's size is declared; more frames follow.
            tracing::debug!(op, declared, "output exceeds declared size, streaming");
            return stream_into(streams, dst, src, dict, counters);
        }
        other => return Err(failed(counters, decode_error(op, other))),
    };

    if dict.is_some() && defragment(dst, config.defrag_slack_threshold) {
        tracing::debug!(len = dst.len(), "defragmented decompression output");
        counters.add_defragmentation();
    }

    counters.add_decompress(CallPath::Slow, src.len(), written);
    Ok(written)
}

/// Decode `src` through a pooled stream decompressor, appending to `dst`.
pub fn stream_into(
    streams: &ContextPool<StreamDecompressor>,
    dst: &mut Vec<u8>,
    src: &[u8],
    dict: Option<&DecompressionDict>,
    counters: &CodecCounters,
) -> Result<usize, CodecError> {
    let start = dst.len();
    let mut decoder = streams.acquire()?;
    match decoder.run(src, &mut *dst, dict) {
        Ok(_) => {
            let written = dst.len() - start;
            counters.add_decompress(CallPath::Streamed, src.len(), written);
            Ok(written)
        }
        Err(e) => {
            dst.truncate(start);
            Err(failed(counters, e))
        }
    }
}
