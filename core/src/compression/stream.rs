//! compression/stream.rs
//! Streaming decompression for frames that do not declare their size.
//!
//! Design notes:
//! - Pulls compressed bytes from any `Read` source in native-recommended input
//!   chunks, runs the incremental decode step, and pushes decoded bytes to any
//!   `Write` sink.
//! - The decoder and its two working buffers are pooled; `recycle` resets the
//!   session and drops any referenced dictionary, so each call starts clean.
//! - Concatenated frames decode back to back. A source that ends inside a
//!   frame is reported as truncated.
use std::io::{self, Read, Write};

use zstd_safe::{DCtx, InBuffer, OutBuffer, ResetDirective};

use crate::compression::dict::DecompressionDict;
use crate::compression::pool::CodecContext;
use crate::compression::status::{classify, decode_error, describe, error_code, Status};
use crate::types::CodecError;

pub struct StreamDecompressor {
    dctx: DCtx<'static>,
    in_buf: Vec<u8>,
    out_buf: Vec<u8>,
}

impl CodecContext for StreamDecompressor {
    const KIND: &'static str = "streaming decompression";

    fn create() -> Result<Self, CodecError> {
        let dctx = DCtx::try_create().ok_or(CodecError::ContextCreation(Self::KIND))?;
        Ok(Self {
            dctx,
            in_buf: vec![0u8; DCtx::in_size()],
            out_buf: vec![0u8; DCtx::out_size()],
        })
    }

    fn recycle(&mut self) {
        // Failing to reset only leaves a stale session; `run` resets again.
        if let Err(code) = self.dctx.reset(ResetDirective::SessionAndParameters) {
            tracing::warn!(reason = %describe(error_code(code)), "stream decompressor reset failed");
        }
    }
}

impl StreamDecompressor {
    /// Decode everything `source` yields into `sink`. Returns bytes written.
    pub fn run<R: Read, W: Write>(
        &mut self,
        mut source: R,
        mut sink: W,
        dict: Option<&DecompressionDict>,
    ) -> Result<u64, CodecError> {
        self.dctx
            .reset(ResetDirective::SessionAndParameters)
            .map_err(|code| CodecError::defect("stream reset", describe(error_code(code))))?;
        if let Some(dict) = dict {
            self.dctx
                .ref_ddict(dict.native())
                .map_err(|code| CodecError::defect("stream ref_ddict", describe(error_code(code))))?;
        }

        let mut consumed: u64 = 0;
        let mut produced: u64 = 0;
        let (mut in_pos, mut in_len) = (0usize, 0usize);
        let mut output_full = false;
        // Non-zero while a frame is still being decoded.
        let mut pending: usize = 0;

        loop {
            if in_pos == in_len && !output_full {
                in_len = fill(&mut source, &mut self.in_buf)?;
                in_pos = 0;
                if in_len == 0 {
                    break;
                }
            }

            let (read, written, hint) = {
                let mut input = InBuffer::around(&self.in_buf[in_pos..in_len]);
                let mut output = OutBuffer::around(&mut self.out_buf[..]);
                let hint = match classify(self.dctx.decompress_stream(&mut output, &mut input)) {
                    Status::Ok(hint) => hint,
                    other => return Err(decode_error("stream decompress", other)),
                };
                (input.pos(), output.pos(), hint)
            };

            in_pos += read;
            consumed += read as u64;
            if written > 0 {
                sink.write_all(&self.out_buf[..written])?;
                produced += written as u64;
            }
            output_full = written == self.out_buf.len();
            // A call that moved no data only reports the next frame's header
            // size; it says nothing about the frame just finished.
            if read > 0 || written > 0 {
                pending = hint;
            }
        }

        if pending != 0 {
            return Err(CodecError::TruncatedFrame { consumed });
        }
        sink.flush()?;
        tracing::trace!(consumed, produced, "stream decompression finished");
        Ok(produced)
    }
}

/// Read into `buf`, retrying on interruption. Returns 0 at end of source.
fn fill<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match source.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
