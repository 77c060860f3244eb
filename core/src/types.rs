//! types.rs
//! Unified error for every compress/decompress operation.
//!
//! - Recoverable sizing failures never reach this type; they are resolved
//!   inside the compressor/decompressor.
//! - Domain errors (corrupt input) are values the caller handles.
//! - `CodecDefect` marks a broken invariant. The caller's framework decides
//!   whether to abort or propagate; the core never aborts on its own.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The native decoder rejected the input.
    #[error("decompression error: {reason} (code {code})")]
    Corrupt { code: u32, reason: String },

    /// The frame header could not be parsed while probing the content size.
    #[error("cannot decompress invalid src: malformed frame header")]
    InvalidFrame,

    /// The streaming source ended before the current frame was complete.
    #[error("truncated frame: source exhausted after {consumed} bytes")]
    TruncatedFrame { consumed: u64 },

    /// The frame declares more output than the configured limit allows.
    #[error("declared content size {declared} exceeds limit {limit}")]
    ContentSizeTooLarge { declared: u64, limit: u64 },

    /// The destination could not be grown to the required size.
    #[error("failed to allocate {requested} bytes for the destination buffer")]
    Allocation { requested: u64 },

    #[error("failed to create native {0} context")]
    ContextCreation(&'static str),

    #[error("dictionary creation failed: {0}")]
    DictionaryCreation(String),

    /// The codec misbehaved: an error outside the expected set, or a violated
    /// size bound. Must never happen with a healthy codec.
    #[error("BUG: codec defect in {op}: {reason}")]
    CodecDefect { op: &'static str, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// True for unrecoverable invariant violations.
    pub fn is_defect(&self) -> bool {
        matches!(self, CodecError::CodecDefect { .. })
    }

    /// True when the input bytes themselves were rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CodecError::Corrupt { .. }
                | CodecError::InvalidFrame
                | CodecError::TruncatedFrame { .. }
                | CodecError::ContentSizeTooLarge { .. }
        )
    }

    pub(crate) fn defect(op: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::error!(op, %reason, "codec defect");
        CodecError::CodecDefect { op, reason }
    }
}
