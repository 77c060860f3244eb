//! compression/status.rs
//! Classifies native results.
//!
//! Design notes:
//! - Only `DstTooSmall` is recoverable; the caller resizes and retries once.
//! - Codes inside the documented range are domain errors (bad input).
//! - Anything outside the range is a codec defect.
use num_enum::TryFromPrimitive;

use crate::constants::error_codes;
use crate::types::CodecError;
use crate::utils::enum_name_or_hex;

/// Named subset of the native error codes, for diagnostics.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum NativeErrorCode {
    Generic              = error_codes::GENERIC,
    PrefixUnknown        = error_codes::PREFIX_UNKNOWN,
    VersionUnsupported   = error_codes::VERSION_UNSUPPORTED,
    FrameParamUnsupported = error_codes::FRAME_PARAM_UNSUPPORTED,
    WindowTooLarge       = error_codes::WINDOW_TOO_LARGE,
    CorruptionDetected   = error_codes::CORRUPTION_DETECTED,
    ChecksumWrong        = error_codes::CHECKSUM_WRONG,
    LiteralsHeaderWrong  = error_codes::LITERALS_HEADER_WRONG,
    DictionaryCorrupted  = error_codes::DICTIONARY_CORRUPTED,
    DictionaryWrong      = error_codes::DICTIONARY_WRONG,
    DictionaryCreationFailed = error_codes::DICTIONARY_CREATION_FAILED,
    ParameterUnsupported = error_codes::PARAMETER_UNSUPPORTED,
    ParameterOutOfBound  = error_codes::PARAMETER_OUT_OF_BOUND,
    MemoryAllocation     = error_codes::MEMORY_ALLOCATION,
    DstSizeTooSmall      = error_codes::DST_SIZE_TOO_SMALL,
    SrcSizeWrong         = error_codes::SRC_SIZE_WRONG,
    DstBufferNull        = error_codes::DST_BUFFER_NULL,
}

/// Outcome of one native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Bytes written (or, for streaming, the next-input hint).
    Ok(usize),
    DstTooSmall,
    /// Documented error code: the input (or a parameter) was rejected.
    Domain(u32),
    /// Code outside the documented range.
    Defect(u32),
}

/// Decode the native error code from a failing `size_t` result.
#[inline]
pub fn error_code(raw: zstd_safe::ErrorCode) -> u32 {
    raw.wrapping_neg() as u32
}

pub fn classify(result: zstd_safe::SafeResult) -> Status {
    match result {
        Ok(n) => Status::Ok(n),
        Err(raw) => classify_code(error_code(raw)),
    }
}

pub fn classify_code(code: u32) -> Status {
    match code {
        error_codes::DST_SIZE_TOO_SMALL => Status::DstTooSmall,
        c if c > 0 && c < error_codes::MAX_CODE => Status::Domain(c),
        c => Status::Defect(c),
    }
}

/// Human-readable message for a native code, e.g. `"Corrupted block detected"`.
pub fn describe(code: u32) -> String {
    let raw = (code as zstd_safe::ErrorCode).wrapping_neg();
    format!("{} [{}]", zstd_safe::get_error_name(raw), enum_name_or_hex::<NativeErrorCode>(code))
}

/// Decompression-side conversion: domain codes are caller-visible.
pub(crate) fn decode_error(op: &'static str, status: Status) -> CodecError {
    match status {
        Status::Domain(code) => CodecError::Corrupt { code, reason: describe(code) },
        Status::DstTooSmall => CodecError::defect(op, "destination too small after sizing"),
        Status::Defect(code) => CodecError::defect(op, format!("unexpected result: {}", describe(code))),
        Status::Ok(_) => CodecError::defect(op, "success reported as failure"),
    }
}

/// Compression-side conversion: no error is expected once sized.
pub(crate) fn encode_error(op: &'static str, status: Status) -> CodecError {
    match status {
        Status::DstTooSmall => CodecError::defect(op, "compressed size exceeded the compress bound"),
        Status::Domain(code) | Status::Defect(code) => {
            CodecError::defect(op, format!("unexpected error: {}", describe(code)))
        }
        Status::Ok(_) => CodecError::defect(op, "success reported as failure"),
    }
}
