//! constants.rs
//! Sizing thresholds, default level, and the stable native error codes.

/// Default compression level (mirrors the native `ZSTD_CLEVEL_DEFAULT`).
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Minimum spare capacity required before the plain paths attempt an
/// in-place call without resizing the destination.
pub const FAST_PATH_MIN_SLACK: usize = 1024;

/// Slack above which the dictionary paths re-allocate the destination tightly.
pub const DEFRAG_SLACK_THRESHOLD: usize = 4096;

/// Inputs below this size get an extra margin in the compress bound (128 KiB).
pub const BOUND_LOW_LIMIT: usize = 128 * 1024;

/// Magic number opening a formatted (trained) zstd dictionary, little endian.
pub const MAGIC_DICTIONARY: u32 = 0xEC30_A437;

/// Native error codes. Values are pinned by the codec since v1.3.1.
///
/// A failing native call returns `(size_t)-code`.
pub mod error_codes {
    pub const GENERIC: u32                = 1;
    pub const PREFIX_UNKNOWN: u32         = 10;
    pub const VERSION_UNSUPPORTED: u32    = 12;
    pub const FRAME_PARAM_UNSUPPORTED: u32 = 14;
    pub const WINDOW_TOO_LARGE: u32       = 16;
    pub const CORRUPTION_DETECTED: u32    = 20;
    pub const CHECKSUM_WRONG: u32         = 22;
    pub const LITERALS_HEADER_WRONG: u32  = 24;
    pub const DICTIONARY_CORRUPTED: u32   = 30;
    pub const DICTIONARY_WRONG: u32       = 32;
    pub const DICTIONARY_CREATION_FAILED: u32 = 34;
    pub const PARAMETER_UNSUPPORTED: u32  = 40;
    pub const PARAMETER_OUT_OF_BOUND: u32 = 42;
    pub const MEMORY_ALLOCATION: u32      = 64;
    pub const DST_SIZE_TOO_SMALL: u32     = 70;
    pub const SRC_SIZE_WRONG: u32         = 72;
    pub const DST_BUFFER_NULL: u32        = 74;
    /// Upper end of the documented range; anything at or above is a defect.
    pub const MAX_CODE: u32               = 120;
}
