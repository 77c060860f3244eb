//! zreuse-core
//!
//! Allocation-minimizing adapter over the zstd block codec: pooled native
//! contexts, in-place reuse of caller buffers, exact sizing from frame
//! headers, and a streaming fallback for frames without a declared size.

#![deny(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress_bound, Codec, CompressionDict, DecompressionDict, Decoder, Encoder,
    };
    pub use crate::config::CodecConfig;
    pub use crate::telemetry::CodecSnapshot;
    pub use crate::types::CodecError;
}
