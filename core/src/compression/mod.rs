//! compression/mod.rs
//! Pooled one-shot compression and decompression over the zstd codec.
//!
//! Layout, leaf-first:
//! - `bound`, `status`: size estimation and native result classification.
//! - `pin`, `pool`, `dict`: pinned buffer views, context pools, dictionaries.
//! - `compressor`, `decompressor`, `stream`: the sizing engine.
//! - `encoder`, `decoder`, `codec`: service objects owning the pools.

pub mod bound;
pub mod status;
pub mod pin;
pub mod pool;
pub mod dict;
pub mod compressor;
pub mod decompressor;
pub mod stream;
pub mod encoder;
pub mod decoder;
pub mod codec;

pub use bound::{compress_bound, ContentSize};
pub use codec::Codec;
pub use decoder::Decoder;
pub use dict::{CompressionDict, DecompressionDict};
pub use encoder::Encoder;
pub use pool::{CodecContext, ContextPool, PoolGuard};
pub use status::{NativeErrorCode, Status};
pub use stream::StreamDecompressor;
