//! telemetry/mod.rs
//! Counters recorded by the service objects and immutable snapshots of them.
//!
//! - Counters are atomics: one service object is shared by many threads.
//! - Snapshots are plain values, serializable for export.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
