//! compression/dict.rs
//! Pre-built dictionaries wrapped with their prepared native state.
//!
//! Both types are immutable once created and `Send + Sync`; share them across
//! threads behind an `Arc`. Any blob is accepted: formatted (trained)
//! dictionaries carry an id that frames reference, anything else is used as
//! raw prefix content.
//!
//! Frames compressed with a dictionary carry a content checksum. Decoding with
//! the wrong dictionary fails with `Corrupt` as soon as the output differs. A
//! payload that never matches into the dictionary (e.g. one that only repeats
//! itself) yields the same bytes under any dictionary and decodes successfully.
use std::fmt;

use zstd_safe::{CDict, DDict};

use crate::compression::bound::dict_id_of;
use crate::constants::DEFAULT_COMPRESSION_LEVEL;
use crate::types::CodecError;

/// Compression-side dictionary, digested for a fixed level.
pub struct CompressionDict {
    cdict: CDict<'static>,
    level: i32,
    id: Option<u32>,
    size: usize,
}

impl CompressionDict {
    pub fn new(raw: &[u8], level: i32) -> Result<Self, CodecError> {
        if raw.is_empty() {
            return Err(CodecError::DictionaryCreation("empty dictionary".into()));
        }
        let cdict = CDict::try_create(raw, level).ok_or_else(|| {
            CodecError::DictionaryCreation(format!("native CDict creation failed ({} bytes)", raw.len()))
        })?;
        let id = dict_id_of(raw);
        tracing::debug!(size = raw.len(), level, ?id, "created compression dictionary");
        Ok(Self { cdict, level, id, size: raw.len() })
    }

    pub fn with_default_level(raw: &[u8]) -> Result<Self, CodecError> {
        Self::new(raw, DEFAULT_COMPRESSION_LEVEL)
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn dict_id(&self) -> Option<u32> {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn native(&self) -> &CDict<'static> {
        &self.cdict
    }
}

impl fmt::Debug for CompressionDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionDict")
            .field("level", &self.level)
            .field("id", &self.id)
            .field("size", &self.size)
            .finish()
    }
}

/// Decompression-side dictionary.
pub struct DecompressionDict {
    ddict: DDict<'static>,
    id: Option<u32>,
    size: usize,
}

impl DecompressionDict {
    pub fn new(raw: &[u8]) -> Result<Self, CodecError> {
        if raw.is_empty() {
            return Err(CodecError::DictionaryCreation("empty dictionary".into()));
        }
        let ddict = DDict::try_create(raw).ok_or_else(|| {
            CodecError::DictionaryCreation(format!("native DDict creation failed ({} bytes)", raw.len()))
        })?;
        let id = dict_id_of(raw);
        tracing::debug!(size = raw.len(), ?id, "created decompression dictionary");
        Ok(Self { ddict, id, size: raw.len() })
    }

    pub fn dict_id(&self) -> Option<u32> {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn native(&self) -> &DDict<'static> {
        &self.ddict
    }
}

impl fmt::Debug for DecompressionDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecompressionDict")
            .field("id", &self.id)
            .field("size", &self.size)
            .finish()
    }
}
