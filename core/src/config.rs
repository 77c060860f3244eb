//! config.rs
//! Tunables shared by the service objects.
//!
//! Defaults reproduce the documented sizing policy; overriding them is mostly
//! useful for tests and benchmarks (e.g. forcing every call onto the slow path).
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMPRESSION_LEVEL, DEFRAG_SLACK_THRESHOLD, FAST_PATH_MIN_SLACK};
use crate::types::CodecError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Level used by `compress` when the caller does not pick one.
    pub level: i32,

    /// Spare capacity required before the plain paths try an in-place call.
    pub fast_path_min_slack: usize,

    /// Slack above which the dictionary paths shrink the destination.
    pub defrag_slack_threshold: usize,

    /// Largest declared content size the decompressor will allocate for.
    /// `None` → unlimited.
    pub max_content_size: Option<u64>,

    /// Contexts created up front in every pool (plain, dictionary, streaming).
    pub prewarm_contexts: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
            fast_path_min_slack: FAST_PATH_MIN_SLACK,
            defrag_slack_threshold: DEFRAG_SLACK_THRESHOLD,
            max_content_size: None,
            prewarm_contexts: 0,
        }
    }
}

impl CodecConfig {
    pub fn new(level: Option<i32>, max_content_size: Option<u64>, prewarm_contexts: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            level: level.unwrap_or(defaults.level),
            max_content_size: max_content_size.or(defaults.max_content_size),
            prewarm_contexts: prewarm_contexts.unwrap_or(defaults.prewarm_contexts),
            ..defaults
        }
    }

    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let config: CodecConfig =
            serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        let (min, max) = (zstd_safe::min_c_level(), zstd_safe::max_c_level());
        if self.level < min || self.level > max {
            return Err(CodecError::Config(format!(
                "level {} outside supported range {}..={}",
                self.level, min, max
            )));
        }
        if self.max_content_size == Some(0) {
            return Err(CodecError::Config("max_content_size must be positive".into()));
        }
        Ok(())
    }
}
