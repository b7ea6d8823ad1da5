//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Whether decoders insist on the `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixPolicy {
    /// Prefixed and bare digits are both accepted.
    #[default]
    Optional,
    /// Bare digits fail with `MissingPrefix`.
    Required,
}

/// Configuration for the [`Codec`](crate::Codec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Prefix handling on decode.
    pub decode_prefix: PrefixPolicy,
    /// Whether encoders prepend `0x`.
    pub emit_prefix: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            decode_prefix: PrefixPolicy::Optional,
            emit_prefix: true,
        }
    }
}
