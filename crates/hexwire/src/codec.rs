//! The Codec: the core hex functions behind a configured prefix convention.
//!
//! The core never emits or requires `0x`. The prefix is a caller-facing
//! convention, so it lives here, driven by [`CodecConfig`].

use hexwire_core::{
    decode, decode_big, decode_uint, decode_uint64, encode, encode_big, encode_uint,
    encode_uint64, strip_prefix, HexError,
};
use num_bigint::BigInt;

use crate::config::{CodecConfig, PrefixPolicy};
use crate::error::{Result, WireError};

/// Stateless hex codec with a fixed configuration.
///
/// Safe to share across threads; every method is a pure function of its
/// input and the configuration.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Byte strings
    // ─────────────────────────────────────────────────────────────────────────

    pub fn encode_bytes(&self, bytes: &[u8]) -> String {
        self.prefixed(encode(bytes))
    }

    pub fn decode_bytes(&self, text: &str) -> Result<Vec<u8>> {
        self.check_prefix(text, "bytes")?;
        decode(text).map_err(|e| rejected(text, "bytes", e))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quantities
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a big quantity; the sign goes before the prefix.
    pub fn encode_big(&self, value: &BigInt) -> String {
        let text = encode_big(value);
        match text.strip_prefix('-') {
            Some(magnitude) => format!("-{}", self.prefixed(magnitude.to_string())),
            None => self.prefixed(text),
        }
    }

    /// Decode a big quantity of at most 256 bits. Never negative.
    pub fn decode_big(&self, text: &str) -> Result<BigInt> {
        self.check_prefix(text, "big")?;
        decode_big(text).map_err(|e| rejected(text, "big", e))
    }

    pub fn encode_uint64(&self, value: u64) -> String {
        self.prefixed(encode_uint64(value))
    }

    pub fn decode_uint64(&self, text: &str) -> Result<u64> {
        self.check_prefix(text, "uint64")?;
        decode_uint64(text).map_err(|e| rejected(text, "uint64", e))
    }

    pub fn encode_uint(&self, value: usize) -> String {
        self.prefixed(encode_uint(value))
    }

    pub fn decode_uint(&self, text: &str) -> Result<usize> {
        self.check_prefix(text, "uint")?;
        decode_uint(text).map_err(|e| rejected(text, "uint", e))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────────────────────

    fn prefixed(&self, digits: String) -> String {
        if self.config.emit_prefix {
            format!("0x{}", digits)
        } else {
            digits
        }
    }

    /// Enforce the prefix policy. Empty input is left to the core so it keeps
    /// its own error kind.
    fn check_prefix(&self, text: &str, kind: &str) -> Result<()> {
        if self.config.decode_prefix == PrefixPolicy::Required
            && !text.is_empty()
            && !strip_prefix(text).1
        {
            tracing::debug!(input = text, kind, "rejected hex {}: missing 0x prefix", kind);
            return Err(WireError::MissingPrefix);
        }
        Ok(())
    }
}

fn rejected(text: &str, kind: &str, e: HexError) -> WireError {
    tracing::debug!(input = text, kind, error = %e, "rejected hex {}: {}", kind, e);
    WireError::Hex(e)
}
