//! Test fixtures and helpers.
//!
//! Named codec configurations shared by integration tests.

use hexwire::{Codec, CodecConfig, PrefixPolicy};

/// A codec paired with a label for assertion messages.
pub struct CodecFixture {
    pub name: &'static str,
    pub codec: Codec,
}

impl CodecFixture {
    /// Default codec: optional prefix on decode, `0x` on encode.
    pub fn lenient() -> Self {
        Self {
            name: "lenient",
            codec: Codec::default(),
        }
    }

    /// Prefix required on decode.
    pub fn strict() -> Self {
        Self {
            name: "strict",
            codec: Codec::new(CodecConfig {
                decode_prefix: PrefixPolicy::Required,
                emit_prefix: true,
            }),
        }
    }

    /// No prefix on encode, matching the bare core functions.
    pub fn bare() -> Self {
        Self {
            name: "bare",
            codec: Codec::new(CodecConfig {
                decode_prefix: PrefixPolicy::Optional,
                emit_prefix: false,
            }),
        }
    }

    /// Whether decoders of this fixture accept text without a prefix.
    pub fn accepts_bare(&self) -> bool {
        self.codec.config().decode_prefix == PrefixPolicy::Optional
    }
}

/// All codec fixtures.
pub fn all_codecs() -> Vec<CodecFixture> {
    vec![
        CodecFixture::lenient(),
        CodecFixture::strict(),
        CodecFixture::bare(),
    ]
}
