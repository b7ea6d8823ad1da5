//! # Hexwire
//!
//! Hex text codec for wire payloads such as JSON-RPC: byte strings,
//! arbitrary-precision integers, and fixed-width unsigned quantities.
//!
//! ## Overview
//!
//! - **Byte strings** always use two digits per byte
//! - **Quantities** are canonical: no leading zero digits except for `0`
//! - **Decoding** is strict: malformed or ambiguous text is rejected with a
//!   named [`HexError`], never truncated or guessed at
//!
//! ## Usage
//!
//! ```rust
//! use hexwire::{Codec, CodecConfig, PrefixPolicy};
//!
//! let codec = Codec::default();
//! assert_eq!(codec.encode_uint64(0xbbb), "0xbbb");
//! assert_eq!(codec.decode_uint64("0xbBb").unwrap(), 0xbbb);
//!
//! let strict = Codec::new(CodecConfig {
//!     decode_prefix: PrefixPolicy::Required,
//!     ..CodecConfig::default()
//! });
//! assert!(strict.decode_bytes("ff").is_err());
//! ```
//!
//! ## Re-exports
//!
//! - `hexwire::core` - the pure codec functions and wire newtypes

pub mod codec;
pub mod config;
pub mod error;

// Re-export the component crate
pub use hexwire_core as core;

pub use codec::Codec;
pub use config::{CodecConfig, PrefixPolicy};
pub use error::{Result, WireError};

// Re-export commonly used core types
pub use hexwire_core::{HexBig, HexBytes, HexError, HexU64, HexUint};
