//! # Hexwire Testkit
//!
//! Testing utilities for the hexwire codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Reference inputs with the exact value or error kind
//!   each decoder must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Named codec configurations
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hexwire_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, got) in verify_all_vectors() {
//!     assert!(matches, "{}: got {}", name, got);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hexwire_testkit::generators::big_quantity;
//!
//! proptest! {
//!     #[test]
//!     fn big_roundtrip(n in big_quantity()) {
//!         let text = hexwire_core::encode_big(&n);
//!         prop_assert_eq!(hexwire_core::decode_big(&text).unwrap(), n);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{all_codecs, CodecFixture};
pub use generators::{big_quantity, byte_string, wire_text};
pub use vectors::{
    all_decode_vectors, encode_vectors, verify_all_vectors, DecodeVector, EncodeVector, Family,
};
