//! Base64 encoding and decoding over caller-supplied buffers.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 (`+` `/`)
//! - URL-safe base64 (`-` `_`)
//! - IMAP mailbox-name base64 (`+` `,`)
//! - Optional `=` padding, chosen per call
//!
//! Neither direction allocates. Size the output with [`encoded_len`] or
//! [`decoded_len_estimate`]. Decoding is strict: only the canonical encoding
//! of a byte string is accepted.
//!
//! # Example
//!
//! ```
//! use base64_variants::{decode, decoded_len_estimate, encode, encoded_len, Variant};
//!
//! let data = b"hello world";
//! let mut encoded = vec![0u8; encoded_len(data.len(), true).unwrap()];
//! let len = encode(data, &mut encoded, true, Variant::Standard).unwrap();
//! assert_eq!(&encoded[..len], b"aGVsbG8gd29ybGQ=");
//!
//! let mut decoded = vec![0u8; decoded_len_estimate(len)];
//! let len = decode(&encoded[..len], &mut decoded, true, Variant::Standard).unwrap();
//! assert_eq!(&decoded[..len], data);
//! ```

use thiserror::Error;

mod config;
mod constants;
mod decode;
mod encode;
mod variant;

pub use config::Base64Config;
pub use constants::{ALPHABET, ALPHABET_MAILBOX, ALPHABET_URL, INVALID, PAD};
pub use decode::{decode, decoded_len_estimate};
pub use encode::{encode, encoded_len};
pub use variant::Variant;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input is not valid base64 for the requested variant and padding.
    #[error("INVALID_BASE64_STRING")]
    Malformed,
    /// The destination buffer cannot hold the output.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    OutputTooSmall { needed: usize, available: usize },
    /// A variant name that does not match any alphabet.
    #[error("unknown base64 variant: {0}")]
    UnknownVariant(String),
}
