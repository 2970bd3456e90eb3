//! Serializable choice of variant and padding.

use serde::{Deserialize, Serialize};

use crate::{decode, encode, encoded_len, Base64Error, Variant};

/// A variant and padding mode, for callers that keep the choice in their
/// own configuration.
///
/// # Example
///
/// ```
/// use base64_variants::Base64Config;
///
/// let config: Base64Config = serde_json::from_str(r#"{"variant": "url-safe", "padding": false}"#).unwrap();
/// assert_eq!(config, Base64Config::URL_SAFE_NO_PAD);
///
/// let mut dst = [0u8; 3];
/// let len = config.encode(&[0xFB, 0xF0], &mut dst).unwrap();
/// assert_eq!(&dst[..len], b"-_A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Base64Config {
    pub variant: Variant,
    pub padding: bool,
}

impl Default for Base64Config {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Base64Config {
    pub const STANDARD: Self = Self::new(Variant::Standard, true);
    pub const STANDARD_NO_PAD: Self = Self::new(Variant::Standard, false);
    pub const URL_SAFE: Self = Self::new(Variant::UrlSafe, true);
    pub const URL_SAFE_NO_PAD: Self = Self::new(Variant::UrlSafe, false);
    pub const MAILBOX_SAFE: Self = Self::new(Variant::MailboxSafe, true);
    pub const MAILBOX_SAFE_NO_PAD: Self = Self::new(Variant::MailboxSafe, false);

    pub const fn new(variant: Variant, padding: bool) -> Self {
        Self { variant, padding }
    }

    /// See [`encoded_len`].
    pub const fn encoded_len(&self, length: usize) -> Option<usize> {
        encoded_len(length, self.padding)
    }

    /// See [`encode`].
    pub fn encode(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Base64Error> {
        encode(src, dst, self.padding, self.variant)
    }

    /// See [`decode`].
    pub fn decode(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, Base64Error> {
        decode(src, dst, self.padding, self.variant)
    }
}
