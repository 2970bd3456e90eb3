//! Alphabet variants and their lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ALPHABET, ALPHABET_MAILBOX, ALPHABET_URL, INVALID};
use crate::Base64Error;

/// Builds the 256-entry symbol -> value map for an alphabet.
const fn reverse_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static DECODE_STANDARD: [u8; 256] = reverse_table(ALPHABET);
static DECODE_URL: [u8; 256] = reverse_table(ALPHABET_URL);
static DECODE_MAILBOX: [u8; 256] = reverse_table(ALPHABET_MAILBOX);

/// A base64 alphabet. The variants differ only in the symbols for 62 and 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `+` and `/`.
    #[default]
    Standard,
    /// `-` and `_`.
    UrlSafe,
    /// `+` and `,`, as used for IMAP folder names.
    MailboxSafe,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::UrlSafe, Variant::MailboxSafe];

    /// The 64 symbols of this variant, indexed by 6-bit value.
    pub const fn alphabet(self) -> &'static [u8; 64] {
        match self {
            Variant::Standard => ALPHABET,
            Variant::UrlSafe => ALPHABET_URL,
            Variant::MailboxSafe => ALPHABET_MAILBOX,
        }
    }

    /// Reverse lookup indexed by raw symbol byte. Bytes outside the alphabet
    /// (including `=`) hold [`INVALID`](crate::INVALID).
    pub fn decode_table(self) -> &'static [u8; 256] {
        match self {
            Variant::Standard => &DECODE_STANDARD,
            Variant::UrlSafe => &DECODE_URL,
            Variant::MailboxSafe => &DECODE_MAILBOX,
        }
    }

    /// Maps the low six bits of `value` to a symbol.
    #[inline]
    pub fn encode_value(self, value: u8) -> u8 {
        self.alphabet()[(value & 0x3f) as usize]
    }

    /// Maps a symbol back to its 6-bit value.
    #[inline]
    pub fn decode_symbol(self, symbol: u8) -> Option<u8> {
        match self.decode_table()[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Canonical name, as used by `Display` and serde.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::UrlSafe => "url-safe",
            Variant::MailboxSafe => "mailbox-safe",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Base64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(Variant::Standard),
            "url-safe" | "urlsafe" | "url" => Ok(Variant::UrlSafe),
            "mailbox-safe" | "mailbox" | "imap" => Ok(Variant::MailboxSafe),
            _ => Err(Base64Error::UnknownVariant(s.to_string())),
        }
    }
}
