/// Standard base64 alphabet (RFC 4648 section 4).
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// IMAP mailbox-name alphabet (RFC 3501 section 5.1.3, uses , instead of /).
pub const ALPHABET_MAILBOX: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+,";

/// Padding character.
pub const PAD: u8 = b'=';

/// Reverse-table entry for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;
