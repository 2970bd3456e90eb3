//! Base64 decoding into a caller-supplied buffer.
//!
//! The decoder is a bit accumulator: every symbol contributes six bits, most
//! significant first, and a byte is emitted whenever eight bits are pending.
//! Input is rejected as a whole if it is not the canonical encoding of some
//! byte string under the chosen variant and padding mode.

use tracing::{debug, trace};

use crate::constants::{INVALID, PAD};
use crate::{Base64Error, Variant};

/// Why an input was rejected. Only surfaced through tracing; callers see
/// [`Base64Error::Malformed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// A byte outside the alphabet.
    InvalidSymbol { index: usize, byte: u8 },
    /// `=` in the wrong place or in the wrong amount.
    MisplacedPadding { index: usize },
    /// Padding is required but the input is not a whole number of groups.
    MissingPadding,
    /// A final group with a single symbol.
    TruncatedGroup,
    /// Set bits below the last whole byte.
    TrailingBits,
}

/// Upper bound on the decoded size of `length` symbols: `floor(length * 3 / 4)`.
///
/// Sizing `dst` with this is always enough. For padded input the length is
/// a multiple of 4 and the bound is `length / 4 * 3`.
///
/// # Example
///
/// ```
/// use base64_variants::decoded_len_estimate;
///
/// assert_eq!(decoded_len_estimate(4), 3);
/// assert_eq!(decoded_len_estimate(2), 1);
/// assert_eq!(decoded_len_estimate(7), 5);
/// ```
pub const fn decoded_len_estimate(length: usize) -> usize {
    length / 4 * 3 + length % 4 * 3 / 4
}

/// Number of bytes `src` decodes to if it is valid.
fn decoded_len(src: &[u8], padding: bool) -> usize {
    let pads = if padding {
        src.iter().rev().take(2).take_while(|&&c| c == PAD).count()
    } else {
        0
    };
    decoded_len_estimate(src.len() - pads)
}

/// Decodes `src` into `dst` and returns the number of bytes written.
///
/// With `padding` set, the input must be a whole number of 4-symbol groups
/// and may end in `=` or `==`. Without it, `=` is not accepted anywhere.
/// Any invalid symbol, malformed padding, lone trailing symbol or non-zero
/// trailing bits fails the whole input with [`Base64Error::Malformed`]; the
/// contents of `dst` are then unspecified.
///
/// # Errors
///
/// - [`Base64Error::Malformed`] if `src` is not valid base64.
/// - [`Base64Error::OutputTooSmall`] if `dst` cannot hold the decoded bytes.
///   Nothing is written in that case.
///
/// # Example
///
/// ```
/// use base64_variants::{decode, Variant};
///
/// let mut dst = [0u8; 6];
/// let len = decode(b"aGVsbG8=", &mut dst, true, Variant::Standard).unwrap();
/// assert_eq!(&dst[..len], b"hello");
/// ```
pub fn decode(
    src: &[u8],
    dst: &mut [u8],
    padding: bool,
    variant: Variant,
) -> Result<usize, Base64Error> {
    let needed = decoded_len(src, padding);
    if dst.len() < needed {
        debug!(target: "base64", needed, available = dst.len(), "decode output buffer too small");
        return Err(Base64Error::OutputTooSmall {
            needed,
            available: dst.len(),
        });
    }

    decode_into(src, dst, padding, variant.decode_table()).map_err(|rejection| {
        trace!(target: "base64", %variant, padding, ?rejection, "rejected base64 input");
        Base64Error::Malformed
    })
}

/// Runs the accumulator. `dst` must hold at least `decoded_len(src)` bytes.
fn decode_into(
    src: &[u8],
    dst: &mut [u8],
    padding: bool,
    table: &[u8; 256],
) -> Result<usize, Rejection> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut written = 0;
    let mut pads = 0;

    for (index, &byte) in src.iter().enumerate() {
        if padding && byte == PAD {
            pads += 1;
            if pads > 2 {
                return Err(Rejection::MisplacedPadding { index });
            }
            continue;
        }
        if pads > 0 {
            return Err(Rejection::MisplacedPadding { index });
        }

        let value = table[byte as usize];
        if value == INVALID {
            return Err(Rejection::InvalidSymbol { index, byte });
        }

        acc = (acc << 6) | value as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            dst[written] = (acc >> bits) as u8;
            written += 1;
            acc &= (1 << bits) - 1;
        }
    }

    if padding && src.len() % 4 != 0 {
        return Err(if pads > 0 {
            Rejection::MisplacedPadding {
                index: src.len() - pads,
            }
        } else {
            Rejection::MissingPadding
        });
    }

    // Six bits per symbol leave 0, 6, 4 or 2 pending bits for a final group
    // of 0, 1, 2 or 3 data symbols.
    if bits == 6 {
        return Err(Rejection::TruncatedGroup);
    }
    if acc != 0 {
        return Err(Rejection::TrailingBits);
    }

    Ok(written)
}
