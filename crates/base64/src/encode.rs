//! Base64 encoding into a caller-supplied buffer.

use tracing::debug;

use crate::constants::PAD;
use crate::{Base64Error, Variant};

/// Number of symbols produced when encoding `length` bytes.
///
/// Unpadded output is `ceil(length * 8 / 6)` symbols, padded output is
/// `ceil(length / 3) * 4`. Returns `None` if the result does not fit in a
/// `usize`.
///
/// # Example
///
/// ```
/// use base64_variants::encoded_len;
///
/// assert_eq!(encoded_len(1, true), Some(4));
/// assert_eq!(encoded_len(1, false), Some(2));
/// assert_eq!(encoded_len(5, false), Some(7));
/// ```
pub const fn encoded_len(length: usize, padding: bool) -> Option<usize> {
    let complete = match (length / 3).checked_mul(4) {
        Some(n) => n,
        None => return None,
    };
    let tail = match (length % 3, padding) {
        (0, _) => 0,
        (_, true) => 4,
        (1, false) => 2,
        _ => 3,
    };
    complete.checked_add(tail)
}

/// Encodes `src` into `dst` and returns the number of symbols written.
///
/// Every input is valid. The only failure is a `dst` shorter than
/// [`encoded_len`], reported as [`Base64Error::OutputTooSmall`] before
/// anything is written. Bytes of `dst` past the returned length are left
/// untouched.
///
/// # Example
///
/// ```
/// use base64_variants::{encode, Variant};
///
/// let mut dst = [0u8; 8];
/// let len = encode(b"hello", &mut dst, true, Variant::Standard).unwrap();
/// assert_eq!(&dst[..len], b"aGVsbG8=");
/// ```
pub fn encode(
    src: &[u8],
    dst: &mut [u8],
    padding: bool,
    variant: Variant,
) -> Result<usize, Base64Error> {
    let needed = encoded_len(src.len(), padding).unwrap_or(usize::MAX);
    if dst.len() < needed {
        debug!(target: "base64", needed, available = dst.len(), "encode output buffer too small");
        return Err(Base64Error::OutputTooSmall {
            needed,
            available: dst.len(),
        });
    }

    let table = variant.alphabet();
    let mut blocks = src.chunks_exact(3);
    let mut offset = 0;

    for block in &mut blocks {
        let ac = (block[0] as u32) << 16 | (block[1] as u32) << 8 | block[2] as u32;
        dst[offset] = table[(ac >> 18) as usize];
        dst[offset + 1] = table[((ac >> 12) & 0x3f) as usize];
        dst[offset + 2] = table[((ac >> 6) & 0x3f) as usize];
        dst[offset + 3] = table[(ac & 0x3f) as usize];
        offset += 4;
    }

    match *blocks.remainder() {
        [o1] => {
            let ac = (o1 as u32) << 16;
            dst[offset] = table[(ac >> 18) as usize];
            dst[offset + 1] = table[((ac >> 12) & 0x3f) as usize];
            offset += 2;
            if padding {
                dst[offset] = PAD;
                dst[offset + 1] = PAD;
                offset += 2;
            }
        }
        [o1, o2] => {
            let ac = (o1 as u32) << 16 | (o2 as u32) << 8;
            dst[offset] = table[(ac >> 18) as usize];
            dst[offset + 1] = table[((ac >> 12) & 0x3f) as usize];
            dst[offset + 2] = table[((ac >> 6) & 0x3f) as usize];
            offset += 3;
            if padding {
                dst[offset] = PAD;
                offset += 1;
            }
        }
        _ => {}
    }

    Ok(offset)
}
