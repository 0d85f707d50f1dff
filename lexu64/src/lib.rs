//! Order-preserving variable-length encoding for unsigned 64-bit integers.
//!
//! `lexu64` encodes `u64` values into 1–9 bytes such that comparing two
//! encodings byte by byte (as `&[u8]`) gives the same answer as comparing the
//! two numbers. Encoded values can be used directly as keys in an ordered
//! key-value store without a custom comparator.
//!
//! # Encoding
//!
//! The first byte `A0` selects the length class; the decoder never needs to
//! look further to know how many bytes to consume.
//!
//! ```text
//! ┌───────────┬──────────────┬───────────────────────────────────────────────────┬──────────────────────────────┐
//! │ A0        │ Total length │ Value range                                       │ Tail                         │
//! ├───────────┼──────────────┼───────────────────────────────────────────────────┼──────────────────────────────┤
//! │ 0x00-0xF0 │ 1            │ 0 -- 240                                          │ none, A0 is the value        │
//! │ 0xF1-0xF8 │ 2            │ 241 -- 2,287                                      │ (V - 240) mod 256            │
//! │ 0xF9      │ 3            │ 2,288 -- 67,823                                   │ (V - 2288), 2 bytes BE       │
//! │ 0xFA      │ 4            │ 67,824 -- 16,777,215                              │ V, 3 bytes BE                │
//! │ 0xFB      │ 5            │ 16,777,216 -- 4,294,967,295                       │ V, 4 bytes BE                │
//! │ 0xFC      │ 6            │ 4,294,967,296 -- 1,099,511,627,775                │ V, 5 bytes BE                │
//! │ 0xFD      │ 7            │ 1,099,511,627,776 -- 281,474,976,710,655          │ V, 6 bytes BE                │
//! │ 0xFE      │ 8            │ 281,474,976,710,656 -- 72,057,594,037,927,935     │ V, 7 bytes BE                │
//! │ 0xFF      │ 9            │ 72,057,594,037,927,936 -- u64::MAX                │ V, 8 bytes BE                │
//! └───────────┴──────────────┴───────────────────────────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! In the 2-byte class the high bits of `V - 240` are folded into `A0`
//! (`A0 = 241 + (V - 240) / 256`), so tags 241–248 all select the same class.
//!
//! # Canonicality
//!
//! The encoder always picks the shortest class. The 3-byte class is biased by
//! its first value (2288), so all of its byte sequences are canonical. The
//! 2-byte class is biased by 240, one below its first value, which leaves
//! `[0xF1, 0x00]` as a second spelling of 240. Classes 4–9 store `V` without
//! a bias: `[0xFA, 0x00, 0x00, 0x05]` is a well-formed but non-canonical
//! spelling of 5. [`decode`] accepts such sequences; [`decode_canonical`]
//! rejects them with [`DecodeError::NonCanonical`].
//! Only canonical encodings are guaranteed to sort correctly against each
//! other.
//!
//! # Examples
//!
//! ```
//! let mut buf = [0u8; lexu64::MAX_BYTES];
//! let len = lexu64::encode(67_824, &mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0xFA, 0x01, 0x08, 0xF0]);
//!
//! let (value, consumed) = lexu64::decode(&buf[..len]).unwrap();
//! assert_eq!((value, consumed), (67_824, 4));
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[allow(unused_imports)] // vec! macro used in tests
use alloc::{vec, vec::Vec};

mod error;
mod iter;

pub use error::{DecodeError, EncodeError};
pub use iter::{iter, Iter};

/// Maximum number of bytes a `lexu64` encoding can occupy.
pub const MAX_BYTES: usize = 9;

/// Largest value stored as a single literal byte.
const SINGLE_BYTE_MAX: u8 = 240;

/// Bias subtracted from values in the 2-byte class.
const TWO_BYTE_BIAS: u64 = 240;

/// Bias subtracted from values in the 3-byte class.
const THREE_BYTE_BIAS: u64 = 2288;

/// First value of each length class, indexed by total length.
///
/// Index 0 is unused.
const CLASS_MIN: [u64; MAX_BYTES + 1] = [
    0,
    0,
    241,
    2288,
    67_824,
    1 << 24,
    1 << 32,
    1 << 40,
    1 << 48,
    1 << 56,
];

/// Last value of each length class, indexed by total length.
///
/// `CLASS_MAX[n] + 1 == CLASS_MIN[n + 1]` for `n` in 1..9.
const CLASS_MAX: [u64; MAX_BYTES + 1] = [
    0,
    240,
    2287,
    67_823,
    (1 << 24) - 1,
    (1 << 32) - 1,
    (1 << 40) - 1,
    (1 << 48) - 1,
    (1 << 56) - 1,
    u64::MAX,
];

/// Returns the inclusive value range `(min, max)` of the length class with
/// total length `len`, or `None` if `len` is not in `1..=9`.
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::class_bounds(2), Some((241, 2287)));
/// assert_eq!(lexu64::class_bounds(9), Some((1 << 56, u64::MAX)));
/// assert_eq!(lexu64::class_bounds(10), None);
/// ```
#[must_use]
#[allow(clippy::indexing_slicing)] // len checked against MAX_BYTES; .get() unavailable in const
pub const fn class_bounds(len: usize) -> Option<(u64, u64)> {
    if len == 0 || len > MAX_BYTES {
        return None;
    }
    Some((CLASS_MIN[len], CLASS_MAX[len]))
}

/// Returns the canonical encoded length of `value` in bytes (1–9).
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::encoded_len(240), 1);
/// assert_eq!(lexu64::encoded_len(241), 2);
/// assert_eq!(lexu64::encoded_len(67_823), 3);
/// assert_eq!(lexu64::encoded_len(67_824), 4);
/// assert_eq!(lexu64::encoded_len(u64::MAX), 9);
/// ```
#[must_use]
pub const fn encoded_len(value: u64) -> usize {
    if value <= CLASS_MAX[1] {
        1
    } else if value <= CLASS_MAX[2] {
        2
    } else if value <= CLASS_MAX[3] {
        3
    } else if value <= CLASS_MAX[4] {
        4
    } else if value <= CLASS_MAX[5] {
        5
    } else if value <= CLASS_MAX[6] {
        6
    } else if value <= CLASS_MAX[7] {
        7
    } else if value <= CLASS_MAX[8] {
        8
    } else {
        9
    }
}

/// Returns the total encoded length selected by the first byte of an
/// encoding.
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::decoded_len(0xF0), 1);
/// assert_eq!(lexu64::decoded_len(0xF1), 2);
/// assert_eq!(lexu64::decoded_len(0xF9), 3);
/// assert_eq!(lexu64::decoded_len(0xFF), 9);
/// ```
#[must_use]
pub const fn decoded_len(first: u8) -> usize {
    match first {
        0x00..=0xF0 => 1,
        0xF1..=0xF8 => 2,
        0xF9 => 3,
        // 0xFA..=0xFF: tag - 247 tail bytes
        _ => first as usize - 246,
    }
}

/// Encodes `value` into a fixed-size array.
///
/// Returns `(bytes, len)` where `bytes[..len]` holds the canonical encoding.
///
/// # Examples
///
/// ```
/// let (bytes, len) = lexu64::encode_array(2287);
/// assert_eq!(&bytes[..len], &[0xF8, 0xFF]);
/// ```
#[must_use]
pub const fn encode_array(value: u64) -> ([u8; MAX_BYTES], usize) {
    if value <= CLASS_MAX[1] {
        // Mask is a no-op (value <= 240) but keeps the cast lossless.
        return ([(value & 0xFF) as u8, 0, 0, 0, 0, 0, 0, 0, 0], 1);
    }

    if value <= CLASS_MAX[2] {
        // 1..=2047: the top three bits go into the tag.
        let biased = value - TWO_BYTE_BIAS;
        let tag = 0xF1 + ((biased >> 8) & 0x07) as u8;
        return ([tag, (biased & 0xFF) as u8, 0, 0, 0, 0, 0, 0, 0], 2);
    }

    if value <= CLASS_MAX[3] {
        let be = (value - THREE_BYTE_BIAS).to_be_bytes();
        return ([0xF9, be[6], be[7], 0, 0, 0, 0, 0, 0], 3);
    }

    // Remaining classes: tag + value as fixed-width big-endian, no bias.
    let be = value.to_be_bytes();
    if value <= CLASS_MAX[4] {
        ([0xFA, be[5], be[6], be[7], 0, 0, 0, 0, 0], 4)
    } else if value <= CLASS_MAX[5] {
        ([0xFB, be[4], be[5], be[6], be[7], 0, 0, 0, 0], 5)
    } else if value <= CLASS_MAX[6] {
        ([0xFC, be[3], be[4], be[5], be[6], be[7], 0, 0, 0], 6)
    } else if value <= CLASS_MAX[7] {
        ([0xFD, be[2], be[3], be[4], be[5], be[6], be[7], 0, 0], 7)
    } else if value <= CLASS_MAX[8] {
        (
            [0xFE, be[1], be[2], be[3], be[4], be[5], be[6], be[7], 0],
            8,
        )
    } else {
        (
            [0xFF, be[0], be[1], be[2], be[3], be[4], be[5], be[6], be[7]],
            9,
        )
    }
}

/// Encodes `value` into the front of `out`, returning the number of bytes
/// written.
///
/// A buffer of [`MAX_BYTES`] always suffices.
///
/// # Errors
///
/// [`EncodeError::BufferTooSmall`] if `out` is shorter than
/// [`encoded_len(value)`](encoded_len). Nothing is written in that case.
///
/// # Examples
///
/// ```
/// let mut buf = [0u8; 9];
/// assert_eq!(lexu64::encode(241, &mut buf), Ok(2));
/// assert_eq!(&buf[..2], &[0xF1, 0x01]);
///
/// let mut small = [0u8; 1];
/// assert!(lexu64::encode(241, &mut small).is_err());
/// assert_eq!(small, [0]);
/// ```
pub fn encode(value: u64, out: &mut [u8]) -> Result<usize, EncodeError> {
    let (bytes, len) = encode_array(value);
    let available = out.len();
    match (out.get_mut(..len), bytes.get(..len)) {
        (Some(dst), Some(src)) => {
            dst.copy_from_slice(src);
            Ok(len)
        }
        _ => Err(EncodeError::BufferTooSmall {
            required: len,
            available,
        }),
    }
}

/// Encodes `value`, appending the bytes to `buf`.
///
/// # Examples
///
/// ```
/// let mut buf = vec![0xAB];
/// lexu64::append(240, &mut buf);
/// assert_eq!(buf, [0xAB, 0xF0]);
/// ```
#[allow(clippy::indexing_slicing)] // encode_array always returns len in 1..=MAX_BYTES
pub fn append(value: u64, buf: &mut Vec<u8>) {
    let (bytes, len) = encode_array(value);
    buf.extend_from_slice(&bytes[..len]);
}

/// Decodes a `lexu64` from the front of `input`.
///
/// Returns `(value, bytes_consumed)`. Bytes past the encoding are not
/// inspected. Non-canonical encodings (see [Canonicality](crate#canonicality)) are accepted; use
/// [`decode_canonical`] to reject them.
///
/// # Errors
///
/// [`DecodeError::TruncatedInput`] if `input` is shorter than the length
/// class selected by its first byte (or is empty).
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::decode(&[0xF1, 0x01, 0xAA]), Ok((241, 2)));
/// assert!(lexu64::decode(&[0xF9, 0x00]).is_err());
/// ```
#[allow(clippy::many_single_char_names)] // byte destructuring in slice patterns
pub const fn decode(input: &[u8]) -> Result<(u64, usize), DecodeError> {
    let Some((&first, rest)) = input.split_first() else {
        return Err(DecodeError::TruncatedInput {
            expected: 1,
            available: 0,
        });
    };

    if first <= SINGLE_BYTE_MAX {
        return Ok((first as u64, 1));
    }

    let truncated = DecodeError::TruncatedInput {
        expected: decoded_len(first),
        available: input.len(),
    };

    // Slice patterns prove each arm has enough bytes; only the class width
    // is ever read.
    let decoded = match first {
        0xF1..=0xF8 => match rest {
            &[a, ..] => (
                TWO_BYTE_BIAS + (first - 0xF1) as u64 * 256 + a as u64,
                2,
            ),
            _ => return Err(truncated),
        },
        0xF9 => match rest {
            &[a, b, ..] => (
                THREE_BYTE_BIAS + u64::from_be_bytes([0, 0, 0, 0, 0, 0, a, b]),
                3,
            ),
            _ => return Err(truncated),
        },
        0xFA => match rest {
            &[a, b, c, ..] => (u64::from_be_bytes([0, 0, 0, 0, 0, a, b, c]), 4),
            _ => return Err(truncated),
        },
        0xFB => match rest {
            &[a, b, c, d, ..] => (u64::from_be_bytes([0, 0, 0, 0, a, b, c, d]), 5),
            _ => return Err(truncated),
        },
        0xFC => match rest {
            &[a, b, c, d, e, ..] => (u64::from_be_bytes([0, 0, 0, a, b, c, d, e]), 6),
            _ => return Err(truncated),
        },
        0xFD => match rest {
            &[a, b, c, d, e, f, ..] => (u64::from_be_bytes([0, 0, a, b, c, d, e, f]), 7),
            _ => return Err(truncated),
        },
        0xFE => match rest {
            &[a, b, c, d, e, f, g, ..] => (u64::from_be_bytes([0, a, b, c, d, e, f, g]), 8),
            _ => return Err(truncated),
        },
        // 0xFF — only remaining tag since first > SINGLE_BYTE_MAX
        _ => match rest {
            &[a, b, c, d, e, f, g, h, ..] => (u64::from_be_bytes([a, b, c, d, e, f, g, h]), 9),
            _ => return Err(truncated),
        },
    };

    Ok(decoded)
}

/// Decodes a `lexu64` from the front of `input`, rejecting non-canonical
/// encodings.
///
/// # Errors
///
/// - [`DecodeError::TruncatedInput`] as for [`decode`].
/// - [`DecodeError::NonCanonical`] if the decoded value fits a shorter
///   length class than the one used.
///
/// # Examples
///
/// ```
/// assert_eq!(lexu64::decode(&[0xFA, 0x00, 0x00, 0x05]), Ok((5, 4)));
/// assert!(lexu64::decode_canonical(&[0xFA, 0x00, 0x00, 0x05]).is_err());
/// ```
pub const fn decode_canonical(input: &[u8]) -> Result<(u64, usize), DecodeError> {
    match decode(input) {
        Ok((value, len)) if encoded_len(value) != len => {
            Err(DecodeError::NonCanonical { value, len })
        }
        other => other,
    }
}

/// Decodes a `lexu64` from the front of `input` and returns the value along
/// with the bytes that follow it.
///
/// # Errors
///
/// Same as [`decode`].
///
/// # Examples
///
/// ```
/// let (value, rest) = lexu64::decode_split(&[0xF9, 0x00, 0x00, 0x07]).unwrap();
/// assert_eq!(value, 2288);
/// assert_eq!(rest, &[0x07]);
/// ```
pub fn decode_split(input: &[u8]) -> Result<(u64, &[u8]), DecodeError> {
    let (value, consumed) = decode(input)?;
    Ok((value, input.get(consumed..).unwrap_or_default()))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;

    type TestResult = Result<(), DecodeError>;

    /// Every class boundary, its neighbours, and a few values in between.
    fn boundary_samples() -> Vec<u64> {
        let mut samples = Vec::new();
        for len in 1..=MAX_BYTES {
            let (min, max) = class_bounds(len).unwrap_or((0, 0));
            samples.extend([min, min.saturating_add(1), min + (max - min) / 2]);
            samples.extend([max.saturating_sub(1), max]);
        }
        samples.sort_unstable();
        samples.dedup();
        samples
    }

    fn encoded(value: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        append(value, &mut buf);
        buf
    }

    mod class_table {
        use super::*;

        #[test]
        fn classes_are_contiguous() {
            assert_eq!(CLASS_MIN[1], 0);
            for len in 1..MAX_BYTES {
                assert_eq!(
                    CLASS_MAX[len] + 1,
                    CLASS_MIN[len + 1],
                    "gap between class {len} and class {}",
                    len + 1
                );
            }
            assert_eq!(CLASS_MAX[MAX_BYTES], u64::MAX);
        }

        #[test]
        fn biases_match_class_starts() {
            // The 2-byte class starts at tail 0x01 under tag 0xF1.
            assert_eq!(TWO_BYTE_BIAS + 1, CLASS_MIN[2]);
            assert_eq!(THREE_BYTE_BIAS, CLASS_MIN[3]);
        }

        #[test]
        fn out_of_range_lengths() {
            assert_eq!(class_bounds(0), None);
            assert_eq!(class_bounds(MAX_BYTES + 1), None);
        }

        #[test]
        fn decoded_len_covers_every_tag() {
            for tag in 0..=u8::MAX {
                let mut buf = [0u8; MAX_BYTES];
                buf[0] = tag;
                let len = decoded_len(tag);
                assert!((1..=MAX_BYTES).contains(&len));
                match decode(&buf) {
                    Ok((_, consumed)) => assert_eq!(consumed, len, "tag 0x{tag:02X}"),
                    Err(e) => panic!("tag 0x{tag:02X} with full buffer failed: {e}"),
                }
            }
        }
    }

    mod round_trip {
        use super::*;

        #[test]
        fn boundaries_round_trip() -> TestResult {
            for value in boundary_samples() {
                let buf = encoded(value);
                assert_eq!(buf.len(), encoded_len(value), "length of {value}");
                assert_eq!(decode(&buf)?, (value, buf.len()), "round-trip of {value}");
                assert_eq!(decode_canonical(&buf)?, (value, buf.len()));
            }
            Ok(())
        }

        #[test]
        fn slice_and_array_agree() {
            for value in boundary_samples() {
                let mut out = [0xEEu8; MAX_BYTES];
                let (arr, len) = encode_array(value);
                assert_eq!(encode(value, &mut out), Ok(len));
                assert_eq!(out[..len], arr[..len]);
                assert_eq!(encoded(value), &arr[..len]);
            }
        }
    }

    mod exhaustive {
        use super::*;

        /// Every value in the three biased classes, plus ordering between
        /// neighbours.
        #[test]
        fn biased_classes() -> TestResult {
            let mut previous: Option<Vec<u8>> = None;
            for value in 0..=CLASS_MAX[3] + 1 {
                let buf = encoded(value);
                assert_eq!(buf.len(), encoded_len(value), "length of {value}");

                let (decoded, consumed) = decode(&buf)?;
                assert_eq!(decoded, value, "round-trip failed for {value}");
                assert_eq!(consumed, buf.len());

                if let Some(prev) = previous {
                    assert!(prev < buf, "order broken at {value}: {prev:02X?} >= {buf:02X?}");
                }
                previous = Some(buf);
            }
            Ok(())
        }

        #[test]
        fn every_two_byte_sequence() -> TestResult {
            for tag in 0xF1..=0xF8u8 {
                for tail in 0..=u8::MAX {
                    if (tag, tail) == (0xF1, 0x00) {
                        assert_eq!(
                            decode_canonical(&[tag, tail]),
                            Err(DecodeError::NonCanonical { value: 240, len: 2 })
                        );
                        continue;
                    }
                    let (value, consumed) = decode_canonical(&[tag, tail])?;
                    assert_eq!(consumed, 2);
                    assert_eq!(encoded(value), [tag, tail]);
                }
            }
            Ok(())
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn empty_input() {
            assert_eq!(
                decode(&[]),
                Err(DecodeError::TruncatedInput {
                    expected: 1,
                    available: 0
                })
            );
        }

        #[test]
        fn truncated_at_every_tag() {
            for tag in 0xF1..=0xFFu8 {
                let len = decoded_len(tag);
                let mut buf = vec![tag];
                buf.extend(core::iter::repeat_n(0x00u8, len - 2));

                assert_eq!(
                    decode(&buf),
                    Err(DecodeError::TruncatedInput {
                        expected: len,
                        available: len - 1
                    }),
                    "tag 0x{tag:02X} with one byte missing"
                );
            }
        }

        #[test]
        fn every_proper_prefix_is_truncated() {
            for value in boundary_samples() {
                let buf = encoded(value);
                for cut in 0..buf.len() {
                    assert!(
                        matches!(decode(&buf[..cut]), Err(DecodeError::TruncatedInput { .. })),
                        "prefix {cut} of {value} ({buf:02X?}) did not fail as truncated"
                    );
                }
            }
        }

        #[test]
        fn small_buffer_untouched() {
            for value in boundary_samples() {
                let len = encoded_len(value);
                let mut out = vec![0xAAu8; len - 1];
                assert_eq!(
                    encode(value, &mut out),
                    Err(EncodeError::BufferTooSmall {
                        required: len,
                        available: len - 1
                    })
                );
                assert!(out.iter().all(|&b| b == 0xAA), "{value} partially written");
            }
        }

        #[test]
        fn trailing_bytes_not_consumed() -> TestResult {
            assert_eq!(decode(&[0x2A, 0xDE, 0xAD])?, (42, 1));
            assert_eq!(decode(&[0xF1, 0x01, 0xBE, 0xEF])?, (241, 2));

            let (value, rest) = decode_split(&[0xFA, 0x01, 0x08, 0xF0, 0x00, 0x01])?;
            assert_eq!(value, 67_824);
            assert_eq!(rest, &[0x00, 0x01]);
            Ok(())
        }
    }

    mod canonical {
        use super::*;

        #[test]
        fn wide_classes_accept_small_values_leniently() -> TestResult {
            for len in 4..=MAX_BYTES {
                let value = CLASS_MIN[len] - 1;
                let tag = u8::try_from(246 + len).unwrap_or(0xFF);
                let mut buf = vec![tag];
                buf.extend_from_slice(&value.to_be_bytes()[MAX_BYTES - len..]);

                assert_eq!(decode(&buf)?, (value, len), "lenient decode of {buf:02X?}");
                assert_eq!(
                    decode_canonical(&buf),
                    Err(DecodeError::NonCanonical { value, len }),
                    "strict decode of {buf:02X?}"
                );
            }
            Ok(())
        }

        #[test]
        fn all_zero_tails() -> TestResult {
            for tag in 0xF1..=0xFFu8 {
                let len = decoded_len(tag);
                let mut buf = vec![tag];
                buf.extend(core::iter::repeat_n(0x00u8, len - 1));

                let (value, consumed) = decode(&buf)?;
                assert_eq!(consumed, len);
                match tag {
                    0xF1 => {
                        assert_eq!(value, 240);
                        assert!(decode_canonical(&buf).is_err());
                    }
                    0xF2..=0xF9 => {
                        assert_eq!(decode_canonical(&buf)?, (value, len));
                        assert_eq!(encoded(value), buf);
                    }
                    _ => {
                        assert_eq!(value, 0);
                        assert!(decode_canonical(&buf).is_err());
                    }
                }
            }
            Ok(())
        }

        #[test]
        fn all_ones_tails_are_class_maxima() -> TestResult {
            for len in 3..=MAX_BYTES {
                let tag = u8::try_from(246 + len).unwrap_or(0xFF);
                let mut buf = vec![tag];
                buf.extend(core::iter::repeat_n(0xFFu8, len - 1));

                assert_eq!(decode_canonical(&buf)?, (CLASS_MAX[len], len));
            }
            Ok(())
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn boundaries_sort_like_values() {
            let samples = boundary_samples();
            for pair in samples.windows(2) {
                let (a, b) = (encoded(pair[0]), encoded(pair[1]));
                assert!(a < b, "{} -> {a:02X?} not below {} -> {b:02X?}", pair[0], pair[1]);
            }
        }

        #[test]
        fn prefix_free() {
            let samples = boundary_samples();
            for &a in &samples {
                for &b in &samples {
                    if a == b {
                        continue;
                    }
                    let (ea, eb) = (encoded(a), encoded(b));
                    assert!(!eb.starts_with(&ea), "{ea:02X?} is a prefix of {eb:02X?}");
                }
            }
        }
    }

    mod test_vectors {
        use super::*;

        /// Test vectors: `(value, expected_bytes)`.
        ///
        /// Any other implementation of this format must reproduce these.
        const VECTORS: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (1, &[0x01]),
            (240, &[0xF0]),
            (241, &[0xF1, 0x01]),
            (2287, &[0xF8, 0xFF]),
            (2288, &[0xF9, 0x00, 0x00]),
            (67_823, &[0xF9, 0xFF, 0xFF]),
            (67_824, &[0xFA, 0x01, 0x08, 0xF0]),
            ((1 << 24) - 1, &[0xFA, 0xFF, 0xFF, 0xFF]),
            (1 << 24, &[0xFB, 0x01, 0x00, 0x00, 0x00]),
            ((1 << 32) - 1, &[0xFB, 0xFF, 0xFF, 0xFF, 0xFF]),
            (1 << 32, &[0xFC, 0x01, 0x00, 0x00, 0x00, 0x00]),
            ((1 << 40) - 1, &[0xFC, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
            (1 << 40, &[0xFD, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
            ((1 << 48) - 1, &[0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
            (1 << 48, &[0xFE, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
            (
                (1 << 56) - 1,
                &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            ),
            (
                1 << 56,
                &[0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            ),
            (
                u64::MAX,
                &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            ),
        ];

        #[test]
        fn encode_vectors() {
            for &(value, expected) in VECTORS {
                let buf = encoded(value);
                assert_eq!(
                    buf.as_slice(),
                    expected,
                    "encode({value}) mismatch: got {buf:02X?}, expected {expected:02X?}"
                );
                assert_eq!(encoded_len(value), expected.len());
            }
        }

        #[test]
        fn decode_vectors() -> TestResult {
            for &(expected_value, bytes) in VECTORS {
                let (value, consumed) = decode_canonical(bytes)?;
                assert_eq!(
                    value, expected_value,
                    "decode({bytes:02X?}): got {value}, expected {expected_value}"
                );
                assert_eq!(consumed, bytes.len());
            }
            Ok(())
        }
    }

    #[cfg(feature = "bolero")]
    mod property {
        use super::*;

        #[test]
        #[cfg_attr(miri, ignore)]
        fn round_trip() {
            bolero::check!().with_arbitrary::<u64>().for_each(|&value| {
                let buf = encoded(value);
                let (decoded, consumed) = decode(&buf).unwrap_or_else(|e| {
                    panic!("round-trip decode failed for {value}: {e}");
                });
                assert_eq!(decoded, value, "round-trip failed for {value}");
                assert_eq!(consumed, buf.len());
                assert_eq!(encoded_len(value), buf.len());
            });
        }

        /// `a < b ⟹ encode(a) < encode(b)` lexicographically.
        #[test]
        #[cfg_attr(miri, ignore)]
        fn lexicographic_order() {
            bolero::check!()
                .with_arbitrary::<(u64, u64)>()
                .for_each(|&(a, b)| {
                    let (enc_a, len_a) = encode_array(a);
                    let (enc_b, len_b) = encode_array(b);
                    let slice_a = &enc_a[..len_a];
                    let slice_b = &enc_b[..len_b];
                    assert_eq!(
                        a.cmp(&b),
                        slice_a.cmp(slice_b),
                        "order mismatch: {a} vs {b}, \
                         encoded {slice_a:02X?} vs {slice_b:02X?}",
                    );
                });
        }

        #[test]
        #[cfg_attr(miri, ignore)]
        fn prefix_free() {
            bolero::check!()
                .with_arbitrary::<(u64, u64)>()
                .for_each(|&(a, b)| {
                    if a == b {
                        return;
                    }
                    let (ea, eb) = (encoded(a), encoded(b));
                    assert!(!eb.starts_with(&ea), "{ea:02X?} is a prefix of {eb:02X?}");
                    assert!(!ea.starts_with(&eb), "{eb:02X?} is a prefix of {ea:02X?}");
                });
        }

        #[test]
        #[cfg_attr(miri, ignore)]
        fn decode_never_panics() {
            bolero::check!().with_arbitrary::<Vec<u8>>().for_each(|buf| {
                let _ = decode(buf);
                let _ = decode_canonical(buf);
            });
        }

        #[test]
        #[cfg_attr(miri, ignore)]
        fn canonical_decode_is_inverse_of_encode() {
            bolero::check!().with_arbitrary::<Vec<u8>>().for_each(|buf| {
                if let Ok((value, consumed)) = decode_canonical(buf) {
                    assert_eq!(
                        encoded(value).as_slice(),
                        &buf[..consumed],
                        "decode_canonical({:02X?}) = {value} does not re-encode",
                        &buf[..consumed],
                    );
                }
            });
        }
    }
}
