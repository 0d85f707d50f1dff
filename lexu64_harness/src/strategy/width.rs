use lexu64::{DecodeError, EncodeError, MAX_BYTES};

use crate::Codec;

/// Picks the length class from the bit width of the value and copies the
/// tail straight out of `to_be_bytes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Width;

/// Total length indexed by tag byte minus 0xF0; `0` marks the literal 0xF0.
const TAG_LEN: [usize; 16] = [0, 2, 2, 2, 2, 2, 2, 2, 2, 3, 4, 5, 6, 7, 8, 9];

impl Width {
    fn len(value: u64) -> usize {
        if value <= 240 {
            1
        } else if value <= 2287 {
            2
        } else if value <= 67_823 {
            3
        } else {
            // At least 17 significant bits here, so at least 3 tail bytes.
            let significant_bytes = 8 - (value.leading_zeros() / 8) as usize;
            significant_bytes + 1
        }
    }
}

impl Codec for Width {
    fn name(&self) -> &'static str {
        "width"
    }

    #[allow(clippy::indexing_slicing)] // len in 1..=MAX_BYTES, dst.len() == len
    fn encode(&self, value: u64, out: &mut [u8]) -> Result<usize, EncodeError> {
        let len = Self::len(value);
        let available = out.len();
        let Some(dst) = out.get_mut(..len) else {
            return Err(EncodeError::BufferTooSmall {
                required: len,
                available,
            });
        };

        if len == 1 {
            dst[0] = (value & 0xFF) as u8;
            return Ok(1);
        }

        let (tag, payload) = match len {
            2 => {
                let biased = value - 240;
                (0xF1 + (biased >> 8), biased)
            }
            3 => (0xF9, value - 2288),
            _ => (0xF6 + len as u64, value),
        };

        let be = payload.to_be_bytes();
        dst[0] = (tag & 0xFF) as u8;
        dst[1..].copy_from_slice(&be[MAX_BYTES - len..]);
        Ok(len)
    }

    #[allow(clippy::indexing_slicing)] // tag >= 0xF1 here; tail.len() <= 8
    fn decode(&self, input: &[u8]) -> Result<(u64, usize), DecodeError> {
        let Some((&first, rest)) = input.split_first() else {
            return Err(DecodeError::TruncatedInput {
                expected: 1,
                available: 0,
            });
        };

        if first <= 0xF0 {
            return Ok((u64::from(first), 1));
        }

        let len = TAG_LEN[usize::from(first - 0xF0)];
        let Some(tail) = rest.get(..len - 1) else {
            return Err(DecodeError::TruncatedInput {
                expected: len,
                available: input.len(),
            });
        };

        let mut be = [0u8; 8];
        be[8 - tail.len()..].copy_from_slice(tail);
        let raw = u64::from_be_bytes(be);

        let value = match first {
            0xF1..=0xF8 => 240 + u64::from(first - 0xF1) * 256 + raw,
            0xF9 => 2288 + raw,
            _ => raw,
        };
        Ok((value, len))
    }
}
