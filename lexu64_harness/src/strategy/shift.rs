use lexu64::{DecodeError, EncodeError};

use crate::Codec;

/// Writes and reads the tail one byte at a time with shifts and masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shift;

impl Shift {
    fn len(value: u64) -> usize {
        match value {
            0..=240 => 1,
            241..=2287 => 2,
            2288..=67_823 => 3,
            67_824..=0xFF_FFFF => 4,
            0x100_0000..=0xFFFF_FFFF => 5,
            0x1_0000_0000..=0xFF_FFFF_FFFF => 6,
            0x100_0000_0000..=0xFFFF_FFFF_FFFF => 7,
            0x1_0000_0000_0000..=0xFF_FFFF_FFFF_FFFF => 8,
            _ => 9,
        }
    }
}

/// Low byte of `v`.
#[inline]
const fn low(v: u64) -> u8 {
    (v & 0xFF) as u8
}

impl Codec for Shift {
    fn name(&self) -> &'static str {
        "shift"
    }

    fn encode(&self, value: u64, out: &mut [u8]) -> Result<usize, EncodeError> {
        let len = Self::len(value);
        let available = out.len();
        let Some((first, tail)) = out.get_mut(..len).and_then(<[u8]>::split_first_mut) else {
            return Err(EncodeError::BufferTooSmall {
                required: len,
                available,
            });
        };

        let (tag, payload) = match len {
            1 => (value, 0),
            2 => {
                let v = value - 240;
                (241 + (v >> 8), v)
            }
            3 => (249, value - 2288),
            n => (246 + n as u64, value),
        };

        *first = low(tag);
        for (i, byte) in tail.iter_mut().rev().enumerate() {
            *byte = low(payload >> (8 * i));
        }
        Ok(len)
    }

    fn decode(&self, input: &[u8]) -> Result<(u64, usize), DecodeError> {
        let Some(&first) = input.first() else {
            return Err(DecodeError::TruncatedInput {
                expected: 1,
                available: 0,
            });
        };

        let len = match first {
            0..=240 => return Ok((u64::from(first), 1)),
            241..=248 => 2,
            249 => 3,
            _ => usize::from(first) - 246,
        };

        let Some(tail) = input.get(1..len) else {
            return Err(DecodeError::TruncatedInput {
                expected: len,
                available: input.len(),
            });
        };

        let raw = tail.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        let value = match len {
            2 => 240 + (u64::from(first - 241) << 8) + raw,
            3 => 2288 + raw,
            _ => raw,
        };
        Ok((value, len))
    }
}
