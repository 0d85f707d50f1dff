use lexu64::{DecodeError, EncodeError};

use crate::Codec;

/// The `lexu64` crate itself: a fully unrolled branch chain on encode and
/// slice-pattern dispatch on decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl Codec for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    #[inline]
    fn encode(&self, value: u64, out: &mut [u8]) -> Result<usize, EncodeError> {
        lexu64::encode(value, out)
    }

    #[inline]
    fn decode(&self, input: &[u8]) -> Result<(u64, usize), DecodeError> {
        lexu64::decode(input)
    }
}
