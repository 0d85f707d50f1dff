//! The capability interface every codec under test implements.

use core::fmt;

use lexu64::{DecodeError, EncodeError};

use crate::strategy::{Reference, Shift, Width};

/// An implementation of the `lexu64` wire format.
///
/// Implementations must be stateless: the harness may call them from
/// several threads at once.
pub trait Codec: Send + Sync {
    /// Short, stable name used in reports.
    fn name(&self) -> &'static str;

    /// Encodes `value` into the front of `out`, returning the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// [`EncodeError::BufferTooSmall`] if `out` cannot hold the canonical
    /// encoding.
    fn encode(&self, value: u64, out: &mut [u8]) -> Result<usize, EncodeError>;

    /// Decodes a value from the front of `input`, returning it with the
    /// number of bytes consumed.
    ///
    /// # Errors
    ///
    /// [`DecodeError::TruncatedInput`] if `input` is shorter than its length
    /// class.
    fn decode(&self, input: &[u8]) -> Result<(u64, usize), DecodeError>;
}

/// The codec implementations shipped with the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Implementation {
    /// The `lexu64` crate.
    Reference,

    /// Byte-at-a-time shift and mask arithmetic.
    Shift,

    /// Length class from the bit width of the value.
    Width,
}

impl Implementation {
    /// Every shipped implementation, in report order.
    pub const ALL: [Self; 3] = [Self::Reference, Self::Shift, Self::Width];

    /// Instantiates the codec.
    #[must_use]
    pub fn codec(self) -> Box<dyn Codec> {
        match self {
            Self::Reference => Box::new(Reference),
            Self::Shift => Box::new(Shift),
            Self::Width => Box::new(Width),
        }
    }

    /// Instantiates the selected codecs, or all of them if `selected` is
    /// empty. Duplicates are dropped.
    #[must_use]
    pub fn select(selected: &[Self]) -> Vec<Box<dyn Codec>> {
        let mut chosen = if selected.is_empty() {
            Self::ALL.to_vec()
        } else {
            selected.to_vec()
        };
        chosen.sort_unstable();
        chosen.dedup();
        chosen.into_iter().map(Self::codec).collect()
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::Shift => "shift",
            Self::Width => "width",
        })
    }
}
