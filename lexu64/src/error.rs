//! Codec errors.

/// Errors that can occur when decoding a `lexu64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is shorter than the length class selected by its first byte.
    #[error("truncated lexu64: length class needs {expected} bytes, only {available} available")]
    TruncatedInput {
        /// Total length demanded by the first byte (1 for empty input).
        expected: usize,

        /// Bytes actually present.
        available: usize,
    },

    /// The value fits a shorter length class than the one it was encoded in.
    #[error("non-canonical lexu64: {value} encoded in {len} bytes")]
    NonCanonical {
        /// The decoded value.
        value: u64,

        /// The length of the over-wide encoding.
        len: usize,
    },
}

/// Errors that can occur when encoding a `lexu64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The output buffer cannot hold the canonical encoding.
    #[error("output buffer too small for lexu64: need {required} bytes, have {available}")]
    BufferTooSmall {
        /// Canonical length of the value.
        required: usize,

        /// Length of the supplied buffer.
        available: usize,
    },
}
