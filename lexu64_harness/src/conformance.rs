//! Byte-for-byte conformance checks.
//!
//! Every check runs to completion and collects all failures, so a report
//! shows every broken vector rather than only the first.

use core::fmt;

use lexu64::{DecodeError, EncodeError, MAX_BYTES};

use crate::{oracle::OracleVector, Codec};

/// What went wrong for a single vector or sample.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    /// `encode` wrote the wrong number of bytes.
    #[error(
        "encode length: expected {expected}, got {actual} (expected bytes {}, got {})",
        hex::encode(expected_bytes),
        hex::encode(actual_bytes)
    )]
    EncodeLength {
        /// Expected length.
        expected: usize,
        /// Length reported by the codec.
        actual: usize,
        /// Expected bytes.
        expected_bytes: Vec<u8>,
        /// Bytes the codec wrote.
        actual_bytes: Vec<u8>,
    },

    /// `encode` wrote the right number of bytes, but not the right bytes.
    #[error(
        "encode bytes: expected {}, got {}",
        hex::encode(expected),
        hex::encode(actual)
    )]
    EncodeBytes {
        /// Expected bytes.
        expected: Vec<u8>,
        /// Bytes the codec wrote.
        actual: Vec<u8>,
    },

    /// `decode` returned the wrong value.
    #[error("decode value: expected {expected}, got {actual}")]
    DecodeValue {
        /// Expected value.
        expected: u64,
        /// Value returned by the codec.
        actual: u64,
    },

    /// `decode` consumed the wrong number of bytes.
    #[error("decode length: expected {expected}, got {actual}")]
    DecodeLength {
        /// Expected consumed length.
        expected: usize,
        /// Length returned by the codec.
        actual: usize,
    },

    /// Encodings of ascending values did not sort ascending.
    #[error(
        "order: {previous} encodes to {}, not below {}",
        hex::encode(previous_bytes),
        hex::encode(actual_bytes)
    )]
    Order {
        /// The smaller value of the pair.
        previous: u64,
        /// Its encoding.
        previous_bytes: Vec<u8>,
        /// Encoding of the current (larger) value.
        actual_bytes: Vec<u8>,
    },

    /// `encode` failed outright.
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),

    /// `decode` failed outright.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// A failure tied to the vector (or sample) that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("vector {index} (value {value}): {kind}")]
pub struct Failure {
    /// Position in the checked table.
    pub index: usize,

    /// The value under test.
    pub value: u64,

    /// What went wrong.
    pub kind: FailureKind,
}

/// Outcome of running one codec through a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the codec under test.
    pub codec: &'static str,

    /// Number of vectors (or samples) checked.
    pub checked: usize,

    /// Every failure found, in table order.
    pub failures: Vec<Failure>,
}

impl Report {
    /// Whether every check passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts a failing report into an error.
    ///
    /// # Errors
    ///
    /// [`ConformanceError`] carrying every failure if any check failed.
    pub fn into_result(self) -> Result<(), ConformanceError> {
        if self.is_pass() {
            Ok(())
        } else {
            Err(ConformanceError {
                codec: self.codec,
                checked: self.checked,
                failures: self.failures,
            })
        }
    }

    /// Folds another report for the same codec into this one.
    pub fn merge(&mut self, other: Self) {
        self.checked += other.checked;
        self.failures.extend(other.failures);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            write!(f, "{}: {} checks passed", self.codec, self.checked)
        } else {
            write!(
                f,
                "{}: {} of {} checks failed",
                self.codec,
                self.failures.len(),
                self.checked
            )
        }
    }
}

/// A codec failed conformance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{codec} failed {} of {checked} conformance checks", failures.len())]
pub struct ConformanceError {
    /// Name of the failing codec.
    pub codec: &'static str,

    /// Number of vectors checked.
    pub checked: usize,

    /// Every failure found.
    pub failures: Vec<Failure>,
}

/// Checks `codec` against the canonical oracle table.
#[must_use]
pub fn check(codec: &dyn Codec) -> Report {
    check_vectors(codec, &crate::oracle::ORACLE)
}

/// Checks `codec` against `vectors`.
///
/// For each vector, `encode(value)` must write exactly `encoded`, and
/// `decode(encoded)` must return `(value, len)`.
#[tracing::instrument(skip_all, fields(codec = codec.name(), vectors = vectors.len()))]
pub fn check_vectors(codec: &dyn Codec, vectors: &[OracleVector]) -> Report {
    let mut failures = Vec::new();

    for (index, vector) in vectors.iter().enumerate() {
        let mut fail = |kind: FailureKind| {
            tracing::debug!(index, value = vector.value, %kind, "vector failed");
            failures.push(Failure {
                index,
                value: vector.value,
                kind,
            });
        };

        let mut out = [0u8; MAX_BYTES];
        match codec.encode(vector.value, &mut out) {
            Ok(written) => {
                let actual = out.get(..written).unwrap_or(out.as_slice()).to_vec();
                if written != vector.len {
                    fail(FailureKind::EncodeLength {
                        expected: vector.len,
                        actual: written,
                        expected_bytes: vector.encoded.to_vec(),
                        actual_bytes: actual,
                    });
                } else if actual != vector.encoded {
                    fail(FailureKind::EncodeBytes {
                        expected: vector.encoded.to_vec(),
                        actual,
                    });
                }
            }
            Err(e) => fail(e.into()),
        }

        match codec.decode(vector.encoded) {
            Ok((value, consumed)) => {
                if value != vector.value {
                    fail(FailureKind::DecodeValue {
                        expected: vector.value,
                        actual: value,
                    });
                }
                if consumed != vector.len {
                    fail(FailureKind::DecodeLength {
                        expected: vector.len,
                        actual: consumed,
                    });
                }
            }
            Err(e) => fail(e.into()),
        }
    }

    let report = Report {
        codec: codec.name(),
        checked: vectors.len(),
        failures,
    };
    tracing::info!(passed = report.is_pass(), failures = report.failures.len(), "oracle check done");
    report
}

/// Round-trips every value in `values` through `codec`, compares the bytes
/// with the `lexu64` crate, and checks that ascending values produce
/// ascending encodings.
///
/// `values` is sorted and deduplicated before checking; the failure index
/// refers to that sorted order.
#[tracing::instrument(skip_all, fields(codec = codec.name(), samples = values.len()))]
pub fn check_round_trip(codec: &dyn Codec, values: &[u64]) -> Report {
    let mut values = values.to_vec();
    values.sort_unstable();
    values.dedup();

    let mut failures = Vec::new();
    let mut previous: Option<(u64, Vec<u8>)> = None;

    for (index, &value) in values.iter().enumerate() {
        let mut fail = |kind: FailureKind| {
            tracing::debug!(index, value, %kind, "sample failed");
            failures.push(Failure { index, value, kind });
        };

        let mut out = [0u8; MAX_BYTES];
        let written = match codec.encode(value, &mut out) {
            Ok(written) => written,
            Err(e) => {
                fail(e.into());
                continue;
            }
        };
        let actual = out.get(..written).unwrap_or(out.as_slice()).to_vec();

        let (expected, expected_len) = lexu64::encode_array(value);
        let expected = expected.get(..expected_len).unwrap_or_default();
        if actual != expected {
            fail(FailureKind::EncodeBytes {
                expected: expected.to_vec(),
                actual: actual.clone(),
            });
        }

        match codec.decode(&actual) {
            Ok((decoded, consumed)) => {
                if decoded != value {
                    fail(FailureKind::DecodeValue {
                        expected: value,
                        actual: decoded,
                    });
                }
                if consumed != written {
                    fail(FailureKind::DecodeLength {
                        expected: written,
                        actual: consumed,
                    });
                }
            }
            Err(e) => fail(e.into()),
        }

        if let Some((previous, previous_bytes)) = previous.take() {
            if previous_bytes >= actual {
                fail(FailureKind::Order {
                    previous,
                    previous_bytes,
                    actual_bytes: actual.clone(),
                });
            }
        }
        previous = Some((value, actual));
    }

    let report = Report {
        codec: codec.name(),
        checked: values.len(),
        failures,
    };
    tracing::info!(passed = report.is_pass(), failures = report.failures.len(), "round-trip check done");
    report
}
