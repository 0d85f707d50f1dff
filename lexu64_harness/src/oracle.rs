//! Ground-truth vectors every codec must reproduce exactly.

/// A fixed `(value, length, bytes)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleVector {
    /// The decoded value.
    pub value: u64,

    /// The canonical encoded length.
    pub len: usize,

    /// The canonical encoding.
    pub encoded: &'static [u8],
}

impl OracleVector {
    const fn new(value: u64, len: usize, encoded: &'static [u8]) -> Self {
        Self {
            value,
            len,
            encoded,
        }
    }
}

/// Index of the vector used for the minimum-length benchmark bucket (240).
pub const MIN_LEN_INDEX: usize = 2;

/// Index of the vector used for the maximum-length benchmark bucket (2^56).
pub const MAX_LEN_INDEX: usize = 17;

/// The canonical oracle table: both edges of every length class.
pub static ORACLE: [OracleVector; 19] = [
    OracleVector::new(0, 1, &[0x00]),
    OracleVector::new(1, 1, &[0x01]),
    OracleVector::new(240, 1, &[0xF0]),
    OracleVector::new(241, 2, &[0xF1, 0x01]),
    OracleVector::new(2287, 2, &[0xF8, 0xFF]),
    OracleVector::new(2288, 3, &[0xF9, 0x00, 0x00]),
    OracleVector::new(67_823, 3, &[0xF9, 0xFF, 0xFF]),
    OracleVector::new(67_824, 4, &[0xFA, 0x01, 0x08, 0xF0]),
    OracleVector::new((1 << 24) - 1, 4, &[0xFA, 0xFF, 0xFF, 0xFF]),
    OracleVector::new(1 << 24, 5, &[0xFB, 0x01, 0x00, 0x00, 0x00]),
    OracleVector::new((1 << 32) - 1, 5, &[0xFB, 0xFF, 0xFF, 0xFF, 0xFF]),
    OracleVector::new(1 << 32, 6, &[0xFC, 0x01, 0x00, 0x00, 0x00, 0x00]),
    OracleVector::new((1 << 40) - 1, 6, &[0xFC, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    OracleVector::new(1 << 40, 7, &[0xFD, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
    OracleVector::new(
        (1 << 48) - 1,
        7,
        &[0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    ),
    OracleVector::new(
        1 << 48,
        8,
        &[0xFE, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ),
    OracleVector::new(
        (1 << 56) - 1,
        8,
        &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    ),
    OracleVector::new(
        1 << 56,
        9,
        &[0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ),
    OracleVector::new(
        u64::MAX,
        9,
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    ),
];

/// Ascending sample of values around every length-class boundary, for
/// round-trip and ordering checks beyond the oracle table.
#[must_use]
pub fn boundary_values() -> Vec<u64> {
    let mut values: Vec<u64> = (1..=lexu64::MAX_BYTES)
        .filter_map(lexu64::class_bounds)
        .flat_map(|(min, max)| {
            [
                min,
                min.saturating_add(1),
                min + (max - min) / 2,
                max.saturating_sub(1),
                max,
            ]
        })
        .collect();
    values.sort_unstable();
    values.dedup();
    values
}
