//! Decoding a run of back-to-back encodings.

use core::iter::FusedIterator;

use crate::{decode_split, DecodeError};

/// Returns an iterator over the values encoded back-to-back in `input`.
///
/// The iterator yields one `Err` and then stops if it meets a truncated
/// encoding.
///
/// # Examples
///
/// ```
/// let mut buf = Vec::new();
/// for v in [7, 300, u64::MAX] {
///     lexu64::append(v, &mut buf);
/// }
///
/// let values: Result<Vec<u64>, _> = lexu64::iter(&buf).collect();
/// assert_eq!(values.unwrap(), [7, 300, u64::MAX]);
/// ```
#[must_use]
pub const fn iter(input: &[u8]) -> Iter<'_> {
    Iter {
        rest: input,
        failed: false,
    }
}

/// Iterator returned by [`iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    rest: &'a [u8],
    failed: bool,
}

impl<'a> Iter<'a> {
    /// Bytes not yet decoded.
    ///
    /// After an error this is the input starting at the truncated encoding.
    #[must_use]
    pub const fn remaining(&self) -> &'a [u8] {
        self.rest
    }
}

impl Iterator for Iter<'_> {
    type Item = Result<u64, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        match decode_split(self.rest) {
            Ok((value, rest)) => {
                self.rest = rest;
                Some(Ok(value))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Iter<'_> {}
