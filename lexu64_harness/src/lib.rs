//! Conformance and benchmark harness for `lexu64` codecs.
//!
//! Any number of codec implementations can be plugged in behind the
//! [`Codec`] trait. Each one is checked byte-for-byte against the fixed
//! [oracle table](oracle::ORACLE) and then timed over the same value
//! buckets, so implementations can be compared and ranked.
//!
//! Correctness and timing are separate passes: [`conformance`] never looks
//! at the clock, and [`bench`] never looks at the results.

#![forbid(unsafe_code)]

pub mod bench;
pub mod codec;
pub mod conformance;
pub mod oracle;
pub mod strategy;

pub use codec::{Codec, Implementation};
