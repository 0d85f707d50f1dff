//! Throughput measurement across length-class buckets.
//!
//! Encode and decode are timed in separate loops over a single reusable
//! output buffer, so the numbers reflect the codec and not the allocator.
//! Results are never checked here; run [`conformance`](crate::conformance)
//! for that.

use core::{fmt, slice};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use lexu64::MAX_BYTES;

use crate::{
    oracle::{OracleVector, MAX_LEN_INDEX, MIN_LEN_INDEX, ORACLE},
    Codec,
};

/// Bytes of payload credited to each operation (one `u64`).
pub const BYTES_PER_OP: u64 = 8;

/// A set of values to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Bucket {
    /// A single 1-byte value (240).
    MinLen,

    /// A single 9-byte value (2^56).
    MaxLen,

    /// The whole oracle table.
    All,
}

impl Bucket {
    /// Every bucket, in report order.
    pub const ALL: [Self; 3] = [Self::MinLen, Self::MaxLen, Self::All];

    /// The vectors timed for this bucket.
    #[must_use]
    pub fn vectors(self) -> &'static [OracleVector] {
        match self {
            Self::MinLen => slice::from_ref(&ORACLE[MIN_LEN_INDEX]),
            Self::MaxLen => slice::from_ref(&ORACLE[MAX_LEN_INDEX]),
            Self::All => &ORACLE,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinLen => "min-len",
            Self::MaxLen => "max-len",
            Self::All => "all",
        })
    }
}

/// Benchmark knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Timed passes over the bucket, per direction.
    pub iterations: u64,

    /// Untimed passes before each timed loop.
    pub warmup: u64,

    /// Run each codec on its own thread.
    pub parallel: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            warmup: 10_000,
            parallel: false,
        }
    }
}

/// Time spent on a number of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Operations performed.
    pub ops: u64,

    /// Wall time for all of them.
    pub elapsed: Duration,
}

impl Timing {
    /// Average nanoseconds per operation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ns_per_op(&self) -> f64 {
        if self.ops == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.ops as f64
    }

    /// Throughput in MB/s, crediting [`BYTES_PER_OP`] per operation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mb_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.ops.saturating_mul(BYTES_PER_OP) as f64 / secs / 1e6
    }
}

/// Encode and decode timings for one codec on one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Name of the codec.
    pub codec: &'static str,

    /// The bucket timed.
    pub bucket: Bucket,

    /// Encode loop timing.
    pub encode: Timing,

    /// Decode loop timing.
    pub decode: Timing,
}

impl Measurement {
    /// Combined encode + decode cost, used for ranking.
    #[must_use]
    pub fn ns_per_round_trip(&self) -> f64 {
        self.encode.ns_per_op() + self.decode.ns_per_op()
    }
}

/// Operations in `iterations` passes over `per_pass` values, saturating at
/// `u64::MAX`.
fn op_count(iterations: u64, per_pass: usize) -> u64 {
    iterations.saturating_mul(u64::try_from(per_pass).unwrap_or(u64::MAX))
}

/// Times `codec` on `bucket`: an encode loop, then a decode loop.
#[tracing::instrument(skip(codec, config), fields(codec = codec.name()))]
pub fn measure(codec: &dyn Codec, bucket: Bucket, config: &BenchConfig) -> Measurement {
    let vectors = bucket.vectors();
    let values: Vec<u64> = vectors.iter().map(|v| v.value).collect();
    let encodings: Vec<&[u8]> = vectors.iter().map(|v| v.encoded).collect();
    let ops = op_count(config.iterations, values.len());

    let mut buf = [0u8; MAX_BYTES];
    let encode_pass = |buf: &mut [u8; MAX_BYTES]| {
        for &value in &values {
            let _ = black_box(codec.encode(black_box(value), buf.as_mut_slice()));
        }
    };

    for _ in 0..config.warmup {
        encode_pass(&mut buf);
    }
    let start = Instant::now();
    for _ in 0..config.iterations {
        encode_pass(&mut buf);
    }
    let encode = Timing {
        ops,
        elapsed: start.elapsed(),
    };

    let decode_pass = || {
        for &input in &encodings {
            let _ = black_box(codec.decode(black_box(input)));
        }
    };

    for _ in 0..config.warmup {
        decode_pass();
    }
    let start = Instant::now();
    for _ in 0..config.iterations {
        decode_pass();
    }
    let decode = Timing {
        ops,
        elapsed: start.elapsed(),
    };

    tracing::debug!(
        encode_ns = encode.ns_per_op(),
        decode_ns = decode.ns_per_op(),
        "measured"
    );

    Measurement {
        codec: codec.name(),
        bucket,
        encode,
        decode,
    }
}

fn measure_all(codec: &dyn Codec, buckets: &[Bucket], config: &BenchConfig) -> Vec<Measurement> {
    buckets
        .iter()
        .map(|&bucket| measure(codec, bucket, config))
        .collect()
}

/// Times every codec on every bucket.
///
/// With [`BenchConfig::parallel`], each codec runs on its own thread with
/// its own buffer; each timing loop stays single-threaded. Results come back
/// in `codecs` order, then `buckets` order.
#[tracing::instrument(skip_all, fields(codecs = codecs.len(), buckets = buckets.len(), parallel = config.parallel))]
pub fn compare(codecs: &[Box<dyn Codec>], buckets: &[Bucket], config: &BenchConfig) -> Vec<Measurement> {
    if !config.parallel {
        return codecs
            .iter()
            .flat_map(|codec| measure_all(codec.as_ref(), buckets, config))
            .collect();
    }

    std::thread::scope(|scope| {
        let handles: Vec<_> = codecs
            .iter()
            .map(|codec| scope.spawn(move || measure_all(codec.as_ref(), buckets, config)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

/// Measurements for `bucket`, fastest round trip first.
#[must_use]
pub fn rank(measurements: &[Measurement], bucket: Bucket) -> Vec<&Measurement> {
    let mut ranked: Vec<&Measurement> = measurements.iter().filter(|m| m.bucket == bucket).collect();
    ranked.sort_by(|a, b| a.ns_per_round_trip().total_cmp(&b.ns_per_round_trip()));
    ranked
}
