//! Command-line harness: conformance checks and throughput comparison for
//! `lexu64` codec implementations.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lexu64_harness::{
    bench::{self, BenchConfig, Bucket},
    conformance, oracle, Codec, Implementation,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();

    match args.command {
        Command::Check(args) => check(&args),
        Command::Bench(args) => run_bench(&args),
        Command::Encode { value } => {
            let (bytes, len) = lexu64::encode_array(value);
            let bytes = bytes.get(..len).unwrap_or_default();
            println!("{} ({len} bytes)", hex::encode(bytes));
            Ok(())
        }
        Command::Decode { input, canonical } => {
            let bytes = hex::decode(input.trim()).context("input is not valid hex")?;
            let (value, consumed) = if canonical {
                lexu64::decode_canonical(&bytes)?
            } else {
                lexu64::decode(&bytes)?
            };
            println!("{value} (consumed {consumed} of {} bytes)", bytes.len());
            Ok(())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author = "Ink & Switch",
    version,
    about = "Conformance and benchmark harness for lexu64 codecs"
)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Check implementations against the oracle table
    Check(CheckArgs),

    /// Compare implementation throughput
    Bench(BenchArgs),

    /// Print the encoding of a value as hex
    Encode {
        /// Value to encode
        value: u64,
    },

    /// Decode a hex-encoded lexu64 from the front of the input
    Decode {
        /// Hex bytes, e.g. `fa0108f0`
        input: String,

        /// Reject non-canonical encodings
        #[arg(long)]
        canonical: bool,
    },
}

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Implementations to check (default: all)
    #[arg(long = "impl", value_enum, value_name = "NAME")]
    implementations: Vec<Implementation>,

    /// Skip the boundary round-trip and ordering pass
    #[arg(long, default_value_t = false)]
    oracle_only: bool,
}

/// Arguments for the bench command.
#[derive(Debug, clap::Args)]
struct BenchArgs {
    /// Implementations to compare (default: all)
    #[arg(long = "impl", value_enum, value_name = "NAME")]
    implementations: Vec<Implementation>,

    /// Buckets to time (default: all)
    #[arg(long = "bucket", value_enum, value_name = "BUCKET")]
    buckets: Vec<Bucket>,

    /// Timed passes over each bucket
    #[arg(long, default_value_t = BenchConfig::default().iterations)]
    iterations: u64,

    /// Untimed passes before each timed loop
    #[arg(long, default_value_t = BenchConfig::default().warmup)]
    warmup: u64,

    /// Run each implementation on its own thread
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn check(args: &CheckArgs) -> Result<()> {
    let codecs = Implementation::select(&args.implementations);
    report_conformance(&codecs, args.oracle_only, &mut std::io::stdout().lock())
}

/// Checks every codec, writing one report per codec (plus each failing
/// vector) to `out`. Fails if any codec failed.
fn report_conformance(codecs: &[Box<dyn Codec>], oracle_only: bool, out: &mut impl Write) -> Result<()> {
    let samples = oracle::boundary_values();
    let mut failed = Vec::new();

    for codec in codecs {
        let mut report = conformance::check(codec.as_ref());
        if !oracle_only {
            report.merge(conformance::check_round_trip(codec.as_ref(), &samples));
        }

        writeln!(out, "{report}")?;
        for failure in &report.failures {
            writeln!(out, "  {failure}")?;
        }

        if !report.is_pass() {
            failed.push(report.codec);
        }
    }

    if !failed.is_empty() {
        bail!("conformance failed for: {}", failed.join(", "));
    }
    Ok(())
}

fn run_bench(args: &BenchArgs) -> Result<()> {
    let codecs = Implementation::select(&args.implementations);
    let buckets = if args.buckets.is_empty() {
        Bucket::ALL.to_vec()
    } else {
        args.buckets.clone()
    };
    let config = BenchConfig {
        iterations: args.iterations,
        warmup: args.warmup,
        parallel: args.parallel,
    };

    tracing::info!(?config, "starting benchmark");
    let results = bench::compare(&codecs, &buckets, &config);

    println!(
        "{:<8} {:<10} {:>12} {:>12} {:>12} {:>12}",
        "bucket", "codec", "enc ns/op", "enc MB/s", "dec ns/op", "dec MB/s"
    );
    for &bucket in &buckets {
        for m in bench::rank(&results, bucket) {
            println!(
                "{:<8} {:<10} {:>12.2} {:>12.1} {:>12.2} {:>12.1}",
                bucket.to_string(),
                m.codec,
                m.encode.ns_per_op(),
                m.encode.mb_per_sec(),
                m.decode.ns_per_op(),
                m.decode.mb_per_sec(),
            );
        }
    }
    Ok(())
}
