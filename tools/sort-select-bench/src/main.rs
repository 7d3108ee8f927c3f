use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use sort_select_core::{SortStrategy, Strategy};

#[derive(Parser)]
#[command(author, version, about = "Benchmark harness for sort-select strategies")]
struct Args {
    /// Number of elements in each generated sequence
    #[arg(long, default_value_t = 2_000)]
    len: usize,

    /// Initial ordering of the generated sequence
    #[arg(long, value_enum, default_value_t = Shape::Reversed)]
    shape: Shape,

    /// Number of warm-up iterations (not counted in results)
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Number of measured iterations
    #[arg(long, default_value_t = 5)]
    iterations: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Sorted,
    Reversed,
    Scrambled,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.iterations == 0 {
        bail!("--iterations must be greater than 0");
    }

    let input = generate(args.shape, args.len);
    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        results.push(benchmark(strategy, &input, args.warmup, args.iterations)?);
    }

    print_summary(&args, &results);
    Ok(())
}

fn generate(shape: Shape, len: usize) -> Vec<i32> {
    let len_i32 = i32::try_from(len).unwrap_or(i32::MAX);
    match shape {
        Shape::Sorted => (0..len_i32).collect(),
        Shape::Reversed => (0..len_i32).rev().collect(),
        Shape::Scrambled => {
            // Linear congruential sequence; deterministic across runs.
            let mut state: u32 = 0x2545_f491;
            (0..len)
                .map(|_| {
                    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                    (state >> 8) as i32 % 10_000
                })
                .collect()
        }
    }
}

struct BenchResult {
    name: &'static str,
    iterations: usize,
    average: Duration,
    median: Duration,
}

fn benchmark(
    strategy: Strategy,
    input: &[i32],
    warmup: usize,
    iterations: usize,
) -> Result<BenchResult> {
    for _ in 0..warmup {
        let mut data = input.to_vec();
        strategy.sort(&mut data);
    }

    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut data = input.to_vec();
        let start = Instant::now();
        strategy.sort(&mut data);
        samples.push(start.elapsed());

        if !data.windows(2).all(|pair| pair[0] <= pair[1]) {
            bail!("{strategy} produced unsorted output");
        }
    }

    let (average, median) = summarize(&mut samples)?;

    Ok(BenchResult {
        name: strategy.name(),
        iterations,
        average,
        median,
    })
}

/// Returns (average, median) of the samples.
fn summarize(samples: &mut [Duration]) -> Result<(Duration, Duration)> {
    if samples.is_empty() {
        bail!("no samples recorded");
    }
    samples.sort();
    let total = samples
        .iter()
        .copied()
        .fold(Duration::ZERO, |acc, sample| acc + sample);
    let count = u32::try_from(samples.len()).context("too many iterations to average")?;
    Ok((total / count, samples[samples.len() / 2]))
}

fn print_summary(args: &Args, results: &[BenchResult]) {
    println!(
        "sort-select benchmark results ({} elements, {:?}):\n",
        args.len, args.shape
    );
    for result in results {
        println!(
            "- {}: avg {:?} (median {:?}) over {} iterations",
            result.name, result.average, result.median, result.iterations
        );
    }
}
