//! Benchmark command implementation.

use super::TrainArgs;
use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use subtok_tokenizer::{read_corpus, WordCache};

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    #[command(flatten)]
    pub train: TrainArgs,

    /// Path to input text file for benchmarking
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Number of iterations to run
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,
}

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let (tokenizer, _) = cmd.train.train()?;

    let lines = read_corpus(&cmd.input)
        .with_context(|| format!("failed to read {}", cmd.input.display()))?;
    let bytes: usize = lines.iter().map(|l| l.len()).sum();
    let iterations = cmd.iterations.max(1);

    println!("Benchmarking tokenize + encode...");
    println!("  Lines: {}", lines.len());
    println!("  Text length: {} bytes", bytes);
    println!("  Iterations: {}", iterations);
    println!();

    let mut cache = WordCache::new();
    let mut tokens = 0usize;

    // Warmup
    for line in &lines {
        tokenizer.encode_text_with_cache(line, &mut cache)?;
    }

    let start = Instant::now();
    for _ in 0..iterations {
        for line in &lines {
            tokens += tokenizer.encode_text_with_cache(line, &mut cache)?.len();
        }
    }
    let elapsed = start.elapsed();

    let secs = elapsed.as_secs_f64();
    let avg_ms = secs * 1000.0 / iterations as f64;
    let stats = cache.stats();

    println!("Results:");
    println!("  Total time: {:.2}s", secs);
    println!("  Average time: {:.3}ms per pass", avg_ms);
    if secs > 0.0 {
        println!("  Throughput: {:.0} tokens/s", tokens as f64 / secs);
        println!("  Throughput: {:.2} MB/s", (bytes * iterations) as f64 / secs / 1e6);
    }
    if let Some(rate) = stats.hit_rate {
        println!("  Word cache hit rate: {:.1}%", rate * 100.0);
    }

    Ok(())
}
