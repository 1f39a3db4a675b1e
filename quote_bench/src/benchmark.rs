//! Sequential latency benchmark over a `QuoteSource`.
//!
//! The driver issues `REQUEST_COUNT` requests one after another, timing each with a
//! monotonic clock. Empty responses are timed like any other; they are only counted.
use chrono::Utc;
use log::{debug, info};
use quote_client::QuoteSource;
use quote_common::{Result, Symbol};
use std::io::Write;
use std::time::Instant;

use crate::model::report::BenchmarkReport;

/// Requests issued per run.
pub const REQUEST_COUNT: usize = 100;
/// A progress line is written after this many requests.
pub const PROGRESS_EVERY: usize = 10;

/// One benchmark run against `source` for a fixed symbol list.
pub struct Benchmark<S> {
    source: S,
    symbols: Vec<Symbol>,
}

impl<S: QuoteSource> Benchmark<S> {
    /// Create a benchmark requesting `symbols` from `source`.
    pub fn new(source: S, symbols: Vec<Symbol>) -> Self {
        Self { source, symbols }
    }

    /// Run all requests, writing the banner and progress lines to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BenchmarkReport> {
        writeln!(out, "========================================")?;
        writeln!(out, "{}-REQUEST BENCHMARK TEST", REQUEST_COUNT)?;
        writeln!(out, "========================================")?;
        writeln!(out)?;

        info!(
            "Benchmarking {} requests for {} symbols",
            REQUEST_COUNT,
            self.symbols.len()
        );
        let started_at = Utc::now();
        let mut samples = Vec::with_capacity(REQUEST_COUNT);
        let mut empty_responses = 0;

        let total_start = Instant::now();
        for i in 0..REQUEST_COUNT {
            let start = Instant::now();
            let response = self.source.get_quote(&self.symbols);
            let elapsed = start.elapsed().as_secs_f64();
            samples.push(elapsed);

            if response.is_empty() {
                empty_responses += 1;
                debug!("Request {} returned an empty response", i + 1);
            }

            if (i + 1) % PROGRESS_EVERY == 0 {
                writeln!(
                    out,
                    "Completed {} requests... Last request: {:.4}s",
                    i + 1,
                    elapsed
                )?;
            }
        }
        let total_time = total_start.elapsed().as_secs_f64();

        info!(
            "Benchmark finished in {:.4}s, {} empty responses",
            total_time, empty_responses
        );
        BenchmarkReport::new(
            started_at,
            self.symbols.clone(),
            &samples,
            total_time,
            empty_responses,
        )
    }
}
