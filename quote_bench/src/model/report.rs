//! Benchmark report and its text rendering.
//!
//! A `BenchmarkReport` bundles everything derived from one run: timing statistics,
//! per-range means and the two verdicts. It renders as the fixed text report via
//! `Display` and as JSON via `Serialize`.

use chrono::{DateTime, Utc};
use quote_common::{Result, Symbol};
use serde::Serialize;
use std::fmt;

use crate::model::stats::{BlockMean, Statistics, block_means};
use crate::model::verdict::{Consistency, Performance};

/// Number of requests per range in the breakdown.
pub const BLOCK_SIZE: usize = 10;

const RULE: &str = "========================================";

/// Result of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Wall-clock time the run started.
    pub started_at: DateTime<Utc>,
    /// Symbols requested on every call.
    pub symbols: Vec<Symbol>,
    /// Requests that came back with an empty body (failed or genuinely empty).
    pub empty_responses: usize,
    /// Seconds spent in the whole request loop.
    pub total_time: f64,
    /// Per-request timing summary.
    pub statistics: Statistics,
    /// Mean latency per range of `BLOCK_SIZE` requests.
    pub blocks: Vec<BlockMean>,
    /// Verdict on the warm average.
    pub performance: Performance,
    /// Verdict on the standard deviation.
    pub consistency: Consistency,
    /// Cold request time divided by the warm average.
    pub reuse_improvement: f64,
}

impl BenchmarkReport {
    /// Build a report from ordered per-request `samples` (seconds).
    pub fn new(
        started_at: DateTime<Utc>,
        symbols: Vec<Symbol>,
        samples: &[f64],
        total_time: f64,
        empty_responses: usize,
    ) -> Result<Self> {
        let statistics = Statistics::from_samples(samples)?;
        Ok(Self {
            started_at,
            symbols,
            empty_responses,
            total_time,
            blocks: block_means(samples, BLOCK_SIZE),
            performance: Performance::classify(statistics.warm_mean),
            consistency: Consistency::classify(statistics.std_dev),
            reuse_improvement: statistics.reuse_improvement(),
            statistics,
        })
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", RULE)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", RULE)?;
    writeln!(f)
}

fn timing(f: &mut fmt::Formatter<'_>, label: &str, seconds: f64) -> fmt::Result {
    writeln!(
        f,
        "{:<22}{:.4} seconds ({:.2} ms)",
        label,
        seconds,
        seconds * 1000.0
    )
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;

        writeln!(f)?;
        section(f, "RESULTS")?;
        writeln!(f, "{:<22}{}", "Started At:", self.started_at.to_rfc3339())?;
        writeln!(f, "{:<22}{}", "Total Requests:", stats.count)?;
        if self.empty_responses > 0 {
            writeln!(f, "{:<22}{}", "Empty Responses:", self.empty_responses)?;
        }
        writeln!(f, "{:<22}{:.4} seconds", "Total Time:", self.total_time)?;
        timing(f, "Average per Request:", stats.mean)?;
        writeln!(f)?;

        timing(f, "First Request:", stats.first)?;
        timing(f, &format!("Warm Average (2-{}):", stats.count), stats.warm_mean)?;
        writeln!(f)?;

        timing(f, "Min Time:", stats.min)?;
        timing(f, "Max Time:", stats.max)?;
        timing(f, "Median Time:", stats.median)?;
        timing(f, "Std Deviation:", stats.std_dev)?;
        writeln!(f)?;

        section(f, "BREAKDOWN BY REQUEST RANGES")?;
        for block in &self.blocks {
            let label = format!("Requests {}-{}:", block.first_request, block.last_request);
            writeln!(f, "{:<18}{:.2} ms", label, block.mean * 1000.0)?;
        }
        writeln!(f)?;

        section(f, "PERFORMANCE ANALYSIS")?;
        writeln!(
            f,
            "Status: {}! {}",
            self.performance,
            self.performance.message()
        )?;
        writeln!(
            f,
            "Connection Reuse Improvement: {:.2}x faster",
            self.reuse_improvement
        )?;
        writeln!(
            f,
            "Consistency: {}! {}",
            self.consistency,
            self.consistency.message()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", RULE)
    }
}
