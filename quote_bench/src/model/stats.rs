//! Descriptive statistics over request timings.
//!
//! Samples are request durations in seconds, in the order the requests were made.
//! The first sample is treated as the cold start (connection setup included); the
//! remaining ones form the warm set.
//!
//! Design notes:
//! - The median is the element at index `N / 2` of the sorted samples. For an even
//!   count this is the upper of the two middle elements; the two are not averaged.
//! - The standard deviation is the population one (divides by `N`).

use quote_common::{QuoteError, Result};
use serde::Serialize;

/// Summary of a timing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of samples.
    pub count: usize,
    /// Sum of all samples.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sorted sample at index `count / 2`.
    pub median: f64,
    /// Fastest sample.
    pub min: f64,
    /// Slowest sample.
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// First sample (cold start).
    pub first: f64,
    /// Mean of samples 2..=N.
    pub warm_mean: f64,
}

impl Statistics {
    /// Compute the summary; at least two samples are required.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        let count = samples.len();
        if count < 2 {
            return Err(QuoteError::InsufficientSamples(count));
        }

        let sum: f64 = samples.iter().sum();
        let mean = sum / count as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let variance = samples
            .iter()
            .map(|sample| (sample - mean) * (sample - mean))
            .sum::<f64>()
            / count as f64;

        let warm = &samples[1..];
        let warm_mean = warm.iter().sum::<f64>() / warm.len() as f64;

        Ok(Self {
            count,
            sum,
            mean,
            median: sorted[count / 2],
            min: sorted[0],
            max: sorted[count - 1],
            std_dev: variance.sqrt(),
            first: samples[0],
            warm_mean,
        })
    }

    /// How many times slower the cold request was than the warm average.
    pub fn reuse_improvement(&self) -> f64 {
        self.first / self.warm_mean
    }
}

/// Mean latency of one contiguous range of requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockMean {
    /// 1-based number of the first request in the block.
    pub first_request: usize,
    /// 1-based number of the last request in the block.
    pub last_request: usize,
    /// Mean of the block's samples.
    pub mean: f64,
}

/// Split `samples` into consecutive, non-overlapping blocks of `block` samples.
///
/// A trailing partial block is averaged over the samples it actually holds.
pub fn block_means(samples: &[f64], block: usize) -> Vec<BlockMean> {
    samples
        .chunks(block.max(1))
        .enumerate()
        .map(|(index, chunk)| {
            let first_request = index * block.max(1) + 1;
            BlockMean {
                first_request,
                last_request: first_request + chunk.len() - 1,
                mean: chunk.iter().sum::<f64>() / chunk.len() as f64,
            }
        })
        .collect()
}
