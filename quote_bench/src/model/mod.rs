//! Domain models of the benchmark driver.
//!
//! - `stats` — descriptive statistics over request timings.
//! - `verdict` — qualitative performance and consistency labels.
//! - `report` — the assembled run report and its text rendering.

pub mod report;
pub mod stats;
pub mod verdict;
