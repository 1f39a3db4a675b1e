//! Quote benchmark — measures round-trip latency of the quote API.
//!
//! The binary opens one persistent `QuoteClient`, issues 100 sequential quote
//! requests for a fixed symbol list, and prints timing statistics:
//!
//! - total time, mean, median, min/max and population standard deviation;
//! - the cold first request versus the warm average of requests 2-100;
//! - mean latency for each range of 10 requests;
//! - a verdict on sustained performance and on consistency.
//!
//! Usage example (CLI):
//! ```bash
//! QUOTE_APP_ID=XXXX-100 QUOTE_ACCESS_TOKEN=... quote_bench
//! quote_bench --symbols-file ./symbols.txt --json
//! ```
//!
//! Failed requests yield empty responses; they are timed like any other request and
//! counted in the report. The process always exits with status 0.
#![warn(missing_docs)]
mod args;
mod benchmark;
pub mod model;

use crate::args::Args;
use crate::benchmark::Benchmark;
use clap::Parser;
use log::{error, info};
use quote_client::QuoteClient;
use quote_common::symbols::SymbolParser;
use quote_common::{ClientConfig, QuoteError, Result, Symbol};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Benchmark aborted: {}", e);
    }
}

fn run(args: Args) -> Result<(), QuoteError> {
    let symbols = match args.symbols_file.as_deref() {
        Some(raw) => load_symbols(&normalize_path(raw))?,
        None => args.symbols,
    };
    info!("Symbols: {:?}", symbols);

    let config = ClientConfig::new(args.app_id, args.access_token).with_base_url(args.base_url);
    let client = QuoteClient::new(config);
    let benchmark = Benchmark::new(&client, symbols);

    if args.json {
        let report = benchmark.run(&mut io::stderr())?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = io::stdout().lock();
        let report = benchmark.run(&mut out)?;
        write!(out, "{}", report)?;
    }
    Ok(())
}

fn load_symbols(path: &Path) -> Result<Vec<Symbol>, QuoteError> {
    let file = File::open(path)?;
    let symbols = Symbol::parse_from_reader(BufReader::new(file))?;
    if symbols.is_empty() {
        return Err(QuoteError::ParseSymbol(format!(
            "no symbols in {}",
            path.display()
        )));
    }
    Ok(symbols)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
