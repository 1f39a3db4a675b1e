//!
//! Common types and utilities shared by the quote client and the benchmark driver.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `symbols` — quote symbols, symbol-file parsing and request path helpers.
//! - `config` — client credentials, target URL and timeouts.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod result;
pub mod symbols;

pub use config::{ClientConfig, Timeouts};
pub use error::QuoteError;
pub use result::Result;
pub use symbols::Symbol;
