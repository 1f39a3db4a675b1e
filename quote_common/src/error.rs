//! Error types shared by the client and the benchmark driver.
//!
//! The `QuoteError` enum unifies the failure cases for I/O, symbol parsing, HTTP
//! transport, locking and report encoding, allowing crates to propagate a single
//! error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the client and the driver.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (symbol files, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A symbol entry was empty or otherwise unusable.
    #[error("Parse symbol error: {0}")]
    ParseSymbol(String),

    /// The HTTP stack failed to connect, send, receive or decode.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A header value could not be built from the configured credentials.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The persistent session was never opened.
    #[error("Session unavailable: connection to {0} was not established")]
    SessionUnavailable(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// Failure while encoding the report via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Statistics need at least two samples (one cold, one warm).
    #[error("Insufficient samples: got {0}, need at least 2")]
    InsufficientSamples(usize),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
