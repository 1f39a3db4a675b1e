//! Quote Client — a blocking HTTP client for the quote API that keeps one
//! persistent connection to the API host and returns raw quote responses.
//!
//! Usage example:
//! ```no_run
//! use quote_client::QuoteClient;
//! use quote_common::ClientConfig;
//! use quote_common::symbols::default_symbols;
//!
//! let client = QuoteClient::new(ClientConfig::new("XXXX-100", "access-token"));
//! let body = client.get_quote(&default_symbols());
//! println!("{}", body);
//! ```
//!
//! Modules:
//! - `session` — the owned HTTP session (client, connection and headers).
//! - `client` — `QuoteClient`, serializing requests over the session.
//! - `source` — the `QuoteSource` trait consumed by the benchmark driver.
#![warn(missing_docs)]
pub mod client;
pub mod session;
pub mod source;

pub use client::QuoteClient;
pub use session::Session;
pub use source::QuoteSource;
