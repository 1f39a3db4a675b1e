//! Command-line arguments for the quote benchmark.
//!
//! Every argument has a default, so running the binary without arguments benchmarks
//! the default host with the default symbols.
use clap::Parser;
use quote_common::Symbol;
use quote_common::config::{ACCESS_TOKEN_ENV, APP_ID_ENV};
use quote_common::net::default_base_url;
use quote_common::symbols::default_symbols;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Application identifier sent in the `Authorization` header.
    #[clap(long, env = APP_ID_ENV, default_value = "")]
    pub app_id: String,

    /// Access token sent in the `Authorization` header.
    #[clap(long, env = ACCESS_TOKEN_ENV, default_value = "", hide_env_values = true)]
    pub access_token: String,

    /// Scheme, host and port of the quote API.
    #[clap(long, default_value_t = default_base_url())]
    pub base_url: String,

    /// Symbols to request, comma separated.
    #[clap(long, value_delimiter = ',', default_values_t = default_symbols())]
    pub symbols: Vec<Symbol>,

    /// Path to a text file with symbols; overrides `--symbols`.
    /// Symbols may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub symbols_file: Option<String>,

    /// Print the report as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}
