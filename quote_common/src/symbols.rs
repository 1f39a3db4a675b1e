//! Quote symbols and helpers for building the quotes request path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::QuoteError;
use crate::net::QUOTES_PATH;

/// Symbols requested by the benchmark when none are supplied.
pub const DEFAULT_SYMBOLS: [&str; 3] = ["NSE:SBIN-EQ", "NSE:RELIANCE-EQ", "NSE:TCS-EQ"];

/// Opaque exchange symbol, e.g. `NSE:SBIN-EQ`.
///
/// Only surrounding whitespace is stripped; the exchange prefix and series suffix
/// are passed to the API as-is.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Borrow the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(QuoteError::ParseSymbol(format!("empty symbol in {:?}", s)));
        }
        Ok(Symbol(trimmed.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed three-symbol list used by the benchmark.
pub fn default_symbols() -> Vec<Symbol> {
    DEFAULT_SYMBOLS
        .iter()
        .map(|s| Symbol(s.to_string()))
        .collect()
}

/// Join symbols with `,` in input order.
pub fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Request path for a quote of `symbols`.
pub fn quote_path(symbols: &[Symbol]) -> String {
    format!("{}{}", QUOTES_PATH, join_symbols(symbols))
}

/// Trait providing file parsing for symbols.
pub trait SymbolParser: Sized {
    /// Parses symbols from a buffered reader.
    ///
    /// Symbols may be separated by commas, whitespace or new lines; blank entries
    /// are skipped.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, QuoteError>;
}

impl SymbolParser for Symbol {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, QuoteError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;
            for entry in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if entry.is_empty() {
                    continue;
                }
                symbols.push(entry.parse::<Self>()?);
            }
        }
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn symbols(raw: &[&str]) -> Vec<Symbol> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn join_keeps_input_order_without_trailing_separator() {
        let list = symbols(&["NSE:TCS-EQ", "NSE:SBIN-EQ", "NSE:RELIANCE-EQ"]);
        assert_eq!(join_symbols(&list), "NSE:TCS-EQ,NSE:SBIN-EQ,NSE:RELIANCE-EQ");
    }

    #[test]
    fn join_single_symbol_has_no_separator() {
        assert_eq!(join_symbols(&symbols(&["NSE:TCS-EQ"])), "NSE:TCS-EQ");
    }

    #[test]
    fn quote_path_embeds_joined_symbols() {
        assert_eq!(
            quote_path(&default_symbols()),
            "/data/quotes?symbols=NSE:SBIN-EQ,NSE:RELIANCE-EQ,NSE:TCS-EQ"
        );
    }

    #[test]
    fn symbol_is_trimmed_but_not_validated() {
        let symbol: Symbol = "  whatever goes ".parse().unwrap();
        assert_eq!(symbol.as_str(), "whatever goes");
    }

    #[test]
    fn blank_symbol_is_rejected() {
        assert!(matches!(
            "   ".parse::<Symbol>(),
            Err(QuoteError::ParseSymbol(_))
        ));
    }

    #[test]
    fn parses_mixed_separators() {
        let input = "NSE:SBIN-EQ, NSE:RELIANCE-EQ\n\n  NSE:TCS-EQ\tNSE:INFY-EQ,\n";
        let parsed = Symbol::parse_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            parsed,
            symbols(&["NSE:SBIN-EQ", "NSE:RELIANCE-EQ", "NSE:TCS-EQ", "NSE:INFY-EQ"])
        );
    }

    #[test]
    fn empty_reader_gives_no_symbols() {
        let parsed = Symbol::parse_from_reader(Cursor::new("")).unwrap();
        assert!(parsed.is_empty());
    }
}
