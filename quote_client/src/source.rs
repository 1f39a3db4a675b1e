//! Abstraction over anything that can answer a quote request.
use quote_common::Symbol;

/// A source of raw quote responses.
///
/// Implementations return the response body as text, or an empty string when the
/// request could not be completed.
pub trait QuoteSource {
    /// Fetch quotes for `symbols`.
    fn get_quote(&self, symbols: &[Symbol]) -> String;
}

impl<T: QuoteSource + ?Sized> QuoteSource for &T {
    fn get_quote(&self, symbols: &[Symbol]) -> String {
        (**self).get_quote(symbols)
    }
}
