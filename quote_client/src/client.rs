//! Quote client holding one persistent session behind a lock.
use log::{debug, error};
use quote_common::symbols::quote_path;
use quote_common::{ClientConfig, QuoteError, Result, Symbol};
use std::sync::Mutex;

use crate::session::Session;
use crate::source::QuoteSource;

/// Blocking quote client reusing a single connection for every request.
///
/// Requests are serialized through the session lock, so the client can be shared
/// between threads (`Arc<QuoteClient>`) while only one request uses the
/// connection at a time.
#[derive(Debug)]
pub struct QuoteClient {
    base_url: String,
    session: Mutex<Option<Session>>,
}

impl QuoteClient {
    /// Open the session described by `config`.
    ///
    /// If the session cannot be opened the client is still returned, but every
    /// request fails immediately.
    pub fn new(config: ClientConfig) -> Self {
        let session = match Session::open(&config) {
            Ok(session) => Some(session),
            Err(e) => {
                error!("Failed to open session for {}: {}", config.base_url(), e);
                None
            }
        };

        Self {
            base_url: config.base_url().to_string(),
            session: Mutex::new(session),
        }
    }

    /// Whether the session was opened successfully.
    pub fn is_connected(&self) -> bool {
        self.session
            .lock()
            .map(|session| session.is_some())
            .unwrap_or(false)
    }

    /// Fetch quotes for `symbols`, returning the raw body or the failure cause.
    pub fn fetch_quote(&self, symbols: &[Symbol]) -> Result<String> {
        let path = quote_path(symbols);

        let guard = self.session.lock()?;
        let session = guard
            .as_ref()
            .ok_or_else(|| QuoteError::SessionUnavailable(self.base_url.clone()))?;
        session.get(&path)
    }

    /// Fetch quotes for `symbols`; any failure yields an empty string.
    pub fn get_quote(&self, symbols: &[Symbol]) -> String {
        self.fetch_quote(symbols).unwrap_or_else(|e| {
            debug!("Quote request failed: {}", e);
            String::new()
        })
    }
}

impl QuoteSource for QuoteClient {
    fn get_quote(&self, symbols: &[Symbol]) -> String {
        QuoteClient::get_quote(self, symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::Timeouts;
    use quote_common::symbols::default_symbols;
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    fn short_timeouts() -> Timeouts {
        Timeouts {
            resolve: Duration::from_millis(200),
            connect: Duration::from_millis(300),
            send: Duration::from_millis(500),
            receive: Duration::from_millis(500),
        }
    }

    #[test]
    fn invalid_credentials_leave_client_disconnected() {
        let client = QuoteClient::new(ClientConfig::new("APP\n100", "token"));
        assert!(!client.is_connected());
        assert!(matches!(
            client.fetch_quote(&default_symbols()),
            Err(QuoteError::SessionUnavailable(_))
        ));
        assert_eq!(client.get_quote(&default_symbols()), "");
    }

    #[test]
    fn refused_connection_returns_empty_without_hanging() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClientConfig::new("APP-100", "token")
            .with_base_url(format!("http://127.0.0.1:{}", port))
            .with_timeouts(short_timeouts());
        let client = QuoteClient::new(config);
        assert!(client.is_connected());

        let started = Instant::now();
        assert_eq!(client.get_quote(&default_symbols()), "");
        assert!(started.elapsed() < short_timeouts().request_budget() + Duration::from_secs(1));
    }

    #[test]
    fn fetch_reports_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClientConfig::new("APP-100", "token")
            .with_base_url(format!("http://127.0.0.1:{}", port))
            .with_timeouts(short_timeouts());
        let client = QuoteClient::new(config);
        assert!(matches!(
            client.fetch_quote(&default_symbols()),
            Err(QuoteError::Transport(_))
        ));
    }

    #[test]
    fn client_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QuoteClient>();
    }
}
