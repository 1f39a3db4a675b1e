//! Persistent HTTP session to the quote API.
//!
//! A `Session` exclusively owns the blocking HTTP client together with its
//! keep-alive connection and the pre-built request headers. It is opened once and
//! released when dropped; it cannot be cloned, only moved.
use log::{debug, info, warn};
use quote_common::ClientConfig;
use quote_common::Result;
use quote_common::net::{ACCEPT, MAX_RESPONSE_PRESIZE, RESPONSE_BUFFER_SIZE};
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;

/// Open session with one reusable connection to a fixed host.
#[derive(Debug)]
pub struct Session {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl Session {
    /// Build the headers and the HTTP client for `config`.
    ///
    /// Fails if the credentials do not form a valid header value or if the TLS
    /// backend cannot be initialised. No connection is made until the first request.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&config.authorization_header())?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let timeouts = config.timeouts();
        let http = Client::builder()
            .user_agent(config.user_agent())
            .connect_timeout(timeouts.connect_budget())
            .timeout(timeouts.request_budget())
            .redirect(Policy::none())
            .pool_max_idle_per_host(1)
            .tcp_nodelay(true)
            .gzip(true)
            .deflate(true)
            .build()?;

        info!("Session opened for {}", config.base_url());
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            headers,
        })
    }

    /// Base URL this session talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET for `path` and read the whole body as text.
    ///
    /// Redirects are returned as-is and the body is returned for any status.
    pub fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let mut response = self.http.get(&url).headers(self.headers.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} answered {}", path, status);
        }

        // Content-Length is only a hint; the buffer grows past the cap if needed.
        let capacity = response
            .content_length()
            .and_then(|len| usize::try_from(len).ok())
            .map_or(RESPONSE_BUFFER_SIZE, |len| {
                len.min(MAX_RESPONSE_PRESIZE).max(RESPONSE_BUFFER_SIZE)
            });
        let mut body = Vec::with_capacity(capacity);
        response.copy_to(&mut body)?;
        debug!("GET {} -> {} ({} bytes)", path, status, body.len());

        Ok(String::from_utf8(body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Session for {} closed", self.base_url);
    }
}
