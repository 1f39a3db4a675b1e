//! Client configuration: credentials, target URL and timeouts.
//!
//! Credentials are supplied by the caller (CLI flags or the `QUOTE_APP_ID` /
//! `QUOTE_ACCESS_TOKEN` environment variables), never compiled in.
//! The access token is kept in a `SecretString` so it does not leak through `Debug`.
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::net::{USER_AGENT, default_base_url};

/// Environment variable holding the application identifier.
pub const APP_ID_ENV: &str = "QUOTE_APP_ID";
/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "QUOTE_ACCESS_TOKEN";

/// Per-phase socket timeouts of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// DNS resolution.
    pub resolve: Duration,
    /// TCP + TLS connect.
    pub connect: Duration,
    /// Sending the request.
    pub send: Duration,
    /// Receiving the response.
    pub receive: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            resolve: Duration::from_millis(2000),
            connect: Duration::from_millis(3000),
            send: Duration::from_millis(5000),
            receive: Duration::from_millis(5000),
        }
    }
}

impl Timeouts {
    /// Budget for establishing a connection. Name resolution happens inside the
    /// connector, so it shares the connect budget.
    pub fn connect_budget(&self) -> Duration {
        self.resolve + self.connect
    }

    /// Upper bound for one request from resolve to the last body byte.
    pub fn request_budget(&self) -> Duration {
        self.resolve + self.connect + self.send + self.receive
    }
}

/// Immutable configuration of a `QuoteClient`.
#[derive(Debug)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
    app_id: String,
    access_token: SecretString,
    timeouts: Timeouts,
}

impl ClientConfig {
    /// Configuration for the default host with the given credentials.
    pub fn new(app_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: USER_AGENT.to_string(),
            app_id: app_id.into(),
            access_token: SecretString::from(access_token.into()),
            timeouts: Timeouts::default(),
        }
    }

    /// Override the scheme/host/port the client talks to.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `User-Agent`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the session timeouts.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Scheme, host and port, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured `User-Agent`.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Application identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Session timeouts.
    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Value of the `Authorization` header: `<app-id>:<access-token>`.
    pub fn authorization_header(&self) -> String {
        format!("{}:{}", self.app_id, self.access_token.expose_secret())
    }
}
