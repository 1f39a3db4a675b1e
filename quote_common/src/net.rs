//! Networking constants for the quote API.

/// Quote API host.
pub const HOST: &str = "api-t1.fyers.in";
/// HTTPS port.
pub const HTTPS_PORT: u16 = 443;
/// Path prefix of the quotes endpoint; symbols are appended comma-joined.
pub const QUOTES_PATH: &str = "/data/quotes?symbols=";
/// User agent sent with every request.
pub const USER_AGENT: &str = "Fyers/3.0";
/// Value of the `Accept` header.
pub const ACCEPT: &str = "application/json";
/// Initial capacity of the response buffer.
pub const RESPONSE_BUFFER_SIZE: usize = 32 * 1024;
/// Largest capacity reserved up front from a server-supplied `Content-Length`.
pub const MAX_RESPONSE_PRESIZE: usize = 1024 * 1024;

/// Helper to format a base URL like "https://host:port".
pub fn https_url(host: &str, port: u16) -> String {
    format!("https://{}:{}", host, port)
}

/// Default base URL of the quote API.
pub fn default_base_url() -> String {
    https_url(HOST, HTTPS_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_uses_secure_port() {
        assert_eq!(default_base_url(), "https://api-t1.fyers.in:443");
    }
}
