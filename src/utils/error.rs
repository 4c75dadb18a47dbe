//! Error types for webnav

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Main error type for webnav operations
#[derive(Debug, Error)]
pub enum WebnavError {
    /// The address could not be turned into a load request
    #[error("navigation rejected: {0}")]
    Navigation(#[from] NavigationError),
    /// The load failed in transport
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    /// HTTP client could not be constructed
    #[error("client error: {0}")]
    Client(#[from] reqwest::Error),
    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Reasons an address string is refused before anything is dispatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Nothing to load
    #[error("address is empty")]
    Empty,
    /// Not parseable as a URL
    #[error("malformed address `{0}`")]
    Malformed(String),
    /// Parsed, but not http or https
    #[error("unsupported scheme `{0}`")]
    UnsupportedScheme(String),
    /// Parsed, but there is nothing to connect to
    #[error("address `{0}` has no host")]
    MissingHost(String),
    /// Plain HTTP address while secure mode is on
    #[error("insecure address `{0}` refused in secure mode")]
    Insecure(String),
}

/// Transport failures reported back for a dispatched load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// TLS handshake or protocol failure
    #[error("secure connection failed: {0}")]
    Tls(String),
    /// Server certificate was rejected
    #[error("server certificate rejected: {0}")]
    Certificate(String),
    /// DNS resolution failed
    #[error("could not resolve host: {0}")]
    DnsResolution(String),
    /// Connection timed out
    #[error("the request timed out")]
    Timeout,
    /// Connection refused
    #[error("connection refused")]
    ConnectionRefused,
    /// HTTP error with status code
    #[error("HTTP {0}: {1}")]
    Http(u16, String),
    /// Anything else the transport reports
    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    /// True for failures of the secure transport itself, the only kind an
    /// HTTP fallback can get around.
    pub fn is_secure_transport_failure(&self) -> bool {
        matches!(self, Self::Tls(_) | Self::Certificate(_))
    }

    /// Classify a reqwest failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }

        if let Some(status) = err.status() {
            return Self::Http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown").to_string(),
            );
        }

        let chain = error_chain(err);
        if let Some(tls) = chain.iter().find_map(|e| e.downcast_ref::<rustls::Error>()) {
            return match tls {
                rustls::Error::InvalidCertificate(cert) => Self::Certificate(format!("{:?}", cert)),
                other => Self::Tls(other.to_string()),
            };
        }

        let message = describe_chain(err);
        if err.is_connect() {
            let refused = chain
                .iter()
                .filter_map(|e| e.downcast_ref::<io::Error>())
                .any(|io| io.kind() == io::ErrorKind::ConnectionRefused);
            if refused {
                return Self::ConnectionRefused;
            }

            let lower = message.to_ascii_lowercase();
            if lower.contains("dns error") {
                let host = err
                    .url()
                    .and_then(|url| url.host_str())
                    .unwrap_or_default()
                    .to_string();
                return Self::DnsResolution(host);
            }

            // TLS errors we could not downcast, matched by what rustls and
            // OpenSSL print
            let https = err.url().is_some_and(|url| url.scheme() == "https");
            if https && lower.contains("certificate") {
                return Self::Certificate(message);
            }
            if https && TLS_FAILURE_MARKERS.iter().any(|marker| lower.contains(marker)) {
                return Self::Tls(message);
            }
        }

        Self::Other(message)
    }
}

/// Fragments of TLS failure messages from rustls and OpenSSL
const TLS_FAILURE_MARKERS: [&str; 8] = [
    "tls",
    "ssl",
    "handshake",
    "wrong version number",
    "corrupt message",
    "received fatal alert",
    "peer is incompatible",
    "peer misbehaved",
];

/// Every error reachable from `err`. io::Error::source skips its own
/// payload, so payloads are visited explicitly.
fn error_chain<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
    let mut chain = Vec::new();
    let mut pending = vec![err];
    while let Some(e) = pending.pop() {
        chain.push(e);
        match e.downcast_ref::<io::Error>().and_then(|io| io.get_ref()) {
            Some(payload) => pending.push(payload),
            None => pending.extend(e.source()),
        }
    }
    chain
}

fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}

/// Convenience Result type for webnav operations
pub type Result<T> = std::result::Result<T, WebnavError>;
