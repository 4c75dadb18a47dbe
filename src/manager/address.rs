//! Turning what the user typed into a loadable URL

use url::{ParseError, Url};

use crate::utils::NavigationError;

/// Schemes a web view load may use
pub const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Parse an address string into an http(s) URL.
///
/// With `infer_scheme`, scheme-less input that looks like a host
/// (`example.com/path`, `localhost:8080`, `[::1]:8080`) is read as HTTPS.
pub fn parse_address(input: &str, infer_scheme: bool) -> Result<Url, NavigationError> {
    // C0 controls and spaces are dropped the same way `Url::parse` drops them
    let trimmed = input.trim_matches(|c: char| c <= ' ' || c.is_whitespace());
    if trimmed.is_empty() {
        return Err(NavigationError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(NavigationError::Malformed(trimmed.to_string()));
    }

    let url = match Url::parse(trimmed) {
        Ok(url) if infer_scheme && is_host_with_port(trimmed, url.scheme()) => with_https(trimmed)?,
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) if infer_scheme && looks_like_host(trimmed) => {
            with_https(trimmed)?
        }
        Err(e) => {
            log::debug!("`{}` is not a URL: {}", trimmed, e);
            return Err(NavigationError::Malformed(trimmed.to_string()));
        }
    };

    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(NavigationError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(NavigationError::MissingHost(trimmed.to_string()));
    }

    Ok(url)
}

fn with_https(input: &str) -> Result<Url, NavigationError> {
    Url::parse(&format!("https://{}", input))
        .map_err(|_| NavigationError::Malformed(input.to_string()))
}

/// `example.com:8080` parses as scheme `example.com`; a digit right after the
/// colon means it was a port.
fn is_host_with_port(input: &str, scheme: &str) -> bool {
    !SUPPORTED_SCHEMES.contains(&scheme)
        && input
            .get(scheme.len()..)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_digit())
        && looks_like_host(input)
}

fn looks_like_host(input: &str) -> bool {
    let authority = input
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if let Some(literal) = authority.strip_prefix('[') {
        // IPv6 literal, optionally followed by a port
        return match literal.split_once(']') {
            Some((addr, "")) => addr.contains(':'),
            Some((addr, port)) => addr.contains(':') && is_port(port),
            None => false,
        };
    }

    let host = authority.rsplit_once(':').map_or(authority, |(host, _)| host);

    if host.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return false;
    }
    host.eq_ignore_ascii_case("localhost") || host.contains('.')
}

fn is_port(suffix: &str) -> bool {
    suffix
        .strip_prefix(':')
        .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}
