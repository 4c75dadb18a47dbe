//! HTML shown in the view when a load fails

use url::Url;

use crate::utils::NetworkError;

/// Heading for each kind of failure
fn heading(error: &NetworkError) -> &'static str {
    match error {
        NetworkError::Tls(_) | NetworkError::Certificate(_) => "Secure connection failed",
        NetworkError::DnsResolution(_) => "Server not found",
        NetworkError::Timeout => "The connection timed out",
        NetworkError::ConnectionRefused => "Unable to connect",
        NetworkError::Http(..) => "The page could not be loaded",
        NetworkError::Other(_) => "Failed to load page",
    }
}

/// Render a complete error document for `error`, naming `url` when known
pub fn render(error: &NetworkError, url: Option<&Url>) -> String {
    let heading = heading(error);
    let mut html = String::with_capacity(256);

    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>");
    push_escaped(&mut html, heading);
    html.push_str("</title></head><body><h1>");
    push_escaped(&mut html, heading);
    html.push_str("</h1><p>");
    push_escaped(&mut html, &error.to_string());
    html.push_str("</p>");

    if let Some(url) = url {
        html.push_str("<p><code>");
        push_escaped(&mut html, url.as_str());
        html.push_str("</code></p>");
    }

    html.push_str("</body></html>");
    html
}

/// Push HTML-escaped text into a string.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
