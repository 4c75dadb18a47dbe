//! Load request type

use url::Url;

/// HTTP methods a web view load can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// A validated address ready to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    method: Method,
    url: Url,
}

impl LoadRequest {
    /// Create a GET request for an already validated URL
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
        }
    }

    /// Same request with the scheme swapped, `None` if the URL can't take it
    pub fn with_scheme(&self, scheme: &str) -> Option<Self> {
        let mut url = self.url.clone();
        url.set_scheme(scheme).ok()?;
        Some(Self { url, ..self.clone() })
    }

    /// Get the URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the method
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Check if the request goes over HTTPS
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }
}
