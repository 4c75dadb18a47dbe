//! Request manager for an embedded web view
//!
//! The manager sits between the address bar and the view:
//! 1. Validate the typed address into a [`LoadRequest`]
//! 2. Refuse plain HTTP while secure mode is on
//! 3. Hand the request to the delegate, which does the actual load
//! 4. When the load fails, retry once over HTTP or show an error page

pub mod address;
pub mod error_page;

pub use address::parse_address;

use std::sync::{Arc, Weak};

use url::Url;

use crate::network::LoadRequest;
use crate::utils::{NavigationConfig, NavigationError, NetworkError};

/// Host side of the manager: performs loads and renders errors
pub trait RequestDelegate {
    /// Start loading `request`. Failures come back through
    /// [`RequestManager::process_error`].
    fn load_request(&self, request: &LoadRequest);

    /// Display an HTML error document in the view
    fn show_error(&self, html: &str);
}

/// Validates addresses and decides what to do with load failures
pub struct RequestManager {
    delegate: Option<Weak<dyn RequestDelegate>>,
    current_url: Option<Url>,
    secure_mode: bool,
    infer_scheme: bool,
}

impl RequestManager {
    /// Create a manager with default settings and no delegate
    pub fn new() -> Self {
        Self::with_config(NavigationConfig::default())
    }

    pub fn with_config(config: NavigationConfig) -> Self {
        Self {
            delegate: None,
            current_url: None,
            secure_mode: config.secure_mode,
            infer_scheme: config.infer_scheme,
        }
    }

    /// Attach the delegate. Only a weak reference is kept.
    pub fn set_delegate<D: RequestDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let delegate: Arc<dyn RequestDelegate> = delegate.clone();
        self.delegate = Some(Arc::downgrade(&delegate));
    }

    /// The delegate, if it is still alive
    pub fn delegate(&self) -> Option<Arc<dyn RequestDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Address of the last dispatched load
    pub fn current_url(&self) -> Option<&Url> {
        self.current_url.as_ref()
    }

    pub fn secure_mode(&self) -> bool {
        self.secure_mode
    }

    pub fn set_secure_mode(&mut self, secure_mode: bool) {
        self.secure_mode = secure_mode;
    }

    pub fn infer_scheme(&self) -> bool {
        self.infer_scheme
    }

    /// Validate `address` and dispatch it. Returns false, with no side
    /// effects, if the address is refused.
    pub fn load_request(&mut self, address: &str) -> bool {
        self.try_load_request(address).is_ok()
    }

    /// Like [`load_request`](Self::load_request), but says why an address
    /// was refused.
    pub fn try_load_request(&mut self, address: &str) -> Result<LoadRequest, NavigationError> {
        let url = parse_address(address, self.infer_scheme).inspect_err(|e| {
            log::warn!("refusing address: {}", e);
        })?;

        if self.secure_mode && url.scheme() != "https" {
            log::warn!("secure mode refuses {}", url);
            return Err(NavigationError::Insecure(url.to_string()));
        }

        let request = LoadRequest::get(url);
        self.dispatch(&request);
        Ok(request)
    }

    /// Handle a failure of the last dispatched load.
    ///
    /// A secure-transport failure on an HTTPS address is retried once over
    /// plain HTTP unless secure mode is on. Everything else is rendered as an
    /// error page for the delegate to show.
    pub fn process_error(&mut self, error: &NetworkError) {
        if let Some(request) = self.fallback_request(error) {
            log::info!("secure connection failed ({}), retrying over http", error);
            self.dispatch(&request);
            return;
        }

        log::debug!("showing error for {:?}: {}", self.current_url.as_ref().map(Url::as_str), error);
        let html = error_page::render(error, self.current_url.as_ref());
        match self.delegate() {
            Some(delegate) => delegate.show_error(&html),
            None => log::warn!("no delegate to show error: {}", error),
        }
    }

    fn fallback_request(&self, error: &NetworkError) -> Option<LoadRequest> {
        if self.secure_mode || !error.is_secure_transport_failure() {
            return None;
        }
        let current = self.current_url.as_ref().filter(|url| url.scheme() == "https")?;
        LoadRequest::get(current.clone()).with_scheme("http")
    }

    fn dispatch(&mut self, request: &LoadRequest) {
        self.current_url = Some(request.url().clone());
        match self.delegate() {
            Some(delegate) => {
                log::debug!("dispatching {}", request.url());
                delegate.load_request(request);
            }
            None => log::warn!("no delegate to load {}", request.url()),
        }
    }
}

impl Default for RequestManager {
    fn default() -> Self {
        Self::new()
    }
}
