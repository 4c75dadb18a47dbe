//! Host shell driving a [`RequestManager`]
//!
//! The shell plays the web view: its delegate turns manager callbacks into
//! [`ViewEvent`]s on a channel, and [`Shell::navigate`] works through them,
//! fetching requests and reporting failures back to the manager until the
//! view either has a page or an error to show.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::manager::{RequestDelegate, RequestManager};
use crate::network::{Fetcher, LoadRequest, Page};
use crate::utils::{NavigationConfig, Result, WebnavError};

/// Something the manager asked the view to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Load(LoadRequest),
    ShowError(String),
}

/// What the view ended up displaying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page loaded
    Loaded(Page),
    /// An error document is shown instead
    Failed(String),
}

/// Delegate forwarding manager callbacks onto a channel
pub struct ChannelDelegate {
    events: UnboundedSender<ViewEvent>,
}

impl ChannelDelegate {
    pub fn new(events: UnboundedSender<ViewEvent>) -> Self {
        Self { events }
    }

    fn send(&self, event: ViewEvent) {
        if self.events.send(event).is_err() {
            log::warn!("view is gone, dropping event");
        }
    }
}

impl RequestDelegate for ChannelDelegate {
    fn load_request(&self, request: &LoadRequest) {
        self.send(ViewEvent::Load(request.clone()));
    }

    fn show_error(&self, html: &str) {
        self.send(ViewEvent::ShowError(html.to_string()));
    }
}

/// A minimal web view: one manager, one delegate, one fetcher
pub struct Shell<F> {
    manager: RequestManager,
    // Owns the delegate; the manager only holds a weak reference
    _delegate: Arc<ChannelDelegate>,
    events: UnboundedReceiver<ViewEvent>,
    fetcher: F,
}

impl<F: Fetcher> Shell<F> {
    pub fn new(config: NavigationConfig, fetcher: F) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let delegate = Arc::new(ChannelDelegate::new(tx));

        let mut manager = RequestManager::with_config(config);
        manager.set_delegate(&delegate);

        Self {
            manager,
            _delegate: delegate,
            events,
            fetcher,
        }
    }

    pub fn manager(&self) -> &RequestManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut RequestManager {
        &mut self.manager
    }

    /// Load `address` and follow it through to a page or an error document
    pub async fn navigate(&mut self, address: &str) -> Result<Outcome> {
        self.manager.try_load_request(address)?;

        while let Ok(event) = self.events.try_recv() {
            match event {
                ViewEvent::Load(request) => match self.fetcher.fetch(&request).await {
                    Ok(page) => return Ok(Outcome::Loaded(page)),
                    Err(e) => {
                        log::debug!("load of {} failed: {}", request.url(), e);
                        self.manager.process_error(&e);
                    }
                },
                ViewEvent::ShowError(html) => return Ok(Outcome::Failed(html)),
            }
        }

        Err(WebnavError::Other(format!("nothing was loaded for `{}`", address)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{NavigationError, NetworkError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers from a fixed table, recording every URL asked for
    struct ScriptedFetcher {
        answers: HashMap<String, std::result::Result<String, NetworkError>>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(answers: &[(&str, std::result::Result<&str, NetworkError>)]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|(url, answer)| (url.to_string(), answer.clone().map(str::to_string)))
                    .collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self, request: &LoadRequest) -> std::result::Result<Page, NetworkError> {
            let url = request.url().to_string();
            self.seen.lock().unwrap().push(url.clone());
            match self.answers.get(&url) {
                Some(Ok(html)) => Ok(Page::from_html(request.url().clone(), 200, html)),
                Some(Err(e)) => Err(e.clone()),
                None => Err(NetworkError::DnsResolution(url)),
            }
        }
    }

    #[tokio::test]
    async fn test_page_loads() {
        let fetcher = ScriptedFetcher::new(&[(
            "https://example.com/",
            Ok("<title>Example</title>"),
        )]);
        let mut shell = Shell::new(NavigationConfig::default(), fetcher);

        match shell.navigate("example.com").await.unwrap() {
            Outcome::Loaded(page) => assert_eq!(page.title(), "Example"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tls_failure_retried_over_http() {
        let fetcher = ScriptedFetcher::new(&[
            (
                "https://legacy.example/",
                Err(NetworkError::Tls("handshake failure".into())),
            ),
            ("http://legacy.example/", Ok("<title>Legacy</title>")),
        ]);
        let mut shell = Shell::new(NavigationConfig::default(), fetcher);

        let outcome = shell.navigate("https://legacy.example").await.unwrap();
        assert!(matches!(outcome, Outcome::Loaded(ref page) if page.title() == "Legacy"));
        assert_eq!(shell.manager().current_url().unwrap().as_str(), "http://legacy.example/");
        assert_eq!(
            *shell.fetcher.seen.lock().unwrap(),
            vec!["https://legacy.example/", "http://legacy.example/"]
        );
    }

    #[tokio::test]
    async fn test_secure_mode_shows_tls_failure() {
        let fetcher = ScriptedFetcher::new(&[(
            "https://legacy.example/",
            Err(NetworkError::Tls("handshake failure".into())),
        )]);
        let config = NavigationConfig {
            secure_mode: true,
            ..NavigationConfig::default()
        };
        let mut shell = Shell::new(config, fetcher);

        let outcome = shell.navigate("https://legacy.example").await.unwrap();
        assert!(matches!(outcome, Outcome::Failed(ref html) if html.contains("Secure connection failed")));
        assert_eq!(shell.fetcher.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fallback_shows_error() {
        let fetcher = ScriptedFetcher::new(&[
            (
                "https://legacy.example/",
                Err(NetworkError::Certificate("Expired".into())),
            ),
            ("http://legacy.example/", Err(NetworkError::ConnectionRefused)),
        ]);
        let mut shell = Shell::new(NavigationConfig::default(), fetcher);

        let outcome = shell.navigate("https://legacy.example").await.unwrap();
        assert!(matches!(outcome, Outcome::Failed(ref html) if html.contains("Unable to connect")));
    }

    #[tokio::test]
    async fn test_refused_address_is_an_error() {
        let mut shell = Shell::new(NavigationConfig::default(), ScriptedFetcher::new(&[]));
        shell.manager_mut().set_secure_mode(true);

        let err = shell.navigate("http://example.com").await.unwrap_err();
        assert!(matches!(err, WebnavError::Navigation(NavigationError::Insecure(_))));
        assert!(shell.fetcher.seen.lock().unwrap().is_empty());
    }
}
