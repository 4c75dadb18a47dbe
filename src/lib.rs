//! # webnav - address handling for an embedded web view
//!
//! Validates what the user typed, enforces HTTPS-only browsing when asked
//! to, and decides what happens when a load fails.
//!
//! ## Architecture
//!
//! - **manager**: `RequestManager` and the `RequestDelegate` it drives
//! - **network**: load requests, fetching and fetched pages
//! - **shell**: a host loop standing in for the web view
//! - **utils**: shared error types and configuration

pub mod manager;
pub mod network;
pub mod shell;
pub mod utils;

// Re-export main types for convenience
pub use manager::{RequestDelegate, RequestManager};
pub use network::LoadRequest;
pub use utils::config::NavigationConfig;
pub use utils::error::{NavigationError, NetworkError, Result, WebnavError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "webnav";
