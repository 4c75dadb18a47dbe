//! Shared utilities: error types and configuration

pub mod config;
pub mod error;

pub use config::NavigationConfig;
pub use error::{NavigationError, NetworkError, Result, WebnavError};
