//! Network side of a load: requests, fetching and fetched pages

mod fetcher;
mod page;
mod request;

pub use fetcher::{Fetcher, HttpFetcher, USER_AGENT};
pub use page::Page;
pub use request::{LoadRequest, Method};
