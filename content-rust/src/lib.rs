mod collection_body;
pub mod content_test;
mod directory;
mod errors;
mod fetcher;
mod http;
mod opentelemetry;
mod store;
mod types;

pub use collection_body::parse_collection;
pub use directory::DirectoryFetcher;
pub use errors::*;
pub use fetcher::ContentFetcher;
pub use http::{HttpFetcher, HttpFetcherOptions};
pub use store::{ContentStore, ContentStoreOptions};
pub use types::*;
