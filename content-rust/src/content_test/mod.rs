mod fetcher;

pub use fetcher::{DeferredFetch, MockContentFetcher, MockFetchResult};
