use crate::{Category, ContentItem, ContentKind, ContentResult};

/// Retrieval seam of the content store. Any type that can produce the records
/// of one `(kind, category)` partition can back a `ContentStore`.
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Short name of the backing source, used in logs and spans.
    fn source(&self) -> &'static str;
    /// Retrieve and parse every record of the partition. Called at most once
    /// per partition per session by the store.
    async fn fetch(&self, kind: ContentKind, category: &Category)
        -> ContentResult<Vec<ContentItem>>;
}
