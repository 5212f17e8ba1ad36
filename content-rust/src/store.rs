use crate::{
    opentelemetry::trace_load, Category, Collection, ContentError, ContentFetcher, ContentItem,
    ContentKind, ContentResult,
};
use futures::{
    future::{BoxFuture, Shared},
    FutureExt,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

type SharedLoad = Shared<BoxFuture<'static, Result<Collection, Arc<ContentError>>>>;
type CacheKey = (ContentKind, Category);

/// State of one partition. A missing entry means nothing was requested yet
/// or the last retrieval failed.
enum CacheEntry {
    /// A retrieval is in flight. Concurrent callers await the same `load`.
    Pending { id: u64, load: SharedLoad },
    Resolved(Collection),
}

#[derive(Debug, Clone)]
pub struct ContentStoreOptions {
    /// Upper bound for a single retrieval. Expiry fails the load with
    /// `ContentError::Timeout`.
    pub timeout: Duration,
}

impl Default for ContentStoreOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Session-lifetime cache of content collections.
///
/// Each `(kind, category)` is retrieved at most once. Callers arriving while
/// a retrieval is in flight join it instead of issuing another one. Resolved
/// collections are never evicted; failed retrievals are not cached so a later
/// call retries.
pub struct ContentStore {
    fetcher: Arc<dyn ContentFetcher>,
    timeout: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    next_load_id: AtomicU64,
}

impl ContentStore {
    #[must_use]
    pub fn new(fetcher: Arc<dyn ContentFetcher>, options: ContentStoreOptions) -> Self {
        Self {
            fetcher,
            timeout: options.timeout,
            entries: Mutex::new(HashMap::new()),
            next_load_id: AtomicU64::new(0),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the collection if it has already resolved, without waiting.
    #[must_use]
    pub fn cached(&self, kind: ContentKind, category: &Category) -> Option<Collection> {
        match self.entries().get(&(kind, category.clone())) {
            Some(CacheEntry::Resolved(collection)) => Some(collection.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, kind: ContentKind, category: &Category) -> bool {
        matches!(
            self.entries().get(&(kind, category.clone())),
            Some(CacheEntry::Pending { .. })
        )
    }

    /// Load a collection, propagating retrieval failures.
    ///
    /// A resolved collection is returned without suspending.
    pub async fn try_load_category(
        &self,
        kind: ContentKind,
        category: &Category,
    ) -> ContentResult<Collection> {
        let key = (kind, category.clone());

        let (load_id, load) = {
            let mut entries = self.entries();
            match entries.get(&key) {
                Some(CacheEntry::Resolved(collection)) => {
                    tracing::debug!(kind = %kind, category = %category, "collection cache hit");
                    return Ok(collection.clone());
                }
                Some(CacheEntry::Pending { id, load }) => {
                    tracing::debug!(kind = %kind, category = %category, "joining in-flight load");
                    (*id, load.clone())
                }
                None => {
                    let id = self.next_load_id.fetch_add(1, Ordering::Relaxed);
                    let load = self.start_load(kind, category.clone());
                    entries.insert(
                        key.clone(),
                        CacheEntry::Pending {
                            id,
                            load: load.clone(),
                        },
                    );
                    (id, load)
                }
            }
        };

        let result = load.await;

        let mut entries = self.entries();
        let owns_entry = matches!(
            entries.get(&key),
            Some(CacheEntry::Pending { id, .. }) if *id == load_id
        );

        match result {
            Ok(collection) => {
                if owns_entry {
                    entries.insert(key, CacheEntry::Resolved(collection.clone()));
                }
                Ok(collection)
            }
            Err(error) => {
                if owns_entry {
                    entries.remove(&key);
                }
                drop(entries);
                Err(Arc::try_unwrap(error).unwrap_or_else(ContentError::Shared))
            }
        }
    }

    /// Load a collection. Failures are logged and an empty collection is
    /// returned in their place so callers can render something.
    pub async fn load_category(&self, kind: ContentKind, category: &Category) -> Collection {
        match self.try_load_category(kind, category).await {
            Ok(collection) => collection,
            Err(error) => {
                tracing::error!(
                    kind = %kind,
                    category = %category,
                    error = %error,
                    "failed to load collection"
                );
                Collection::default()
            }
        }
    }

    /// Resolve one item by id within its category. The first match wins.
    pub async fn get_item(
        &self,
        kind: ContentKind,
        category: &Category,
        id: &str,
    ) -> ContentResult<ContentItem> {
        let collection = self.try_load_category(kind, category).await?;

        collection
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                kind,
                category: category.clone(),
                id: id.to_string(),
            })
    }

    fn start_load(&self, kind: ContentKind, category: Category) -> SharedLoad {
        let fetcher = Arc::clone(&self.fetcher);
        let timeout = self.timeout;

        async move {
            let fetch = async {
                tokio::time::timeout(timeout, fetcher.fetch(kind, &category))
                    .await
                    .unwrap_or(Err(ContentError::Timeout(timeout)))
            };

            trace_load(fetcher.source(), kind, &category, fetch)
                .await
                .map(Arc::new)
                .map_err(Arc::new)
        }
        .boxed()
        .shared()
    }
}
