use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use futures::channel::oneshot;

use crate::{Category, ContentError, ContentFetcher, ContentItem, ContentKind, ContentResult};

/// Result for a mocked `fetch` call.
pub enum MockFetchResult {
    Items(Vec<ContentItem>),
    Error(ContentError),
    /// The fetch stays pending until the paired `DeferredFetch` is settled.
    Deferred(oneshot::Receiver<ContentResult<Vec<ContentItem>>>),
}

impl MockFetchResult {
    pub fn items(items: Vec<ContentItem>) -> Self {
        Self::Items(items)
    }

    pub fn error(error: ContentError) -> Self {
        Self::Error(error)
    }
}

impl From<Vec<ContentItem>> for MockFetchResult {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::items(items)
    }
}

impl From<ContentError> for MockFetchResult {
    fn from(error: ContentError) -> Self {
        Self::error(error)
    }
}

/// Handle settling a deferred mocked fetch.
pub struct DeferredFetch {
    sender: oneshot::Sender<ContentResult<Vec<ContentItem>>>,
}

impl DeferredFetch {
    pub fn resolve(self, items: Vec<ContentItem>) {
        // The fetch may have been dropped already; nothing is waiting then.
        let _ = self.sender.send(Ok(items));
    }

    pub fn fail(self, error: ContentError) {
        let _ = self.sender.send(Err(error));
    }
}

#[derive(Default)]
struct MockContentFetcherState {
    mocked_results: HashMap<(ContentKind, Category), VecDeque<MockFetchResult>>,
    tracked_fetches: Vec<(ContentKind, Category)>,
}

/// A mock fetcher for testing that tracks requested partitions and yields
/// predefined results per partition in FIFO order.
#[derive(Default)]
pub struct MockContentFetcher {
    state: Mutex<MockContentFetcherState>,
}

impl MockContentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a result for the next fetch of `(kind, category)`.
    pub fn enqueue(
        &self,
        kind: ContentKind,
        category: &Category,
        result: impl Into<MockFetchResult>,
    ) -> &Self {
        let mut state = self.state.lock().unwrap();
        state
            .mocked_results
            .entry((kind, category.clone()))
            .or_default()
            .push_back(result.into());
        self
    }

    /// Enqueue a fetch of `(kind, category)` that stays pending until the
    /// returned handle is settled.
    pub fn enqueue_deferred(&self, kind: ContentKind, category: &Category) -> DeferredFetch {
        let (sender, receiver) = oneshot::channel();
        self.enqueue(kind, category, MockFetchResult::Deferred(receiver));
        DeferredFetch { sender }
    }

    /// Every fetch received so far, in call order.
    pub fn tracked_fetches(&self) -> Vec<(ContentKind, Category)> {
        self.state.lock().unwrap().tracked_fetches.clone()
    }

    pub fn fetch_count(&self, kind: ContentKind, category: &Category) -> usize {
        self.state
            .lock()
            .unwrap()
            .tracked_fetches
            .iter()
            .filter(|(k, c)| *k == kind && c == category)
            .count()
    }

    /// Clear tracked fetches but keep queued results.
    pub fn reset(&self) {
        self.state.lock().unwrap().tracked_fetches.clear();
    }

    /// Clear tracked fetches and queued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().unwrap();
        state.mocked_results.clear();
        state.tracked_fetches.clear();
    }
}

#[async_trait::async_trait]
impl ContentFetcher for MockContentFetcher {
    fn source(&self) -> &'static str {
        "mock"
    }

    async fn fetch(
        &self,
        kind: ContentKind,
        category: &Category,
    ) -> ContentResult<Vec<ContentItem>> {
        let next = {
            let mut state = self.state.lock().unwrap();
            state.tracked_fetches.push((kind, category.clone()));
            state
                .mocked_results
                .get_mut(&(kind, category.clone()))
                .and_then(VecDeque::pop_front)
        };

        match next {
            Some(MockFetchResult::Items(items)) => Ok(items),
            Some(MockFetchResult::Error(error)) => Err(error),
            Some(MockFetchResult::Deferred(receiver)) => receiver.await.unwrap_or_else(|_| {
                Err(ContentError::Io(format!(
                    "Deferred fetch for {kind}/{category} was dropped"
                )))
            }),
            None => Err(ContentError::StatusCode(
                reqwest::StatusCode::NOT_FOUND,
                format!("No mocked result for {kind}/{category}"),
            )),
        }
    }
}
