use crate::{
    opentelemetry::IntentSpan, ArticlesView, ArtworksView, Direction, Intent, NavigationState,
    Outcome, Page, PageWindow, Pagination, Renderer, Screen, View, ViewError, ViewParams,
};
use futures::lock::Mutex;
use portfolio_content::{Category, ContentKind, ContentStore};
use std::sync::Arc;
use tracing_futures::Instrument;

/// Owns the navigation state of a session and drives the renderer.
///
/// Every navigation call returns an `Outcome` instead of failing: calls that
/// are not valid from the current view are ignored, load failures become an
/// inline error screen, and load results that arrive after the user moved on
/// are dropped.
pub struct ViewController {
    store: Arc<ContentStore>,
    renderer: Arc<dyn Renderer>,
    params: ViewParams,
    state: Mutex<NavigationState>,
}

impl ViewController {
    #[must_use]
    pub fn new(store: Arc<ContentStore>, renderer: Arc<dyn Renderer>, params: ViewParams) -> Self {
        Self {
            store,
            renderer,
            params,
            state: Mutex::new(NavigationState::default()),
        }
    }

    #[must_use]
    pub fn builder() -> ViewParams {
        ViewParams::new()
    }

    #[must_use]
    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    #[must_use]
    pub fn store(&self) -> &Arc<ContentStore> {
        &self.store
    }

    pub async fn state(&self) -> NavigationState {
        self.state.lock().await.clone()
    }

    /// Apply a user intent. This is the entry point for the UI layer.
    pub async fn dispatch(&self, intent: Intent) -> Outcome {
        let mut span = IntentSpan::new(intent.name());
        let outcome = self.apply(intent).instrument(span.span()).await;
        let view = self.state.lock().await.view;
        span.on_end(outcome, view);
        outcome
    }

    async fn apply(&self, intent: Intent) -> Outcome {
        match intent {
            Intent::Navigate { page } => self.navigate_to(page).await,
            Intent::Start { fragment } => self.start(fragment.as_deref()).await,
            Intent::HistoryPop { fragment } => self.restore_fragment(&fragment).await,
            Intent::OpenTopic { category } => self.open_topic(category).await,
            Intent::OpenItem { category, id } => self.open_item(category, id).await,
            Intent::Back => self.go_back().await,
            Intent::TopicPage { direction } => self.change_topic_page(direction).await,
            Intent::ItemPage { direction } => self.change_item_page(direction).await,
            Intent::GoToTopicPage { page } => self.go_to_topic_page(page).await,
            Intent::GoToItemPage { page } => self.go_to_item_page(page).await,
        }
    }

    /// Show the first view. A fragment naming a page opens that page; the
    /// fragment is already in the URL so no history entry is added.
    pub async fn start(&self, fragment: Option<&str>) -> Outcome {
        let fragment = fragment
            .map(|fragment| fragment.trim_start_matches('#'))
            .filter(|fragment| !fragment.is_empty());

        if let Some(fragment) = fragment {
            match Page::from_fragment(fragment) {
                Ok(page) => return self.show_page(page, false).await,
                Err(error) => {
                    tracing::warn!(fragment, error = %error, "unknown page in start-up fragment");
                }
            }
        }

        let view = self.state.lock().await.view;
        self.renderer.set_title(self.params.title_for(view.page()));
        self.renderer.set_visible(view);
        self.refresh().await
    }

    pub async fn navigate_to(&self, page: Page) -> Outcome {
        self.show_page(page, true).await
    }

    /// Navigate to the page named by a fragment such as `#about`. Unknown
    /// pages are ignored.
    pub async fn navigate_to_fragment(&self, fragment: &str) -> Outcome {
        match Page::from_fragment(fragment) {
            Ok(page) => self.show_page(page, true).await,
            Err(error) => {
                tracing::warn!(fragment, error = %error, "ignoring navigation to unknown page");
                Outcome::Ignored
            }
        }
    }

    /// Browser back/forward. Same as `navigate_to_fragment` but the browser
    /// has already moved through its history, so no entry is pushed.
    pub async fn restore_fragment(&self, fragment: &str) -> Outcome {
        match Page::from_fragment(fragment) {
            Ok(page) => self.show_page(page, false).await,
            Err(error) => {
                tracing::warn!(fragment, error = %error, "ignoring history entry for unknown page");
                Outcome::Ignored
            }
        }
    }

    async fn show_page(&self, page: Page, push_history: bool) -> Outcome {
        let view = {
            let mut state = self.state.lock().await;
            state.remember();
            state.previous_page = Some(state.view.page());
            state.view = View::initial(page);
            state.active_topic = None;
            state.active_item = None;
            state.topic_page = 1;
            state.item_page = 1;
            state.advance();
            state.view
        };

        if push_history {
            self.renderer.push_fragment(page.id());
        }
        self.renderer.set_title(self.params.title_for(page));
        self.renderer.set_visible(view);
        self.refresh().await
    }

    /// Drill into a topic from the articles or artworks page.
    pub async fn open_topic(&self, category: Category) -> Outcome {
        let view = {
            let mut state = self.state.lock().await;
            let kind = match state.view {
                View::Articles(ArticlesView::Topics | ArticlesView::List) => ContentKind::Articles,
                View::Artworks(ArtworksView::Topics | ArtworksView::Grid) => ContentKind::Artworks,
                view => {
                    tracing::warn!(
                        view = view.container_id(),
                        category = %category,
                        "open_topic is not available from this view"
                    );
                    return Outcome::Ignored;
                }
            };

            state.remember();
            state.view = View::item_list(kind);
            state.active_topic = Some(category);
            state.active_item = None;
            state.item_page = 1;
            state.advance();
            state.view
        };

        self.renderer.set_visible(view);
        self.refresh().await
    }

    /// Open one article of the list being shown. On failure the list stays
    /// the current view and an inline error is rendered.
    pub async fn open_item(&self, category: Category, id: String) -> Outcome {
        let epoch = {
            let state = self.state.lock().await;
            if state.view != View::Articles(ArticlesView::List) {
                tracing::warn!(
                    view = state.view.container_id(),
                    id = %id,
                    "open_item is not available from this view"
                );
                return Outcome::Ignored;
            }
            if state.active_topic.as_ref() != Some(&category) {
                tracing::warn!(
                    topic = ?state.active_topic,
                    category = %category,
                    id = %id,
                    "open_item names a category other than the open topic"
                );
                return Outcome::Ignored;
            }
            state.epoch
        };

        let result = self
            .store
            .get_item(ContentKind::Articles, &category, &id)
            .await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            tracing::debug!(category = %category, id = %id, "discarding stale item");
            return Outcome::Stale;
        }

        match result {
            Ok(item) => {
                state.remember();
                state.view = View::Articles(ArticlesView::Detail);
                state.active_topic = Some(category.clone());
                state.active_item = Some(id);
                state.advance();

                self.renderer.set_visible(state.view);
                self.renderer.render(Screen::Detail { category, item });
                Outcome::Applied
            }
            Err(error) => {
                self.render_error(state.view, &ViewError::from(error));
                Outcome::Failed
            }
        }
    }

    /// Return to the position recorded before the last transition. The
    /// record is consumed, so a second call without navigating is a no-op.
    pub async fn go_back(&self) -> Outcome {
        let (view, page_changed) = {
            let mut state = self.state.lock().await;
            if state.view == View::Home {
                return Outcome::Ignored;
            }
            let Some(snapshot) = state.previous.take() else {
                return Outcome::Ignored;
            };

            let from = state.view.page();
            state.restore(snapshot);
            let to = state.view.page();
            if from != to {
                state.previous_page = Some(from);
            }
            state.advance();
            (state.view, from != to)
        };

        if page_changed {
            self.renderer.push_fragment(view.page().id());
            self.renderer.set_title(self.params.title_for(view.page()));
        }
        self.renderer.set_visible(view);
        self.refresh().await
    }

    pub async fn change_topic_page(&self, direction: Direction) -> Outcome {
        self.move_topic_page(|pagination, current| Some(pagination.step(current, direction)))
            .await
    }

    /// Jump to a topic page. Pages outside `1..=total_pages` are ignored.
    pub async fn go_to_topic_page(&self, page: usize) -> Outcome {
        self.move_topic_page(|pagination, _| pagination.contains(page).then_some(page))
            .await
    }

    pub async fn change_item_page(&self, direction: Direction) -> Outcome {
        self.move_item_page(|pagination, current| Some(pagination.step(current, direction)))
            .await
    }

    /// Jump to an item page. Pages outside `1..=total_pages` are ignored.
    pub async fn go_to_item_page(&self, page: usize) -> Outcome {
        self.move_item_page(|pagination, _| pagination.contains(page).then_some(page))
            .await
    }

    async fn move_topic_page(
        &self,
        target: impl FnOnce(&Pagination, usize) -> Option<usize>,
    ) -> Outcome {
        {
            let mut state = self.state.lock().await;
            let kind = match state.view.page().content_kind() {
                Some(kind) if state.view.is_topics() => kind,
                _ => return Outcome::Ignored,
            };

            let pagination = Pagination::new(
                self.params.topics(kind).len(),
                self.params.topics_per_page,
            );
            match target(&pagination, state.topic_page) {
                Some(page) if page != state.topic_page => {
                    state.topic_page = page;
                    state.advance();
                }
                _ => return Outcome::Ignored,
            }
        }

        self.refresh().await
    }

    async fn move_item_page(
        &self,
        target: impl FnOnce(&Pagination, usize) -> Option<usize>,
    ) -> Outcome {
        {
            let mut state = self.state.lock().await;
            let kind = match state.view.page().content_kind() {
                Some(kind) if state.view.is_item_list() => kind,
                _ => return Outcome::Ignored,
            };
            // Paging waits until the topic's collection has loaded.
            let Some(collection) = state
                .active_topic
                .as_ref()
                .and_then(|category| self.store.cached(kind, category))
            else {
                return Outcome::Ignored;
            };

            let pagination = Pagination::new(collection.len(), self.params.items_per_page);
            match target(&pagination, state.item_page) {
                Some(page) if page != state.item_page => {
                    state.item_page = page;
                    state.advance();
                }
                _ => return Outcome::Ignored,
            }
        }

        self.refresh().await
    }

    /// Render the current view, loading its content when needed. The result
    /// is only rendered if no transition happened while loading.
    async fn refresh(&self) -> Outcome {
        let state = {
            let state = self.state.lock().await;
            if let Some((kind, category)) = self.pending_topic(&state) {
                self.renderer.render(Screen::Loading { kind, category });
            }
            state.clone()
        };

        let screen = match state.view {
            View::Home | View::About | View::Contact => Ok(Screen::Static(state.view.page())),
            View::Articles(ArticlesView::Topics) => {
                Ok(self.topics_screen(ContentKind::Articles, state.topic_page))
            }
            View::Artworks(ArtworksView::Topics) => {
                Ok(self.topics_screen(ContentKind::Artworks, state.topic_page))
            }
            View::Articles(ArticlesView::List) => {
                self.items_screen(ContentKind::Articles, &state).await
            }
            View::Artworks(ArtworksView::Grid) => {
                self.items_screen(ContentKind::Artworks, &state).await
            }
            View::Articles(ArticlesView::Detail) => self.detail_screen(&state).await,
        };

        let current = self.state.lock().await;
        if current.epoch != state.epoch {
            tracing::debug!(
                view = state.view.container_id(),
                topic = ?state.active_topic,
                "discarding stale result"
            );
            return Outcome::Stale;
        }

        match screen {
            Ok(screen) => {
                self.renderer.render(screen);
                Outcome::Applied
            }
            Err(error) => {
                self.render_error(current.view, &error);
                Outcome::Failed
            }
        }
    }

    /// The topic whose collection the current view shows but has not loaded.
    fn pending_topic(&self, state: &NavigationState) -> Option<(ContentKind, Category)> {
        if !state.view.is_item_list() {
            return None;
        }
        let kind = state.view.page().content_kind()?;
        let category = state.active_topic.clone()?;
        self.store
            .cached(kind, &category)
            .is_none()
            .then_some((kind, category))
    }

    fn topics_screen(&self, kind: ContentKind, page: usize) -> Screen {
        let topics = self.params.topics(kind);
        let pagination = Pagination::new(topics.len(), self.params.topics_per_page);
        let page = page.clamp(1, pagination.total_pages());

        Screen::Topics {
            kind,
            topics: pagination.slice(topics, page).to_vec(),
            window: PageWindow::new(&pagination, page),
        }
    }

    async fn items_screen(
        &self,
        kind: ContentKind,
        state: &NavigationState,
    ) -> Result<Screen, ViewError> {
        let Some(category) = state.active_topic.clone() else {
            return Ok(self.topics_screen(kind, state.topic_page));
        };

        let collection = self.store.try_load_category(kind, &category).await?;
        let pagination = Pagination::new(collection.len(), self.params.items_per_page);
        let page = state.item_page.clamp(1, pagination.total_pages());

        Ok(Screen::Items {
            kind,
            items: pagination.slice(&collection, page).to_vec(),
            window: PageWindow::new(&pagination, page),
            category,
        })
    }

    async fn detail_screen(&self, state: &NavigationState) -> Result<Screen, ViewError> {
        let (Some(category), Some(id)) = (state.active_topic.clone(), state.active_item.as_ref())
        else {
            return Ok(self.topics_screen(ContentKind::Articles, state.topic_page));
        };

        let item = self
            .store
            .get_item(ContentKind::Articles, &category, id)
            .await?;
        Ok(Screen::Detail { category, item })
    }

    fn render_error(&self, view: View, error: &ViewError) {
        tracing::warn!(view = view.container_id(), error = %error, "rendering inline error");
        self.renderer.render(Screen::Error {
            view,
            message: error.user_message(),
            retryable: error.is_retryable(),
        });
    }
}
