use crate::{Page, Renderer, ViewController};
use portfolio_content::{Category, ContentKind, ContentStore};
use std::{collections::HashMap, sync::Arc};

/// Parameters of the site's navigation.
/// # Default Values
/// - `topics_per_page`: 6
/// - `items_per_page`: 12
/// - `article_topics`: `vec![]`
/// - `artwork_topics`: `vec![]`
/// - `titles`: empty, so every page uses `Page::default_title`
#[derive(Debug, Clone)]
pub struct ViewParams {
    /// Number of topic cards on one page of a topic list.
    pub topics_per_page: usize,
    /// Number of items on one page of a topic's item list.
    pub items_per_page: usize,
    /// Topics listed on the articles page, in display order.
    pub article_topics: Vec<Category>,
    /// Topics listed on the artworks page, in display order.
    pub artwork_topics: Vec<Category>,
    /// Document title overrides per page.
    pub titles: HashMap<Page, String>,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            topics_per_page: 6,
            items_per_page: 12,
            article_topics: Vec::new(),
            artwork_topics: Vec::new(),
            titles: HashMap::new(),
        }
    }
}

impl ViewParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topics_per_page(mut self, topics_per_page: usize) -> Self {
        self.topics_per_page = topics_per_page;
        self
    }

    #[must_use]
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    #[must_use]
    pub fn add_article_topic(mut self, topic: Category) -> Self {
        self.article_topics.push(topic);
        self
    }

    #[must_use]
    pub fn add_artwork_topic(mut self, topic: Category) -> Self {
        self.artwork_topics.push(topic);
        self
    }

    /// Override the document title of a page
    #[must_use]
    pub fn title(mut self, page: Page, title: impl Into<String>) -> Self {
        self.titles.insert(page, title.into());
        self
    }

    #[must_use]
    pub fn topics(&self, kind: ContentKind) -> &[Category] {
        match kind {
            ContentKind::Articles => &self.article_topics,
            ContentKind::Artworks => &self.artwork_topics,
        }
    }

    #[must_use]
    pub fn title_for(&self, page: Page) -> &str {
        self.titles
            .get(&page)
            .map_or_else(|| page.default_title(), String::as_str)
    }

    #[must_use]
    pub fn build(
        self,
        store: Arc<ContentStore>,
        renderer: Arc<dyn Renderer>,
    ) -> ViewController {
        ViewController::new(store, renderer, self)
    }
}
