#![allow(dead_code)]

use portfolio_content::{
    content_test::MockContentFetcher, Article, Artwork, Category, ContentItem, ContentStore,
    ContentStoreOptions,
};
use portfolio_view::{Renderer, Screen, View, ViewController, ViewParams};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Render(Screen),
    Visible(View),
    Title(String),
    Fragment(String),
}

/// Renderer that records every call it receives.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RenderCall::Render(screen) => Some(screen),
                _ => None,
            })
            .collect()
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.screens().pop()
    }

    pub fn last_visible(&self) -> Option<View> {
        self.calls().into_iter().rev().find_map(|call| match call {
            RenderCall::Visible(view) => Some(view),
            _ => None,
        })
    }

    pub fn titles(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RenderCall::Title(title) => Some(title),
                _ => None,
            })
            .collect()
    }

    pub fn fragments(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RenderCall::Fragment(fragment) => Some(fragment),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, screen: Screen) {
        self.calls.lock().unwrap().push(RenderCall::Render(screen));
    }

    fn set_visible(&self, view: View) {
        self.calls.lock().unwrap().push(RenderCall::Visible(view));
    }

    fn set_title(&self, title: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(RenderCall::Title(title.to_string()));
    }

    fn push_fragment(&self, fragment: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(RenderCall::Fragment(fragment.to_string()));
    }
}

pub struct Harness {
    pub fetcher: Arc<MockContentFetcher>,
    pub renderer: Arc<RecordingRenderer>,
    pub controller: ViewController,
}

pub fn harness(params: ViewParams) -> Harness {
    let fetcher = Arc::new(MockContentFetcher::new());
    let renderer = Arc::new(RecordingRenderer::default());
    let store = Arc::new(ContentStore::new(
        fetcher.clone(),
        ContentStoreOptions::default(),
    ));
    let controller = params.build(store, renderer.clone());

    Harness {
        fetcher,
        renderer,
        controller,
    }
}

pub fn category(name: &str) -> Category {
    Category::new(name).expect("valid category")
}

pub fn article(id: &str) -> ContentItem {
    ContentItem::Article(Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        excerpt: String::new(),
        date: "2024-01-01".to_string(),
        content: format!("Body of {id}"),
        tags: vec![],
        image: None,
    })
}

pub fn articles(prefix: &str, count: usize) -> Vec<ContentItem> {
    (0..count).map(|i| article(&format!("{prefix}-{i}"))).collect()
}

pub fn artwork(id: &str) -> ContentItem {
    ContentItem::Artwork(Artwork {
        id: id.to_string(),
        title: format!("Artwork {id}"),
        medium: "Ink".to_string(),
        dimensions: "A4".to_string(),
        year: "2024".to_string(),
        description: String::new(),
        tags: vec![],
        image: None,
    })
}
