use crate::{Page, View};
use portfolio_content::Category;

/// Everything `go_back` needs to put the site back where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub view: View,
    pub active_topic: Option<Category>,
    pub active_item: Option<String>,
    pub topic_page: usize,
    pub item_page: usize,
}

/// Navigation state of one session. Created once at start-up and only
/// changed by navigation actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    /// The page that was active before the current one.
    pub previous_page: Option<Page>,
    /// Single-level history consumed by `go_back`.
    pub previous: Option<NavigationSnapshot>,
    /// 1-based page of the topic list.
    pub topic_page: usize,
    /// 1-based page of the active topic's item list.
    pub item_page: usize,
    pub active_topic: Option<Category>,
    pub active_item: Option<String>,
    /// Bumped by every transition. Load results captured under an older
    /// epoch are stale.
    pub(crate) epoch: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: View::Home,
            previous_page: None,
            previous: None,
            topic_page: 1,
            item_page: 1,
            active_topic: None,
            active_item: None,
            epoch: 0,
        }
    }
}

impl NavigationState {
    #[must_use]
    pub fn active_page(&self) -> Page {
        self.view.page()
    }

    pub(crate) fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            view: self.view,
            active_topic: self.active_topic.clone(),
            active_item: self.active_item.clone(),
            topic_page: self.topic_page,
            item_page: self.item_page,
        }
    }

    /// Record the current position for `go_back` before a transition.
    pub(crate) fn remember(&mut self) {
        self.previous = Some(self.snapshot());
    }

    pub(crate) fn restore(&mut self, snapshot: NavigationSnapshot) {
        self.view = snapshot.view;
        self.active_topic = snapshot.active_topic;
        self.active_item = snapshot.active_item;
        self.topic_page = snapshot.topic_page;
        self.item_page = snapshot.item_page;
    }

    pub(crate) fn advance(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}
