use crate::{Direction, Page};
use portfolio_content::Category;
use serde::{Deserialize, Serialize};

/// A user intent. This is the whole surface the UI layer drives the view
/// controller through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Intent {
    /// A navigation link was clicked.
    Navigate { page: Page },
    /// The site was opened, possibly with a fragment in its URL.
    Start { fragment: Option<String> },
    /// The browser moved through history; no new entry is recorded.
    HistoryPop { fragment: String },
    OpenTopic { category: Category },
    OpenItem { category: Category, id: String },
    Back,
    TopicPage { direction: Direction },
    ItemPage { direction: Direction },
    GoToTopicPage { page: usize },
    GoToItemPage { page: usize },
}

impl Intent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::Start { .. } => "start",
            Self::HistoryPop { .. } => "history-pop",
            Self::OpenTopic { .. } => "open-topic",
            Self::OpenItem { .. } => "open-item",
            Self::Back => "back",
            Self::TopicPage { .. } => "topic-page",
            Self::ItemPage { .. } => "item-page",
            Self::GoToTopicPage { .. } => "go-to-topic-page",
            Self::GoToItemPage { .. } => "go-to-item-page",
        }
    }
}

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// State changed and the new view was rendered.
    Applied,
    /// The call was not valid from the current view; nothing changed.
    Ignored,
    /// A load finished after the user had moved on; its result was dropped.
    Stale,
    /// Content could not be loaded; an inline error was rendered.
    Failed,
}
