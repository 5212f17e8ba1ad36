use crate::{Page, PageMarker, Pagination, View};
use portfolio_content::{Category, ContentItem, ContentKind};

/// Position within a paginated list, as shown under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub markers: Vec<PageMarker>,
}

impl PageWindow {
    #[must_use]
    pub fn new(pagination: &Pagination, page: usize) -> Self {
        Self {
            page,
            total_pages: pagination.total_pages(),
            markers: pagination.markers(page),
        }
    }
}

/// What the renderer should draw inside the visible container.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// A page without loaded content (home, about, contact).
    Static(Page),
    Topics {
        kind: ContentKind,
        topics: Vec<Category>,
        window: PageWindow,
    },
    Loading {
        kind: ContentKind,
        category: Category,
    },
    Items {
        kind: ContentKind,
        category: Category,
        items: Vec<ContentItem>,
        window: PageWindow,
    },
    Detail {
        category: Category,
        item: ContentItem,
    },
    /// Inline error shown in place of content. The current view is kept so
    /// back navigation stays coherent.
    Error {
        view: View,
        message: String,
        retryable: bool,
    },
}

/// The rendering collaborator. Implementations own the document; the view
/// controller only tells them what to show.
pub trait Renderer: Send + Sync {
    fn render(&self, screen: Screen);
    /// Show the container for `view` and hide every other one.
    fn set_visible(&self, view: View);
    fn set_title(&self, title: &str);
    /// Record `fragment` as a new history entry (`#<fragment>`).
    fn push_fragment(&self, fragment: &str);
}
