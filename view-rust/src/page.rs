use crate::ViewError;
use portfolio_content::ContentKind;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Articles,
    Artworks,
    Contact,
}

impl Page {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Articles,
        Self::Artworks,
        Self::Contact,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Articles => "articles",
            Self::Artworks => "artworks",
            Self::Contact => "contact",
        }
    }

    /// Parse a URL fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Result<Self, ViewError> {
        fragment.strip_prefix('#').unwrap_or(fragment).parse()
    }

    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Home => "Your Name - Art & Words",
            Self::About => "Portfolio - About",
            Self::Articles => "Portfolio - Articles",
            Self::Artworks => "Portfolio - Artworks",
            Self::Contact => "Portfolio - Contact",
        }
    }

    /// The content kind listed on this page, if any.
    #[must_use]
    pub fn content_kind(self) -> Option<ContentKind> {
        match self {
            Self::Articles => Some(ContentKind::Articles),
            Self::Artworks => Some(ContentKind::Artworks),
            _ => None,
        }
    }
}

impl FromStr for Page {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| ViewError::UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticlesView {
    Topics,
    List,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtworksView {
    Topics,
    Grid,
}

/// A page together with its nested subview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Articles(ArticlesView),
    Artworks(ArtworksView),
    Contact,
}

impl View {
    /// The view a page opens on.
    #[must_use]
    pub fn initial(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::About => Self::About,
            Page::Articles => Self::Articles(ArticlesView::Topics),
            Page::Artworks => Self::Artworks(ArtworksView::Topics),
            Page::Contact => Self::Contact,
        }
    }

    #[must_use]
    pub fn page(self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::About => Page::About,
            Self::Articles(_) => Page::Articles,
            Self::Artworks(_) => Page::Artworks,
            Self::Contact => Page::Contact,
        }
    }

    /// The list view that shows the items of one topic of `kind`.
    #[must_use]
    pub fn item_list(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Articles => Self::Articles(ArticlesView::List),
            ContentKind::Artworks => Self::Artworks(ArtworksView::Grid),
        }
    }

    #[must_use]
    pub fn is_topics(self) -> bool {
        matches!(
            self,
            Self::Articles(ArticlesView::Topics) | Self::Artworks(ArtworksView::Topics)
        )
    }

    #[must_use]
    pub fn is_item_list(self) -> bool {
        matches!(
            self,
            Self::Articles(ArticlesView::List) | Self::Artworks(ArtworksView::Grid)
        )
    }

    /// Identifier of the container the renderer shows for this view.
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Articles(ArticlesView::Topics) => "articles-topics",
            Self::Articles(ArticlesView::List) => "article-list",
            Self::Articles(ArticlesView::Detail) => "article-content",
            Self::Artworks(ArtworksView::Topics) => "artworks-topics",
            Self::Artworks(ArtworksView::Grid) => "artwork-grid",
            Self::Contact => "contact",
        }
    }
}
