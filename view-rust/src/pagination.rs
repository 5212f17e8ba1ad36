use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// One entry of a condensed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Splits `total_items` into 1-based pages of `page_size`.
///
/// An empty list still has one (empty) page. A page size of 0 is treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
}

impl Pagination {
    #[must_use]
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    #[must_use]
    pub fn contains(&self, page: usize) -> bool {
        (1..=self.total_pages()).contains(&page)
    }

    /// Zero-based offsets of the items on `page`. Out-of-range pages are
    /// clamped to the nearest valid page.
    #[must_use]
    pub fn range(&self, page: usize) -> Range<usize> {
        let page = page.clamp(1, self.total_pages());
        let start = ((page - 1) * self.page_size).min(self.total_items);
        let end = (page * self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.range(page);
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// The page one step from `current`, held at the first and last page.
    #[must_use]
    pub fn step(&self, current: usize, direction: Direction) -> usize {
        let next = match direction {
            Direction::Prev => current.saturating_sub(1),
            Direction::Next => current.saturating_add(1),
        };
        next.clamp(1, self.total_pages())
    }

    /// First, last, current and the neighbours of current, with every gap
    /// collapsed into a single ellipsis.
    #[must_use]
    pub fn markers(&self, current: usize) -> Vec<PageMarker> {
        let total = self.total_pages();
        let current = current.clamp(1, total);

        let mut pages = vec![1, current - 1, current, current + 1, total];
        pages.retain(|page| (1..=total).contains(page));
        pages.sort_unstable();
        pages.dedup();

        let mut markers = Vec::with_capacity(pages.len() + 2);
        let mut previous: Option<usize> = None;
        for page in pages {
            if previous.is_some_and(|previous| page > previous + 1) {
                markers.push(PageMarker::Ellipsis);
            }
            markers.push(PageMarker::Page(page));
            previous = Some(page);
        }
        markers
    }
}
