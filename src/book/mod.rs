pub(crate) mod page;
pub(crate) mod spread;

use crate::book::page::Page;
use crate::book::spread::{Spread, build_spreads};
use crate::foundation::core::{PageIndex, SpreadIndex};

/// Immutable page list plus its derived spreads.
///
/// The page list is fixed for the lifetime of a session, so spreads are computed once here.
#[derive(Clone, Debug)]
pub struct Book {
    pages: Vec<Page>,
    spreads: Vec<Spread>,
}

impl Book {
    /// Build a book from pages in display order. Indices are reassigned to match order.
    pub fn new(pages: Vec<Page>) -> Self {
        let pages: Vec<Page> = pages
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                p.index = PageIndex(i);
                p
            })
            .collect();
        let spreads = build_spreads(&pages);
        Self { pages, spreads }
    }

    /// Build a book from bare source references.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(page::pages_from_sources(sources))
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// All spreads in order.
    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of spreads.
    pub fn spread_count(&self) -> usize {
        self.spreads.len()
    }

    /// `true` when the book has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up one page.
    pub fn page(&self, idx: PageIndex) -> Option<&Page> {
        self.pages.get(idx.0)
    }

    /// Look up one spread.
    pub fn spread(&self, idx: SpreadIndex) -> Option<&Spread> {
        self.spreads.get(idx.0)
    }

    /// Index of the last spread, if any.
    pub fn last_spread(&self) -> Option<SpreadIndex> {
        self.spreads.len().checked_sub(1).map(SpreadIndex)
    }

    /// Page indices visible on a spread.
    pub fn pages_of(&self, idx: SpreadIndex) -> Vec<PageIndex> {
        self.spread(idx)
            .map(|s| s.pages().map(|p| p.index).collect())
            .unwrap_or_default()
    }

    /// First visible page of a spread.
    pub fn first_page_of(&self, idx: SpreadIndex) -> Option<PageIndex> {
        self.spread(idx)?.pages().next().map(|p| p.index)
    }

    /// Spread on which `page` is shown.
    pub fn spread_of_page(&self, page: PageIndex) -> Option<SpreadIndex> {
        let n = self.pages.len();
        if page.0 >= n {
            return None;
        }
        if page.0 == 0 {
            return Some(SpreadIndex(0));
        }
        if page.0 == n - 1 {
            return self.last_spread();
        }
        Some(SpreadIndex((page.0 - 1) / 2 + 1))
    }

    /// Page index reported to hosts when `idx` becomes current: `idx * 2`, clamped to the
    /// last page.
    pub fn reported_page(&self, idx: SpreadIndex) -> PageIndex {
        let last = self.pages.len().saturating_sub(1);
        PageIndex(idx.reported_page().0.min(last))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/book.rs"]
mod tests;
