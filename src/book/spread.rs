use crate::book::page::Page;

/// Which bookend (if any) a spread is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadKind {
    /// Front cover: right slot only.
    Cover,
    /// Facing pages in the middle of the book.
    Inner,
    /// Back cover: left slot only.
    Back,
}

/// A pair of facing pages as shown on screen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Spread {
    /// Left-hand page.
    pub left: Option<Page>,
    /// Right-hand page.
    pub right: Option<Page>,
    /// Bookend classification.
    pub kind: SpreadKind,
}

impl Spread {
    fn cover(page: Page) -> Self {
        Self {
            left: None,
            right: Some(page),
            kind: SpreadKind::Cover,
        }
    }

    fn back(page: Page) -> Self {
        Self {
            left: Some(page),
            right: None,
            kind: SpreadKind::Back,
        }
    }

    fn inner(left: Page, right: Option<Page>) -> Self {
        Self {
            left: Some(left),
            right,
            kind: SpreadKind::Inner,
        }
    }

    /// `true` for the single-page front cover.
    pub fn is_cover(&self) -> bool {
        self.kind == SpreadKind::Cover
    }

    /// `true` for the single-page back cover.
    pub fn is_back(&self) -> bool {
        self.kind == SpreadKind::Back
    }

    /// Present pages in left-to-right order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Derive the spread sequence from a flat page list.
///
/// Page 0 is the front cover, the last page is the back cover, and everything between pairs
/// up left/right. With an odd number of inner pages the final inner spread carries only a
/// left page.
pub fn build_spreads(pages: &[Page]) -> Vec<Spread> {
    match pages {
        [] => Vec::new(),
        [only] => vec![Spread::cover(only.clone())],
        [first, inner @ .., last] => {
            let mut out = Vec::with_capacity(inner.len().div_ceil(2) + 2);
            out.push(Spread::cover(first.clone()));
            for pair in inner.chunks(2) {
                out.push(Spread::inner(pair[0].clone(), pair.get(1).cloned()));
            }
            out.push(Spread::back(last.clone()));
            out
        }
    }
}

/// Number of spreads [`build_spreads`] yields for `page_count` pages.
pub fn spread_count_for(page_count: usize) -> usize {
    match page_count {
        0 => 0,
        1 => 1,
        n => (n - 2).div_ceil(2) + 2,
    }
}
