use std::fmt;

/// 0-based index of a page (image) in book order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PageIndex(pub usize);

/// 0-based index of a spread in the derived spread sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SpreadIndex(pub usize);

impl SpreadIndex {
    /// Page index reported to hosts when this spread becomes current (`spread * 2`).
    pub fn reported_page(self) -> PageIndex {
        PageIndex(self.0.saturating_mul(2))
    }

    /// Direction of travel from `self` to `to`.
    pub fn direction_to(self, to: SpreadIndex) -> Direction {
        match to.0.cmp(&self.0) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Back,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.0)
    }
}

impl fmt::Display for SpreadIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spread {}", self.0)
    }
}

/// Direction of the most recent navigation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward higher spread indices.
    Forward,
    /// Toward lower spread indices.
    Back,
    /// No navigation has happened yet.
    #[default]
    None,
}

/// Absolute distance between two page indices.
pub(crate) fn page_distance(a: PageIndex, b: PageIndex) -> usize {
    a.0.abs_diff(b.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
