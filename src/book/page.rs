use crate::foundation::core::PageIndex;

/// One image in the book.
///
/// `source` is opaque to the controller: a URL, a file path, or a CMS id. Resolving it to
/// pixels is left to the host.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    /// Position in book order.
    pub index: PageIndex,
    /// Host-resolvable image reference.
    pub source: String,
}

impl Page {
    /// Build a page from its position and source reference.
    pub fn new(index: usize, source: impl Into<String>) -> Self {
        Self {
            index: PageIndex(index),
            source: source.into(),
        }
    }
}

/// Assign consecutive indices to a list of sources.
pub fn pages_from_sources<I, S>(sources: I) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    sources
        .into_iter()
        .enumerate()
        .map(|(i, s)| Page::new(i, s))
        .collect()
}
