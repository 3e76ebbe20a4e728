//! Matched content element snapshot.

use std::fmt;

/// Element identity within the host's content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a content element being rendered.
///
/// The element is opaque to this crate beyond its identity and an optional
/// intrinsic URL (an element without its own URL falls through to the
/// request-path canonical).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    url: Option<String>,
}

impl Element {
    pub fn new(id: u64) -> Self {
        Self {
            id: ElementId(id),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The element's intrinsic URL, if it has a non-empty one.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}
