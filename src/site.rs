//! Site descriptors for multi-site publishing targets.

use std::fmt;
use url::Url;

/// Site identity within the host's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A locale-specific publishing target.
///
/// `language` is a locale tag as configured in the host (e.g. `en_US`);
/// [`Site::hreflang`] converts it to the lowercase hyphenated form the
/// hreflang attribute expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub handle: String,
    pub language: String,
    /// Base URL the host builds site-scoped URLs against. A site without a
    /// valid base URL cannot produce alternate entries.
    pub base_url: Option<Url>,
}

impl Site {
    pub fn new(id: u64, handle: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: SiteId(id),
            handle: handle.into(),
            language: language.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// The site's hreflang language tag: lowercase, `_` replaced by `-`.
    ///
    /// `en_US` -> `en-us`, `nb_NO` -> `nb-no`.
    #[inline]
    pub fn hreflang(&self) -> String {
        self.language.replace('_', "-").to_ascii_lowercase()
    }
}
