//! Collaborator interfaces provided by the host CMS.
//!
//! The resolvers perform no I/O of their own; everything they know about the
//! current request comes through these traits. Hosts implement them as thin
//! adapters over their routing, site-registry, and URL-building services.

use crate::element::{Element, ElementId};
use crate::error::UrlError;
use crate::site::{Site, SiteId};
use url::Url;

// ============================================================================
// Collaborator Traits
// ============================================================================

/// The host's site/locale registry.
pub trait SiteRegistry {
    /// The site the current request is being served from. `None` is a host
    /// configuration error, not an expected absence.
    fn current_site(&self) -> Option<Site>;

    /// All sites, in registry iteration order. Alternate entries are emitted
    /// in this order.
    fn all_sites(&self) -> Vec<Site>;

    fn site_by_handle(&self, handle: &str) -> Option<Site>;
}

/// The host's content lookup.
pub trait ElementSource {
    /// The element matched by the current request's route, if any.
    fn matched_element(&self) -> Option<Element>;

    /// The element's URI in the given site. An element may be published
    /// under a different URI per site, or not at all.
    fn element_uri_for_site(&self, element: ElementId, site: SiteId) -> UriLookup;
}

/// The raw incoming request.
pub trait RequestInfo {
    /// Full request path, possibly HTML-entity-encoded or percent-encoded,
    /// possibly containing markup.
    fn full_path(&self) -> String;
}

/// The host's URL construction service.
pub trait UrlBuilder {
    /// Build a fully-qualified URL for `path` scoped to the given site.
    /// Fails when the site has no valid configured base URL.
    fn site_url(&self, path: &str, site: SiteId) -> Result<String, UrlError>;

    /// Build a URL for `path` against the current site's base.
    fn url(&self, path: &str) -> String;

    /// Whether `url` is already absolute (has a scheme, or is
    /// protocol-relative).
    fn is_absolute_url(&self, url: &str) -> bool {
        url.starts_with("//") || Url::parse(url).is_ok()
    }
}

/// Recoverable-failure reporting.
///
/// The default method writes through the crate's [`log!`](crate::log) macro;
/// hosts with their own logging infrastructure override it.
pub trait Logger {
    fn error(&self, message: &str, source: &str) {
        crate::log!("error"; "{source}: {message}");
    }
}

// ============================================================================
// UriLookup
// ============================================================================

/// Result of looking up an element's URI in a specific site.
///
/// Replaces sentinel comparison: resolvers branch on the case, never on a
/// distinguished string or null value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriLookup {
    /// The element is published in the site under this URI.
    Found(String),

    /// The element exists in the site but has no URI there.
    Missing,

    /// The element is not propagated to the site at all. Expected in sparse
    /// multi-site setups, never an error.
    NotInSite,
}

impl UriLookup {
    /// Check if the lookup found a URI.
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found URI, if any.
    #[inline]
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::Found(uri) => Some(uri),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
