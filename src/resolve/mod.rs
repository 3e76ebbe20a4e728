//! Canonical and alternate URL resolution.
//!
//! Two public operations backed by one leaf helper:
//!
//! - [`canonical_url`] returns the single authoritative URL for the render.
//! - [`alternate_urls`] returns the ordered hreflang entries for every other
//!   site the element is published in, plus an optional `x-default`.
//! - [`site_url_for`] turns an element-relative URI plus a site into an
//!   absolute URL, or empty on failure.

mod alternate;
mod canonical;
mod normalize;

pub use alternate::{AlternateUrl, X_DEFAULT, alternate_urls};
pub use canonical::canonical_url;
pub use normalize::{HOME_URI, site_url_for};

use crate::context::RenderContext;
use crate::element::Element;
use crate::host::ElementSource;
use crate::settings::Settings;

/// Settings for this resolution: the process-wide base, shadowed by the
/// context's config patch when present. The base is never mutated.
pub(crate) fn effective_settings(settings: &Settings, ctx: &RenderContext) -> Settings {
    match ctx.overrides().and_then(|seo| seo.config.as_ref()) {
        Some(patch) => settings.merge(patch),
        None => settings.clone(),
    }
}

/// The element this resolution is about: the override's element when given,
/// else the request-matched one.
pub(crate) fn subject_element<H: ElementSource>(host: &H, ctx: &RenderContext) -> Option<Element> {
    ctx.overrides()
        .and_then(|seo| seo.element.clone())
        .or_else(|| host.matched_element())
}

// ============================================================================
// Test Host (shared by the resolver test modules)
// ============================================================================

#[cfg(test)]
pub(crate) mod mock {
    use crate::element::{Element, ElementId};
    use crate::error::UrlError;
    use crate::host::{ElementSource, Logger, RequestInfo, SiteRegistry, UriLookup, UrlBuilder};
    use crate::site::{Site, SiteId};
    use std::cell::Cell;
    use std::collections::HashMap;
    use url::Url;

    /// In-memory host standing in for the CMS collaborators.
    #[derive(Default)]
    pub struct MockHost {
        pub current: Option<Site>,
        pub sites: Vec<Site>,
        pub matched: Option<Element>,
        pub uris: HashMap<(ElementId, SiteId), UriLookup>,
        pub path: String,
        pub errors: Cell<usize>,
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a site; the first one becomes the current site.
        pub fn add_site(&mut self, site: Site) {
            if self.current.is_none() {
                self.current = Some(site.clone());
            }
            self.sites.push(site);
        }

        pub fn set_uri(&mut self, element: ElementId, site: SiteId, lookup: UriLookup) {
            self.uris.insert((element, site), lookup);
        }

        pub fn site_with_base(id: u64, handle: &str, language: &str, base: &str) -> Site {
            Site::new(id, handle, language).with_base_url(Url::parse(base).unwrap())
        }
    }

    impl SiteRegistry for MockHost {
        fn current_site(&self) -> Option<Site> {
            self.current.clone()
        }

        fn all_sites(&self) -> Vec<Site> {
            self.sites.clone()
        }

        fn site_by_handle(&self, handle: &str) -> Option<Site> {
            self.sites.iter().find(|s| s.handle == handle).cloned()
        }
    }

    impl ElementSource for MockHost {
        fn matched_element(&self) -> Option<Element> {
            self.matched.clone()
        }

        fn element_uri_for_site(&self, element: ElementId, site: SiteId) -> UriLookup {
            self.uris
                .get(&(element, site))
                .cloned()
                .unwrap_or(UriLookup::NotInSite)
        }
    }

    impl RequestInfo for MockHost {
        fn full_path(&self) -> String {
            self.path.clone()
        }
    }

    impl UrlBuilder for MockHost {
        fn site_url(&self, path: &str, site: SiteId) -> Result<String, UrlError> {
            let target = self
                .sites
                .iter()
                .find(|s| s.id == site)
                .ok_or(UrlError::UnknownSite(site))?;
            let base = target
                .base_url
                .as_ref()
                .ok_or(UrlError::MissingBaseUrl(site))?;
            let url = base
                .join(path)
                .map_err(|source| UrlError::InvalidUrl { site, source })?;
            Ok(url.to_string())
        }

        fn url(&self, path: &str) -> String {
            match &self.current {
                Some(site) => self.site_url(path, site.id).unwrap_or_default(),
                None => path.to_string(),
            }
        }
    }

    impl Logger for MockHost {
        fn error(&self, _message: &str, _source: &str) {
            self.errors.set(self.errors.get() + 1);
        }
    }
}
