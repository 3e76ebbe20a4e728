//! Canonical and alternate (hreflang) URL resolution for multi-site CMS rendering.
//!
//! A content element rendered by a multi-site CMS may be reachable through
//! several conflicting sources of truth: an explicit caller override, the
//! element matched by the host's router, or the raw request path. This crate
//! reconciles them into a single canonical URL and an ordered, de-duplicated
//! list of alternate-language URLs with an `x-default` fallback policy.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── context       # RenderContext + SeoOverride (per-render override directive)
//! ├── element       # ElementId, Element (matched content item snapshot)
//! ├── error         # UrlError
//! ├── host          # collaborator traits the host CMS implements
//! ├── html          # entity decoding / tag stripping for the raw-path fallback
//! ├── logger        # log!/debug! macros with colored prefixes
//! ├── settings      # Settings + SettingsPatch + pure merge
//! ├── site          # SiteId, Site, hreflang tag formatting
//! └── resolve/
//!     ├── canonical  # canonical_url()
//!     ├── alternate  # alternate_urls() + AlternateUrl
//!     └── normalize  # site_url_for() leaf normalizer
//! ```
//!
//! # Failure policy
//!
//! SEO metadata must never break page rendering. Nothing in this crate
//! escapes to the caller as an error: recoverable failures are logged and
//! degrade to an empty string or a shorter list, and expected absences
//! (no matched element, element not published in a site) are silent.
//!
//! # Example
//!
//! ```ignore
//! let settings = Settings::default();
//! let ctx = RenderContext::new();
//!
//! let canonical = canonical_url(&host, &ctx, &settings);
//! let alternates = alternate_urls(&host, &ctx, &settings);
//! ```

pub mod context;
pub mod element;
pub mod error;
pub mod host;
mod html;
pub mod logger;
pub mod resolve;
pub mod settings;
pub mod site;

pub use context::{RenderContext, SeoOverride};
pub use element::{Element, ElementId};
pub use error::UrlError;
pub use host::{ElementSource, Logger, RequestInfo, SiteRegistry, UriLookup, UrlBuilder};
pub use resolve::{
    AlternateUrl, HOME_URI, X_DEFAULT, alternate_urls, canonical_url, site_url_for,
};
pub use settings::{Settings, SettingsPatch};
pub use site::{Site, SiteId};
