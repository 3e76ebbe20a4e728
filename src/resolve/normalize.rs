//! Fully-qualified site URL normalization (leaf helper).

use crate::host::{Logger, UrlBuilder};
use crate::site::Site;

/// URI the host uses to mark a site's home page. Maps to the empty relative
/// path before resolution, so a home-page element resolves to the site root.
pub const HOME_URI: &str = "__home__";

/// Turn an element-relative URI into an absolute URL scoped to `site`.
///
/// Already-absolute input is returned unchanged. A failed build (site with no
/// valid base URL, malformed URI) is logged and yields an empty string so the
/// caller can drop the entry; this never fails the render.
pub fn site_url_for<H>(host: &H, uri: &str, site: &Site) -> String
where
    H: UrlBuilder + Logger,
{
    let uri = if uri == HOME_URI { "" } else { uri };

    if host.is_absolute_url(uri) {
        return uri.to_string();
    }

    match host.site_url(uri, site.id) {
        Ok(url) => url,
        Err(err) => {
            host.error(
                &format!("failed to build URL for site `{}`: {err}", site.handle),
                "hreflink::resolve::site_url_for",
            );
            String::new()
        }
    }
}
