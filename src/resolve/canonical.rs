//! Canonical URL resolution.

use crate::context::RenderContext;
use crate::debug;
use crate::host::{ElementSource, RequestInfo, UrlBuilder};
use crate::html;
use crate::settings::Settings;

use percent_encoding::percent_decode_str;

/// Resolve the canonical URL for the current render.
///
/// Strict precedence: literal override, then the subject element's intrinsic
/// URL, then a best-effort cleanup of the raw request path. Absences fall
/// through silently; this never fails.
pub fn canonical_url<H>(host: &H, ctx: &RenderContext, settings: &Settings) -> String
where
    H: ElementSource + RequestInfo + UrlBuilder,
{
    // The context's config patch shadows settings here too, although no
    // current setting changes canonical output.
    let _settings = super::effective_settings(settings, ctx);

    if let Some(url) = ctx.overrides().and_then(|seo| seo.canonical()) {
        return url.to_string();
    }

    let element = super::subject_element(host, ctx);
    if let Some(url) = element.as_ref().and_then(|e| e.url()) {
        return url.to_string();
    }

    // No element with a URL of its own; clean the raw request path and
    // rebuild it against the current site base.
    let path = clean_request_path(&host.full_path());
    debug!("resolve"; "canonical falls back to request path `{path}`");
    host.url(&path)
}

/// Decode a raw request path and strip any markup it carries.
fn clean_request_path(raw: &str) -> String {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    let decoded = html::decode_entities(&decoded);
    html::strip_tags(&decoded).into_owned()
}
