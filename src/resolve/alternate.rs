//! Alternate (hreflang) URL resolution.

use crate::context::RenderContext;
use crate::debug;
use crate::host::{ElementSource, Logger, SiteRegistry, UriLookup, UrlBuilder};
use crate::settings::Settings;

use serde::Serialize;

use super::normalize::site_url_for;

/// hreflang tag denoting the language-neutral fallback URL.
pub const X_DEFAULT: &str = "x-default";

/// One alternate-language entry for the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateUrl {
    /// Absolute URL of the equivalent page in another site.
    pub url: String,
    /// hreflang tag (`en-us`, `nb-no`, ...) or the literal `x-default`.
    pub language: String,
}

/// Resolve the alternate URLs for the current render.
///
/// Entry order: the `x-default` fallback first (when configured and
/// resolvable), then the remaining sites in registry order with the current
/// site excluded. May be empty; never fails the render.
pub fn alternate_urls<H>(host: &H, ctx: &RenderContext, settings: &Settings) -> Vec<AlternateUrl>
where
    H: SiteRegistry + ElementSource + UrlBuilder + Logger,
{
    let Some(current) = host.current_site() else {
        // Host misconfiguration: recoverable, page renders without hreflang tags
        host.error(
            "no current site resolvable",
            "hreflink::resolve::alternate_urls",
        );
        return Vec::new();
    };

    let settings = super::effective_settings(settings, ctx);
    if !settings.output_alternate {
        return Vec::new();
    }

    let Some(element) = super::subject_element(host, ctx) else {
        return Vec::new();
    };

    let mut alternates = Vec::new();

    let fallback_site = settings
        .fallback_handle()
        .and_then(|handle| host.site_by_handle(handle));

    if let Some(fallback) = &fallback_site {
        let uri = match host.element_uri_for_site(element.id, fallback.id) {
            UriLookup::Found(uri) => uri,
            // No URI there: the site root can still serve as the
            // x-default target.
            UriLookup::Missing | UriLookup::NotInSite => String::new(),
        };
        let url = site_url_for(host, &uri, fallback);
        if !url.is_empty() {
            alternates.push(AlternateUrl {
                url,
                language: X_DEFAULT.to_string(),
            });
        }
    }

    for site in host.all_sites() {
        if site.id == current.id {
            continue;
        }
        // The fallback site already got its x-default entry; a second entry
        // would collide on the same URL.
        if fallback_site.as_ref().is_some_and(|f| f.id == site.id) {
            continue;
        }

        let UriLookup::Found(uri) = host.element_uri_for_site(element.id, site.id) else {
            debug!("resolve"; "element {} not published in site `{}`", element.id, site.handle);
            continue;
        };

        let url = site_url_for(host, &uri, &site);
        if !url.is_empty() {
            alternates.push(AlternateUrl {
                url,
                language: site.hreflang(),
            });
        }
    }

    alternates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SeoOverride;
    use crate::element::{Element, ElementId};
    use crate::resolve::mock::MockHost;
    use crate::settings::SettingsPatch;
    use crate::site::SiteId;

    /// en (current) + no, matched element published as /artikkel/1 in no.
    fn two_site_host() -> MockHost {
        let mut host = MockHost::new();
        host.add_site(MockHost::site_with_base(
            1,
            "en",
            "en_US",
            "https://example.com/",
        ));
        host.add_site(MockHost::site_with_base(
            2,
            "no",
            "nb_NO",
            "https://example.no/",
        ));
        host.matched = Some(Element::new(10));
        host.set_uri(
            ElementId(10),
            SiteId(2),
            UriLookup::Found("artikkel/1".into()),
        );
        host
    }

    fn resolve(host: &MockHost, settings: &Settings) -> Vec<AlternateUrl> {
        alternate_urls(host, &RenderContext::new(), settings)
    }

    #[test]
    fn test_two_site_scenario() {
        let host = two_site_host();
        assert_eq!(
            resolve(&host, &Settings::default()),
            vec![AlternateUrl {
                url: "https://example.no/artikkel/1".into(),
                language: "nb-no".into(),
            }]
        );
    }

    #[test]
    fn test_element_absent_in_other_site() {
        let mut host = two_site_host();
        host.set_uri(ElementId(10), SiteId(2), UriLookup::NotInSite);
        assert!(resolve(&host, &Settings::default()).is_empty());
        assert_eq!(host.errors.get(), 0); // expected absence, not an error
    }

    #[test]
    fn test_disabled_returns_empty() {
        let host = two_site_host();
        let settings = Settings {
            output_alternate: false,
            ..Default::default()
        };
        assert!(resolve(&host, &settings).is_empty());
    }

    #[test]
    fn test_config_patch_can_disable() {
        let host = two_site_host();
        let ctx = RenderContext::with_override(SeoOverride::new().with_config(SettingsPatch {
            output_alternate: Some(false),
            ..Default::default()
        }));
        assert!(alternate_urls(&host, &ctx, &Settings::default()).is_empty());
    }

    #[test]
    fn test_no_current_site_logs_once() {
        let mut host = two_site_host();
        host.current = None;
        assert!(resolve(&host, &Settings::default()).is_empty());
        assert_eq!(host.errors.get(), 1);
    }

    #[test]
    fn test_no_element_returns_empty() {
        let mut host = two_site_host();
        host.matched = None;
        assert!(resolve(&host, &Settings::default()).is_empty());
    }

    #[test]
    fn test_override_element_is_used() {
        let mut host = two_site_host();
        host.matched = None;
        host.set_uri(
            ElementId(20),
            SiteId(2),
            UriLookup::Found("annen/side".into()),
        );

        let ctx = RenderContext::with_override(SeoOverride::new().with_element(Element::new(20)));
        let urls = alternate_urls(&host, &ctx, &Settings::default());
        assert_eq!(urls[0].url, "https://example.no/annen/side");
    }

    #[test]
    fn test_current_site_excluded() {
        let mut host = two_site_host();
        host.set_uri(ElementId(10), SiteId(1), UriLookup::Found("article/1".into()));

        let urls = resolve(&host, &Settings::default());
        assert!(urls.iter().all(|a| a.language != "en-us"));
    }

    #[test]
    fn test_fallback_with_uri_emits_x_default_first() {
        let mut host = two_site_host();
        host.add_site(MockHost::site_with_base(
            3,
            "de",
            "de_DE",
            "https://example.de/",
        ));
        host.set_uri(
            ElementId(10),
            SiteId(3),
            UriLookup::Found("artikel/1".into()),
        );

        let settings = Settings {
            alternate_fallback_site_handle: Some("no".into()),
            ..Default::default()
        };
        let urls = resolve(&host, &settings);

        assert_eq!(
            urls,
            vec![
                AlternateUrl {
                    url: "https://example.no/artikkel/1".into(),
                    language: X_DEFAULT.into(),
                },
                AlternateUrl {
                    url: "https://example.de/artikel/1".into(),
                    language: "de-de".into(),
                },
            ]
        );
    }

    #[test]
    fn test_fallback_without_uri_uses_site_root() {
        let mut host = two_site_host();
        host.set_uri(ElementId(10), SiteId(2), UriLookup::NotInSite);

        let settings = Settings {
            alternate_fallback_site_handle: Some("no".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&host, &settings),
            vec![AlternateUrl {
                url: "https://example.no/".into(),
                language: X_DEFAULT.into(),
            }]
        );
    }

    #[test]
    fn test_fallback_site_gets_no_second_entry() {
        let host = two_site_host();
        let settings = Settings {
            alternate_fallback_site_handle: Some("no".into()),
            ..Default::default()
        };

        let urls = resolve(&host, &settings);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].language, X_DEFAULT);
        // At most one x-default
        assert_eq!(urls.iter().filter(|a| a.language == X_DEFAULT).count(), 1);
    }

    #[test]
    fn test_unresolvable_fallback_handle_skipped_silently() {
        let host = two_site_host();
        let settings = Settings {
            alternate_fallback_site_handle: Some("sv".into()),
            ..Default::default()
        };

        let urls = resolve(&host, &settings);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].language, "nb-no");
        assert_eq!(host.errors.get(), 0);
    }

    #[test]
    fn test_site_without_base_url_is_dropped_but_others_continue() {
        let mut host = two_site_host();
        // Site 3 has no base URL; its entry fails normalization
        host.add_site(crate::site::Site::new(3, "de", "de_DE"));
        host.set_uri(
            ElementId(10),
            SiteId(3),
            UriLookup::Found("artikel/1".into()),
        );

        let urls = resolve(&host, &Settings::default());
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].language, "nb-no");
        assert_eq!(host.errors.get(), 1); // the dropped entry was logged
    }

    #[test]
    fn test_home_uri_resolves_to_site_root() {
        let mut host = two_site_host();
        host.set_uri(
            ElementId(10),
            SiteId(2),
            UriLookup::Found(crate::resolve::HOME_URI.into()),
        );

        let urls = resolve(&host, &Settings::default());
        assert_eq!(urls[0].url, "https://example.no/");
    }

    #[test]
    fn test_serializes_for_templating() {
        let entry = AlternateUrl {
            url: "https://example.no/artikkel/1".into(),
            language: "nb-no".into(),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"url":"https://example.no/artikkel/1","language":"nb-no"}"#
        );
    }
}
