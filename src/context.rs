//! Per-render request context and typed override directive.
//!
//! The host's templating layer may hand the resolvers an override directive
//! for the current render: a settings patch, a literal canonical URL, or a
//! specific element to resolve instead of the request-matched one. All three
//! fields are independent and optional.

use crate::element::Element;
use crate::settings::SettingsPatch;

/// Context for a single render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    seo: Option<SeoOverride>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(seo: SeoOverride) -> Self {
        Self { seo: Some(seo) }
    }

    /// The override directive for this render, if any.
    #[inline]
    pub fn overrides(&self) -> Option<&SeoOverride> {
        self.seo.as_ref()
    }
}

/// Caller-supplied override for one resolution.
#[derive(Debug, Clone, Default)]
pub struct SeoOverride {
    /// Partial settings shadowing the process-wide settings for this render
    /// only. Never persisted.
    pub config: Option<SettingsPatch>,

    /// Literal canonical URL. Non-empty short-circuits canonical resolution,
    /// returned verbatim with no normalization.
    pub canonical_url: Option<String>,

    /// Element to resolve instead of the request-matched one.
    pub element: Option<Element>,
}

impl SeoOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SettingsPatch) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// The canonical override, if non-empty.
    #[inline]
    pub(crate) fn canonical(&self) -> Option<&str> {
        self.canonical_url.as_deref().filter(|u| !u.is_empty())
    }
}
