//! Resolver settings and per-render merging.
//!
//! `Settings` is the process-wide value the host loads once at plugin init.
//! It is never mutated by this crate: a per-render [`SettingsPatch`] produces
//! a new value via [`Settings::merge`], so concurrent renders cannot observe
//! each other's overrides.

use anyhow::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Settings
// ============================================================================

/// Process-wide resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit alternate (hreflang) URLs at all.
    pub output_alternate: bool,

    /// Handle of the site that serves as the `x-default` fallback target.
    /// `None` (or empty) disables the x-default entry.
    pub alternate_fallback_site_handle: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_alternate: true,
            alternate_fallback_site_handle: None,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let settings = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((settings, ignored))
    }

    /// Produce a new `Settings` with the patch's present fields shadowing
    /// this one. `self` is left untouched.
    pub fn merge(&self, patch: &SettingsPatch) -> Self {
        Self {
            output_alternate: patch.output_alternate.unwrap_or(self.output_alternate),
            alternate_fallback_site_handle: match &patch.alternate_fallback_site_handle {
                Some(handle) => handle.clone(),
                None => self.alternate_fallback_site_handle.clone(),
            },
        }
    }

    /// The configured fallback site handle, if non-empty.
    pub fn fallback_handle(&self) -> Option<&str> {
        self.alternate_fallback_site_handle
            .as_deref()
            .filter(|h| !h.is_empty())
    }
}

// ============================================================================
// SettingsPatch
// ============================================================================

/// Partial settings shadowing [`Settings`] for a single resolution.
///
/// `None` fields keep the base value. The fallback handle is doubly optional
/// so a patch built in code can explicitly clear it (`Some(None)`); TOML
/// cannot express the clearing form, only a replacement handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub output_alternate: Option<bool>,
    pub alternate_fallback_site_handle: Option<Option<String>>,
}

// ============================================================================
// Tests
// ============================================================================
