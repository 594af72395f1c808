// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit dependencies handed down the component tree.
//!
//! Components never look theme or statistics up from a global. The root
//! resolves both once and passes them as props.

use std::rc::Rc;

use grainlify_types::{LandingStatsDisplay, Theme};

use crate::config::RuntimeConfig;

// -----------------------------------------------------------------------------
// Theme
// -----------------------------------------------------------------------------

const THEME_STORAGE_KEY: &str = "gl_theme";
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the stored theme preference from `window.localStorage` (if present
/// and parseable).
pub fn load_theme_from_storage() -> Option<Theme> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse().ok())
}

/// Persist the theme so that it survives page reloads.
pub fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

pub fn clear_theme_from_storage() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(THEME_STORAGE_KEY);
    }
}

fn browser_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Precedence: stored choice, then an OS dark preference, then the
/// deployment default, then [`Theme::default`].
pub fn resolve_theme(stored: Option<Theme>, prefers_dark: bool, configured: Option<Theme>) -> Theme {
    stored
        .or(prefers_dark.then_some(Theme::Dark))
        .or(configured)
        .unwrap_or_default()
}

pub fn initial_theme(config: &RuntimeConfig) -> Theme {
    resolve_theme(
        load_theme_from_storage(),
        browser_prefers_dark(),
        config.default_theme,
    )
}

// -----------------------------------------------------------------------------
// Landing statistics
// -----------------------------------------------------------------------------

/// Source of the figures rendered on the landing page.
pub trait StatsProvider {
    fn display(&self) -> LandingStatsDisplay;
}

/// Provider over a fixed value, seeded from the runtime config.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticStats(pub LandingStatsDisplay);

impl StaticStats {
    pub fn new(display: LandingStatsDisplay) -> Self {
        Self(display)
    }

    pub fn with_active_projects(active_projects: u64) -> Self {
        Self(LandingStatsDisplay {
            active_projects,
            ..Default::default()
        })
    }
}

impl StatsProvider for StaticStats {
    fn display(&self) -> LandingStatsDisplay {
        self.0
    }
}

/// Shareable handle to a [`StatsProvider`], usable as a component prop.
///
/// Two handles are equal only when they point at the same provider, so a
/// stable provider never causes a re-render on its own.
#[derive(Clone)]
pub struct StatsHandle {
    inner: Rc<dyn StatsProvider>,
}

impl StatsHandle {
    pub fn new(provider: impl StatsProvider + 'static) -> Self {
        Self {
            inner: Rc::new(provider),
        }
    }

    pub fn display(&self) -> LandingStatsDisplay {
        self.inner.display()
    }
}

impl PartialEq for StatsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for StatsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsHandle")
            .field("display", &self.display())
            .finish()
    }
}
