//! Light/dark theme state, persistence and application to the page.
//!
//! The preference lives in `localStorage` under the key `"modo"` with the
//! sentinel values `"oscuro"` (dark) and `"claro"` (light), matching what
//! the server-rendered version of the app stored. An absent or unreadable
//! key means light mode.

mod bindings;
mod controller;

pub use bindings::{ClassBinding, Target, BINDINGS};
pub use controller::ThemeController;

use leptos::prelude::*;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "modo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored value meaning dark mode.
    pub const DARK_SENTINEL: &'static str = "oscuro";
    /// Stored value meaning light mode.
    pub const LIGHT_SENTINEL: &'static str = "claro";

    /// Interpret a stored preference. Anything other than the dark
    /// sentinel, including a missing value, means light mode.
    pub fn from_sentinel(value: Option<&str>) -> Self {
        match value {
            Some(v) if v == Self::DARK_SENTINEL => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The string persisted for this theme.
    pub fn sentinel(self) -> &'static str {
        match self {
            Theme::Dark => Self::DARK_SENTINEL,
            Theme::Light => Self::LIGHT_SENTINEL,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
    pub controller: StoredValue<ThemeController>,
}

/// Re-apply the current theme when the calling component mounts, and on
/// every later change. Pages whose tables and cards mount after
/// initialization call this so those elements pick up the right classes;
/// rendering is idempotent, so the extra passes re-assert and nothing more.
pub fn reassert_on_mount() {
    let ctx = expect_context::<ThemeContext>();
    Effect::new(move |_| {
        ctx.theme.track();
        ctx.controller.with_value(|c| c.render());
    });
}
