//! Imperative side of theming: owns the current theme, reads and writes
//! the `localStorage` preference, and swaps classes on the document.

use web_sys::{Document, Element};

use super::bindings::{ClassBinding, Target, BINDINGS};
use super::{Theme, STORAGE_KEY};

/// Owns the single bit of theme state for the page session.
///
/// The controller never caches element references: routed pages mount and
/// unmount their tables and cards, so every render resolves the binding
/// targets against the live document and skips whatever is absent.
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    pub fn new() -> Self {
        Self {
            current: Theme::Light,
        }
    }

    /// Restore the persisted preference and apply it to the page.
    ///
    /// A missing key, an unreadable storage API and a non-browser context
    /// all collapse into light mode; none of them is an error.
    pub fn initialize(&mut self) -> Theme {
        self.current = Theme::from_sentinel(read_preference().as_deref());
        log::debug!("restored theme preference: {}", self.current.sentinel());
        self.render();
        self.current
    }

    /// Apply the current theme to every binding target present on the
    /// page. Idempotent: re-rendering an unchanged theme re-asserts the
    /// same classes.
    pub fn render(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for binding in BINDINGS {
            apply_binding(&document, binding, self.current);
        }
    }

    /// Flip the theme, persist the new preference and re-render.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        write_preference(self.current);
        self.render();
        self.current
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_binding(document: &Document, binding: &ClassBinding, theme: Theme) {
    let (add, remove) = binding.swap_for(theme);
    match binding.target {
        Target::Body => {
            if let Some(body) = document.body() {
                swap_classes(&body, add, remove);
            }
        }
        Target::Id(id) => {
            if let Some(element) = document.get_element_by_id(id) {
                swap_classes(&element, add, remove);
            }
        }
        Target::Class(class) => {
            let elements = document.get_elements_by_class_name(class);
            for index in 0..elements.length() {
                if let Some(element) = elements.item(index) {
                    swap_classes(&element, add, remove);
                }
            }
        }
    }
}

fn swap_classes(element: &Element, add: &[&str], remove: &[&str]) {
    let class_list = element.class_list();
    for class in remove {
        let _ = class_list.remove_1(class);
    }
    for class in add {
        let _ = class_list.add_1(class);
    }
}

fn read_preference() -> Option<String> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(value) = storage.get_item(STORAGE_KEY) {
            return value;
        }
    }
    None
}

fn write_preference(theme: Theme) {
    // Fire and forget: a full or unavailable storage loses the preference
    // for the next visit but must not break the toggle.
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.sentinel());
        }
    }
}
