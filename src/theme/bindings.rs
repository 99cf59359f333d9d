//! Declarative element-to-class mapping for theme rendering.
//!
//! Each [`ClassBinding`] names the elements it touches and the classes
//! those elements carry in each theme. Rendering is a walk over
//! [`BINDINGS`]; the server-rendered version of the app hand-wrote one
//! add/remove pair per element per page variant, which is what this
//! table replaces.

use super::Theme;

/// How a binding locates its elements in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The document body.
    Body,
    /// A single element looked up by id.
    Id(&'static str),
    /// Every element bearing a class.
    Class(&'static str),
}

/// One row of the mapping: which elements, and which classes they carry
/// in dark respectively light mode. A target matching no element on the
/// current page is skipped during rendering.
#[derive(Debug, Clone, Copy)]
pub struct ClassBinding {
    pub target: Target,
    pub dark: &'static [&'static str],
    pub light: &'static [&'static str],
}

impl ClassBinding {
    /// Classes to `(add, remove)` when rendering `theme`.
    pub fn swap_for(&self, theme: Theme) -> (&'static [&'static str], &'static [&'static str]) {
        match theme {
            Theme::Dark => (self.dark, self.light),
            Theme::Light => (self.light, self.dark),
        }
    }
}

pub const BINDINGS: &[ClassBinding] = &[
    // Root marker class the stylesheet keys off.
    ClassBinding {
        target: Target::Body,
        dark: &["dark-mode"],
        light: &[],
    },
    // Glyph on the toggle button: moon in the dark, sun in the light.
    ClassBinding {
        target: Target::Id("iconMode"),
        dark: &["bi-moon-fill"],
        light: &["bi-brightness-high-fill"],
    },
    // Sidebar panel background.
    ClassBinding {
        target: Target::Class("offcanvas"),
        dark: &["bg-dark"],
        light: &["bg-light"],
    },
    // Paired icon sets: exactly one of the two is visible at a time.
    ClassBinding {
        target: Target::Class("sidebar-icon-light"),
        dark: &["d-none"],
        light: &[],
    },
    ClassBinding {
        target: Target::Class("sidebar-icon-dark"),
        dark: &[],
        light: &["d-none"],
    },
    // Close glyph on the sidebar panel.
    ClassBinding {
        target: Target::Id("iconClose"),
        dark: &["bi-x-circle"],
        light: &["bi-x"],
    },
    // Page-level extras, present only on some routes.
    ClassBinding {
        target: Target::Class("table"),
        dark: &["table-dark"],
        light: &[],
    },
    ClassBinding {
        target: Target::Class("card"),
        dark: &["bg-dark", "text-white"],
        light: &["bg-light", "text-dark"],
    },
    ClassBinding {
        target: Target::Class("dropdown-menu"),
        dark: &["dropdown-menu-dark"],
        light: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Apply one binding to a simulated element class set, the way
    /// `ThemeController::render` does against a real `classList`.
    fn apply(classes: &BTreeSet<String>, binding: &ClassBinding, theme: Theme) -> BTreeSet<String> {
        let (add, remove) = binding.swap_for(theme);
        let mut next = classes.clone();
        for class in remove {
            next.remove(*class);
        }
        for class in add {
            next.insert((*class).to_string());
        }
        next
    }

    fn find(target: Target) -> &'static ClassBinding {
        BINDINGS
            .iter()
            .find(|b| b.target == target)
            .expect("binding should exist for target")
    }

    #[test]
    fn test_dark_and_light_sets_are_disjoint() {
        for binding in BINDINGS {
            for class in binding.dark {
                assert!(
                    !binding.light.contains(class),
                    "Class '{}' appears in both dark and light sets for {:?}",
                    class,
                    binding.target
                );
            }
        }
    }

    #[test]
    fn test_lookup_class_is_never_swapped() {
        // Rendering iterates live element collections; removing the class
        // used for the lookup would mutate the collection mid-walk.
        for binding in BINDINGS {
            if let Target::Class(lookup) = binding.target {
                assert!(
                    !binding.dark.contains(&lookup) && !binding.light.contains(&lookup),
                    "Binding for '.{}' must not add or remove its own lookup class",
                    lookup
                );
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        for binding in BINDINGS {
            for theme in [Theme::Light, Theme::Dark] {
                let start: BTreeSet<String> =
                    ["nav-item".to_string(), "bi".to_string()].into_iter().collect();
                let once = apply(&start, binding, theme);
                let twice = apply(&once, binding, theme);
                assert_eq!(
                    once, twice,
                    "Applying {:?} twice in {:?} changed the class set",
                    binding.target, theme
                );
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_classes() {
        // A class set that is already consistent with light mode must come
        // back unchanged after dark-then-light.
        for binding in BINDINGS {
            let mut start: BTreeSet<String> = BTreeSet::new();
            start.insert("bi".to_string());
            let light = apply(&start, binding, Theme::Light);
            let dark = apply(&light, binding, Theme::Dark);
            let back = apply(&dark, binding, Theme::Light);
            assert_eq!(
                light, back,
                "Dark/light round trip changed the class set for {:?}",
                binding.target
            );
        }
    }

    #[test]
    fn test_mode_icon_glyphs() {
        let binding = find(Target::Id("iconMode"));
        let (add_dark, remove_dark) = binding.swap_for(Theme::Dark);
        assert_eq!(add_dark, &["bi-moon-fill"]);
        assert_eq!(remove_dark, &["bi-brightness-high-fill"]);
        let (add_light, remove_light) = binding.swap_for(Theme::Light);
        assert_eq!(add_light, &["bi-brightness-high-fill"]);
        assert_eq!(remove_light, &["bi-moon-fill"]);
    }

    #[test]
    fn test_close_icon_glyphs() {
        let binding = find(Target::Id("iconClose"));
        let (add_dark, _) = binding.swap_for(Theme::Dark);
        assert_eq!(add_dark, &["bi-x-circle"]);
        let (add_light, _) = binding.swap_for(Theme::Light);
        assert_eq!(add_light, &["bi-x"]);
    }

    #[test]
    fn test_icon_groups_alternate_visibility() {
        let light_icons = find(Target::Class("sidebar-icon-light"));
        let dark_icons = find(Target::Class("sidebar-icon-dark"));
        // Light icons hide in the dark, dark icons hide in the light.
        assert_eq!(light_icons.swap_for(Theme::Dark).0, &["d-none"]);
        assert_eq!(dark_icons.swap_for(Theme::Light).0, &["d-none"]);
        // And each group is visible in its own theme.
        assert!(light_icons.swap_for(Theme::Light).0.is_empty());
        assert!(dark_icons.swap_for(Theme::Dark).0.is_empty());
    }

    #[test]
    fn test_body_carries_marker_only_in_dark() {
        let binding = find(Target::Body);
        let dark = apply(&BTreeSet::new(), binding, Theme::Dark);
        assert!(dark.contains("dark-mode"));
        let light = apply(&dark, binding, Theme::Light);
        assert!(!light.contains("dark-mode"));
    }
}
