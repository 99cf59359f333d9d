use leptos::prelude::*;

use crate::theme::ThemeContext;

/// The control that switches between light and dark mode.
///
/// The glyph inside the button belongs to the theme renderer, which swaps
/// the sun and moon classes on `#iconMode`; only the tooltip is reactive.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    let on_toggle = move |_| {
        ctx.controller.update_value(|c| {
            ctx.set_theme.set(c.toggle());
        });
    };

    view! {
        <button
            id="darkModeToggle"
            type="button"
            class="btn btn-outline-secondary"
            title=move || {
                if ctx.theme.get().is_dark() { "Modo claro" } else { "Modo oscuro" }
            }
            on:click=on_toggle
        >
            <i id="iconMode" class="bi bi-brightness-high-fill"></i>
        </button>
    }
}
