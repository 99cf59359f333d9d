use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand border-bottom px-3">
            <button
                type="button"
                class="btn btn-outline-secondary me-2"
                data-bs-toggle="offcanvas"
                data-bs-target="#sidebarMenu"
                aria-controls="sidebarMenu"
            >
                <i class="bi bi-list"></i>
            </button>
            <a class="navbar-brand" href="/">"Filmoteca"</a>
            <div class="ms-auto">
                <ThemeToggle />
            </div>
        </nav>
    }
}
