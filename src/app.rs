use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::artists::ArtistsPage;
use crate::pages::films::FilmsPage;
use crate::pages::home::HomePage;
use crate::theme::{Theme, ThemeContext, ThemeController};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::Light);
    let controller = StoredValue::new(ThemeController::new());
    provide_context(ThemeContext {
        theme,
        set_theme,
        controller,
    });

    // Restore the saved preference once the shell is in the document.
    Effect::new(move |_| {
        controller.update_value(|c| {
            set_theme.set(c.initialize());
        });
    });

    view! {
        <Router>
            <Navbar />
            <Sidebar />
            <main class="content container-fluid">
                <Routes fallback=|| view! { <p>"Página no encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/films") view=FilmsPage />
                    <Route path=path!("/artists") view=ArtistsPage />
                </Routes>
            </main>
        </Router>
    }
}
