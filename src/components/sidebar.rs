use leptos::prelude::*;

/// Paired light/dark copies of one Bootstrap icon.
///
/// The theme renderer hides one copy per mode by toggling `d-none` on the
/// `sidebar-icon-light` / `sidebar-icon-dark` groups.
#[component]
fn SidebarIcon(#[prop(into)] icon: String) -> impl IntoView {
    view! {
        <i class=format!("bi {} sidebar-icon-light me-2", icon)></i>
        <i class=format!("bi {} sidebar-icon-dark d-none me-2", icon)></i>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div
            class="offcanvas offcanvas-start bg-light"
            tabindex="-1"
            id="sidebarMenu"
            aria-labelledby="sidebarMenuLabel"
        >
            <div class="offcanvas-header">
                <h5 class="offcanvas-title" id="sidebarMenuLabel">"Filmoteca"</h5>
                <button
                    type="button"
                    class="btn sidebar-close"
                    data-bs-dismiss="offcanvas"
                    aria-label="Cerrar"
                >
                    <i id="iconClose" class="bi bi-x"></i>
                </button>
            </div>
            <div class="offcanvas-body">
                <ul class="nav nav-pills flex-column">
                    <li class="nav-item">
                        <a class="nav-link" href="/">
                            <SidebarIcon icon="bi-house" />
                            "Inicio"
                        </a>
                    </li>
                    <li class="nav-item dropdown">
                        <a
                            class="nav-link dropdown-toggle"
                            href="#"
                            role="button"
                            data-bs-toggle="dropdown"
                            aria-expanded="false"
                        >
                            <SidebarIcon icon="bi-film" />
                            "Películas"
                        </a>
                        <ul class="dropdown-menu">
                            <li>
                                <a class="dropdown-item" href="/films">"Listado"</a>
                            </li>
                            <li>
                                <a class="dropdown-item" href="/films">"Más valoradas"</a>
                            </li>
                        </ul>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/artists">
                            <SidebarIcon icon="bi-people" />
                            "Artistas"
                        </a>
                    </li>
                    <li class="nav-item dropdown">
                        <a
                            class="nav-link dropdown-toggle"
                            href="#"
                            role="button"
                            data-bs-toggle="dropdown"
                            aria-expanded="false"
                        >
                            <SidebarIcon icon="bi-person-circle" />
                            "Usuario"
                        </a>
                        <ul class="dropdown-menu">
                            <li>
                                <a class="dropdown-item" href="/">"Perfil"</a>
                            </li>
                            <li>
                                <a class="dropdown-item" href="/">"Salir"</a>
                            </li>
                        </ul>
                    </li>
                </ul>
            </div>
        </div>
    }
}
