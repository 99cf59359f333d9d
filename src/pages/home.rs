use leptos::prelude::*;

use crate::catalog;
use crate::theme;

#[component]
pub fn HomePage() -> impl IntoView {
    theme::reassert_on_mount();

    let film_count = catalog::sample_films().len();
    let artist_count = catalog::sample_artists().len();

    view! {
        <div class="page home-page">
            <h2>"Bienvenido a Filmoteca"</h2>
            <p class="page-description">
                "Catálogo de películas y artistas del cine español."
            </p>

            <div class="row g-3">
                <div class="col-md-4">
                    <div class="card bg-light text-dark">
                        <div class="card-body">
                            <h3 class="card-title">{film_count}</h3>
                            <p class="card-text">"Películas en el catálogo"</p>
                            <a href="/films" class="btn btn-primary">"Ver listado"</a>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card bg-light text-dark">
                        <div class="card-body">
                            <h3 class="card-title">{artist_count}</h3>
                            <p class="card-text">"Artistas registrados"</p>
                            <a href="/artists" class="btn btn-primary">"Ver artistas"</a>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card bg-light text-dark">
                        <div class="card-body">
                            <h3 class="card-title">
                                <i class="bi bi-circle-half"></i>
                            </h3>
                            <p class="card-text">
                                "El tema claro u oscuro se guarda y se restaura en la próxima visita."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
