use leptos::prelude::*;

use crate::catalog;
use crate::theme;

#[component]
pub fn FilmsPage() -> impl IntoView {
    theme::reassert_on_mount();

    let films = catalog::sample_films();

    view! {
        <div class="page films-page">
            <h2>"Películas"</h2>

            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th scope="col">"#"</th>
                        <th scope="col">"Título"</th>
                        <th scope="col">"Año"</th>
                        <th scope="col">"Dirección"</th>
                        <th scope="col">"Nota media"</th>
                    </tr>
                </thead>
                <tbody>
                    {films
                        .iter()
                        .map(|film| {
                            view! {
                                <tr>
                                    <td>{film.id}</td>
                                    <td>{film.title.clone()}</td>
                                    <td>{film.release_year}</td>
                                    <td>{film.director.clone()}</td>
                                    <td>
                                        <i class="bi bi-star-fill me-1"></i>
                                        {format!("{:.1}", film.rating)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
