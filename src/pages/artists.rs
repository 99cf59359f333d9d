use leptos::prelude::*;

use crate::catalog;
use crate::theme;

#[component]
pub fn ArtistsPage() -> impl IntoView {
    theme::reassert_on_mount();

    let artists = catalog::sample_artists();

    view! {
        <div class="page artists-page">
            <h2>"Artistas"</h2>

            <div class="row g-3">
                {artists
                    .iter()
                    .map(|artist| {
                        view! {
                            <div class="col-md-3">
                                <div class="card bg-light text-dark">
                                    <div class="card-body">
                                        <h5 class="card-title">
                                            {format!("{} {}", artist.name, artist.surname)}
                                        </h5>
                                        <p class="card-text">{artist.type_artist.label()}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
