//! Photo library grid.

use leptos::prelude::*;

use crate::db;
use crate::routes;

/// Card grid over the demo photo records. A card opens the detail view.
#[component]
pub fn PhotoLibrary() -> impl IntoView {
    view! {
        <div class="library">
            <header class="library__header">
                <h1>"Photo library"</h1>
                <a class="btn btn--primary" href=routes::ADD_PHOTO>"Add photo"</a>
            </header>
            <div class="library__grid">
                {db::PHOTOS
                    .iter()
                    .map(|photo| {
                        view! {
                            <a class="card" href=routes::photo(photo.id)>
                                <img class="card__image" src=photo.image_url alt=photo.description/>
                                <p class="card__text">{photo.description}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
