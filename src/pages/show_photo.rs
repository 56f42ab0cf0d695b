//! Single-photo detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::db;
use crate::routes;

/// Looks up the `:id` route parameter in the demo records. Unknown or
/// non-numeric ids get a not-found fallback instead of an error.
#[component]
pub fn ShowPhoto() -> impl IntoView {
    let params = use_params_map();
    let photo = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
            .and_then(db::photo_by_id)
    };

    view! {
        <div class="photo-detail">
            {move || match photo() {
                Some(photo) => view! {
                    <div class="card card--wide">
                        <img class="card__image" src=photo.image_url alt=photo.description/>
                        <p class="card__text">{photo.description}</p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="photo-detail__missing">
                        <p>"Photo not found"</p>
                        <a class="btn" href=routes::PHOTO_LIBRARY>"Back to the library"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
