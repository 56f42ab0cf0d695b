//! Public landing page.

use leptos::prelude::*;

use crate::routes;

/// Landing hero for anonymous visitors. Authenticated users never see this
/// page; the restricted public guard sends them to the photo library.
#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"PhotoShare"</h1>
            <p class="hero__tagline">
                "Share your photos, browse the library, and keep an eye on your game balance."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href=routes::SIGN_UP>"Create an account"</a>
                <a class="btn" href=routes::LOGIN>"Log in"</a>
            </div>
        </div>
    }
}
