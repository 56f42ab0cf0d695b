//! Top navigation bar with session-dependent menus.

use leptos::prelude::*;

use crate::net::api;
use crate::routes;
use crate::state::session::use_session;
use crate::util::notify;

/// Brand link plus either the anonymous or the signed-in menu. Subscribes
/// to the session context, so a sign-in or sign-out swaps the menu without
/// a reload.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=routes::MAIN_PAGE>"PhotoShare"</a>
            <div class="navbar__menu">
                <Show when=move || session.is_logged_in() fallback=|| view! { <AuthMenu/> }>
                    <UserMenu/>
                </Show>
            </div>
        </nav>
    }
}

/// Links to the auth screens for anonymous visitors.
#[component]
fn AuthMenu() -> impl IntoView {
    view! {
        <a class="navbar__link" href=routes::SIGN_UP>"Sign up"</a>
        <a class="navbar__link navbar__link--primary" href=routes::LOGIN>"Log in"</a>
    }
}

/// Greeting, games link, and logout for the signed-in user.
#[component]
fn UserMenu() -> impl IntoView {
    let session = use_session();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match api::sign_out(&token).await {
                // Guards observe the cleared session and redirect off any
                // private page on their own.
                Ok(()) => session.clear(),
                Err(e) => notify::alert(&e.to_string()),
            }
        });
    };

    view! {
        <span class="navbar__greeting">
            {move || format!("Hi, {}", session.username().unwrap_or_default())}
        </span>
        <a class="navbar__link" href=routes::GAME_LIBRARY>"Your games"</a>
        <a class="navbar__link" href=routes::MAIN_PAGE on:click=on_logout>"Logout"</a>
    }
}
