//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::forms::{FieldError, LoginForm};
use crate::net::api;
use crate::routes;
use crate::state::session::use_session;
use crate::util::notify;

/// Username/password form. A successful sign-in persists the session and
/// moves on to the photo library; a failed one alerts and leaves the
/// session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let pending = RwSignal::new(false);

    let error_for = move |name: &'static str| {
        errors.with(|errs| errs.iter().find(|e| e.field == name).map(|e| e.message.clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(Vec::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_in(&credentials).await {
                Ok(new_session) => {
                    session.set(new_session);
                    navigate(routes::PHOTO_LIBRARY, NavigateOptions::default());
                }
                Err(e) => notify::alert(&e.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Username"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                {move || error_for("username").map(|m| view! { <p class="form__error">{m}</p> })}

                <label class="form__label">
                    "Password"
                    <PasswordField value=password/>
                </label>
                {move || error_for("password").map(|m| view! { <p class="form__error">{m}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
