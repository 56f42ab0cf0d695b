//! Sign-up page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::forms::{self, FieldError, SignUpForm};
use crate::net::api;
use crate::routes;
use crate::state::session::use_session;
use crate::util::notify;

/// Registration form. Fields are validated client-side before the call;
/// a successful sign-up behaves exactly like a login.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let birthday = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let pending = RwSignal::new(false);

    let error_for = move |name: &'static str| {
        errors.with(|errs| errs.iter().find(|e| e.field == name).map(|e| e.message.clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignUpForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
            birthday: birthday.get_untracked(),
        };
        let payload = match form.validate(forms::current_year()) {
            Ok(payload) => payload,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(Vec::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_up(&payload).await {
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
            <h1>"Sign up"</h1>
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

                <label class="form__label">
                    "Password confirmation"
                    <PasswordField value=password_confirmation placeholder="Password confirmation"/>
                </label>
                {move || {
                    error_for("password_confirmation").map(|m| view! { <p class="form__error">{m}</p> })
                }}

                <label class="form__label">
                    "Birthday"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || birthday.get()
                        on:input=move |ev| birthday.set(event_target_value(&ev))
                    />
                </label>
                {move || error_for("birthday").map(|m| view! { <p class="form__error">{m}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing up..." } else { "Sign up" }}
                </button>
            </form>
        </div>
    }
}
