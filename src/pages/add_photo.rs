//! Photo upload form.

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::forms::{AddPhotoForm, FieldError};
use crate::net::api;
use crate::routes;
use crate::state::session::use_session;
use crate::util::notify;

/// File, description, and tags. The file handle is read straight off the
/// input element at submit time; a successful upload returns to the
/// library, a failed one alerts and stays put.
#[component]
pub fn AddPhoto() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let file_input: NodeRef<html::Input> = NodeRef::new();
    let description = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let pending = RwSignal::new(false);

    let error_for = move |name: &'static str| {
        errors.with(|errs| errs.iter().find(|e| e.field == name).map(|e| e.message.clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = AddPhotoForm {
            file: file_input.get().and_then(|el| el.files()).and_then(|files| files.get(0)),
            description: description.get_untracked(),
            tags: tags.get_untracked(),
        };
        let upload = match form.validate() {
            Ok(upload) => upload,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(Vec::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match api::upload_photo(&token, &upload).await {
                Ok(()) => navigate(routes::PHOTO_LIBRARY, NavigateOptions::default()),
                Err(e) => notify::alert(&e.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Add photo"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "File"
                    <input class="form__input" type="file" node_ref=file_input/>
                </label>
                {move || error_for("file").map(|m| view! { <p class="form__error">{m}</p> })}

                <label class="form__label">
                    "Description"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>

                <label class="form__label">
                    "Tags"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="sea, sunset"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Uploading..." } else { "Add photo" }}
                </button>
            </form>
        </div>
    }
}
