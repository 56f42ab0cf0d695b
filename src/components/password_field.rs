//! Password input with a visibility toggle.

use leptos::prelude::*;

/// Password input bound to `value`, with a button that flips the input
/// between masked and plain text.
#[component]
pub fn PasswordField(
    value: RwSignal<String>,
    #[prop(into, default = "Password".to_owned())] placeholder: String,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-field">
            <input
                class="form__input"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-field__toggle"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
