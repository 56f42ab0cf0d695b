//! Games library with the balance panel.

use leptos::prelude::*;

use crate::db;
use crate::net::api;
use crate::state::session::use_session;
use crate::util::notify;

/// Game card grid with a name filter, plus the balance panel.
#[component]
pub fn GamesLibrary() -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="library">
            <header class="library__header">
                <h1>"Your games"</h1>
                <input
                    class="form__input library__search"
                    type="search"
                    placeholder="Filter by name"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>

            <BalancePanel/>

            <div class="library__grid">
                {move || {
                    db::games_by_name(&query.get())
                        .into_iter()
                        .map(|game| {
                            view! {
                                <div class="card">
                                    <img class="card__image" src=game.image_url alt=game.name/>
                                    <p class="card__text">{game.name}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// Fetches the balance on mount and can add credits through the update
/// endpoint. The bearer token is read fresh from the session store for
/// each call.
#[component]
fn BalancePanel() -> impl IntoView {
    let session = use_session();

    let balance = LocalResource::new(move || async move {
        let token = session.token().unwrap_or_default();
        match api::fetch_game_balance(&token).await {
            Ok(balance) => Some(balance),
            Err(e) => {
                log::warn!("balance fetch failed: {e}");
                None
            }
        }
    });

    let amount = RwSignal::new(String::from("100"));

    let on_deposit = move |_| {
        let Ok(value) = amount.get_untracked().trim().parse::<i64>() else {
            notify::alert("Enter a whole number of credits");
            return;
        };
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match api::update_game_balance(&token, value).await {
                Ok(_) => balance.refetch(),
                Err(e) => notify::alert(&e.to_string()),
            }
        });
    };

    view! {
        <div class="balance">
            <span class="balance__label">"Game balance:"</span>
            <Suspense fallback=|| view! { <span class="balance__value">"Loading..."</span> }>
                <span class="balance__value">
                    {move || {
                        balance
                            .get()
                            .map(|b| match b {
                                Some(value) => format!("{value} credits"),
                                None => "unavailable".to_owned(),
                            })
                    }}
                </span>
            </Suspense>
            <input
                class="form__input balance__amount"
                type="number"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <button class="btn" on:click=on_deposit>"Add credits"</button>
        </div>
    }
}
