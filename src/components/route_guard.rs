//! Route guards: render-time wrappers that gate pages by login state.
//!
//! `PrivateRoute` keeps anonymous visitors off authenticated pages;
//! `PublicRoute` keeps authenticated users off pages meant only for
//! anonymous visitors. Both are pure functions of the current session plus
//! their own configuration and hold no state of their own. The
//! render-or-redirect choice lives in plain decision functions so it can be
//! tested without a DOM; the components just map `Redirect` onto the result.
//!
//! Token expiry is deliberately not checked here: an expired-but-present
//! token still counts as logged in, and the API layer deals with the
//! resulting 401 at request time.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes;
use crate::state::session::{Session, use_session};

/// Where a guard sends a render attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(String),
}

/// Private pages render only with a session present.
fn private_decision(session: Option<&Session>, redirect_to: &str) -> GuardDecision {
    if session.is_some() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(redirect_to.to_owned())
    }
}

/// Restricted public pages redirect authenticated users away; unrestricted
/// ones are a pass-through regardless of session state.
fn public_decision(session: Option<&Session>, restricted: bool, redirect_to: &str) -> GuardDecision {
    if restricted && session.is_some() {
        GuardDecision::Redirect(redirect_to.to_owned())
    } else {
        GuardDecision::Render
    }
}

fn apply(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Render => children(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Wrapper for pages that require authentication. With a session present
/// the wrapped content renders; otherwise the visitor is redirected and the
/// content is never rendered.
#[component]
pub fn PrivateRoute(
    children: ChildrenFn,
    /// Redirect target for anonymous visitors.
    #[prop(into, default = routes::MAIN_PAGE.to_owned())]
    redirect_to: String,
) -> impl IntoView {
    let session = use_session();
    move || apply(private_decision(session.current().as_ref(), &redirect_to), &children)
}

/// Wrapper for pages meant for anonymous visitors. With `restricted` set,
/// an authenticated user is redirected to `redirect_to` instead of seeing
/// the content.
#[component]
pub fn PublicRoute(
    children: ChildrenFn,
    /// Redirect target for authenticated users on restricted pages.
    #[prop(into, default = routes::PHOTO_LIBRARY.to_owned())]
    redirect_to: String,
    #[prop(optional)] restricted: bool,
) -> impl IntoView {
    let session = use_session();
    move || {
        apply(
            public_decision(session.current().as_ref(), restricted, &redirect_to),
            &children,
        )
    }
}
