//! Root application component: session context, navbar, and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::navbar::NavBar;
use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::pages::add_photo::AddPhoto;
use crate::pages::games_library::GamesLibrary;
use crate::pages::login::LoginPage;
use crate::pages::main_page::MainPage;
use crate::pages::photo_library::PhotoLibrary;
use crate::pages::show_photo::ShowPhoto;
use crate::pages::sign_up::SignUpPage;
use crate::state::session::provide_session_context;

/// Root component.
///
/// Provides the session context, then declares the route table. Public
/// pages are restricted so a signed-in user is bounced to the library;
/// private pages bounce anonymous visitors to the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session_context();

    view! {
        <Title text="PhotoShare"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <PublicRoute restricted=true><MainPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <PublicRoute restricted=true><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <PublicRoute restricted=true><SignUpPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("photos")
                        view=|| view! { <PrivateRoute><PhotoLibrary/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("photos"), StaticSegment("add"))
                        view=|| view! { <PrivateRoute><AddPhoto/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("photos"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute><ShowPhoto/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("games")
                        view=|| view! { <PrivateRoute><GamesLibrary/></PrivateRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
