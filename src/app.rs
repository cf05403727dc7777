//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::Redirect;
use crate::util::session::{BrowserSession, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="hu">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: client-side routes for the three pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/account-client.css"/>
        <Title text="Fiók"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Landing route — forwards to the profile when a session token exists,
/// otherwise to the login page.
#[component]
fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        let target = if BrowserSession.get().is_some() {
            Redirect::Profile
        } else {
            Redirect::Login
        };
        navigate(target.path(), NavigateOptions::default());
    });

    view! { <div class="auth-page"></div> }
}
