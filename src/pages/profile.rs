//! Profile page: fetches the signed-in user's record on mount and shows
//! it read-only, with a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::ReadOnlyField;
use crate::state::Redirect;
use crate::state::profile::ProfileState;
use crate::util::session::{BrowserSession, SessionStore};

/// Profile page — redirects to `/login` when there is no session token or
/// the server no longer accepts it.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::default());
    let navigate = use_navigate();

    // Fetch on mount. Without a stored token there is nothing to ask the
    // server for: go straight to the login page, no network call.
    Effect::new({
        let navigate = navigate.clone();
        move || match BrowserSession.get() {
            None => navigate(Redirect::Login.path(), NavigateOptions::default()),
            Some(token) => {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::fetch_profile(&token).await;
                    let mut redirect = None;
                    state.update(|s| redirect = s.apply_outcome(outcome, &BrowserSession));
                    if let Some(target) = redirect {
                        navigate(target.path(), NavigateOptions::default());
                    }
                });
            }
        }
    });

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            let target = crate::state::profile::logout(&BrowserSession);
            navigate(target.path(), NavigateOptions::default());
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Profil"</h1>
            </header>
            <div class="auth-card">
                {move || {
                    state
                        .get()
                        .error
                        .map(|msg| view! { <div class="auth-card__alert">{msg}</div> })
                }}
                {move || {
                    let on_logout = on_logout.clone();
                    state
                        .get()
                        .profile
                        .map(|profile| {
                            view! {
                                <div class="profile-fields">
                                    <ReadOnlyField label="Vezetéknév" value=profile.last_name/>
                                    <ReadOnlyField label="Keresztnév" value=profile.first_name/>
                                    <ReadOnlyField
                                        label="E-mail cím"
                                        input_type="email"
                                        value=profile.email
                                    />
                                    <button class="btn btn--danger" on:click=on_logout>
                                        "Kilépés"
                                    </button>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
