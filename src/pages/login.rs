//! Login page: email + password with inline validation and a server-error
//! alert below the fields.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::state::login::LoginForm;
use crate::util::session::BrowserSession;

/// Login page — submits the credentials and stores the returned token.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let username_value = Signal::derive(move || form.get().username.value.clone());
    let username_error = Signal::derive(move || {
        let f = form.get();
        if f.username.touched { f.username_error() } else { None }
    });
    let on_username_input =
        Callback::new(move |value: String| form.update(|f| f.username.input(value)));
    let on_username_blur = Callback::new(move |()| form.update(|f| f.username.blur()));

    let password_value = Signal::derive(move || form.get().password.value.clone());
    let password_error = Signal::derive(move || {
        let f = form.get();
        if f.password.touched { f.password_error() } else { None }
    });
    let on_password_input =
        Callback::new(move |value: String| form.update(|f| f.password.input(value)));
    let on_password_blur = Callback::new(move |()| form.update(|f| f.password.blur()));

    let submit_disabled = move || {
        let f = form.get();
        f.submitting || !f.is_valid()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut proceed = false;
        form.update(|f| proceed = f.begin_submit());
        if !proceed {
            return;
        }
        let credentials = form.get_untracked().credentials();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&credentials).await;
            let mut redirect = None;
            form.update(|f| redirect = f.apply_outcome(outcome, &BrowserSession));
            if let Some(target) = redirect {
                navigate(target.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Bejelentkezés"</h1>
            </header>
            <div class="auth-card">
                <form on:submit=on_submit>
                    <FormField
                        label="E-mail cím"
                        input_type="email"
                        value=username_value
                        error=username_error
                        on_input=on_username_input
                        on_blur=on_username_blur
                    />
                    <FormField
                        label="Jelszó"
                        input_type="password"
                        value=password_value
                        error=password_error
                        on_input=on_password_input
                        on_blur=on_password_blur
                    />
                    {move || {
                        form.get()
                            .error
                            .map(|msg| view! { <div class="auth-card__alert">{msg}</div> })
                    }}
                    <button class="btn btn--primary" type="submit" disabled=submit_disabled>
                        "Bejelentkezés"
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href="/register">"Regisztráció"</a>
                </p>
            </div>
        </div>
    }
}
