//! Registration page: five fields, a transient outcome notice, and the
//! delayed redirect to the login page after a successful signup.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::notice::NoticeView;
use crate::state::register::RegisterForm;

/// Builds the value/error signals and input/blur callbacks for one field
/// of the registration form.
macro_rules! field_bindings {
    ($form:ident, $field:ident, $error:ident) => {{
        let value = Signal::derive(move || $form.get().$field.value.clone());
        let error = Signal::derive(move || {
            let f = $form.get();
            if f.$field.touched { f.$error() } else { None }
        });
        let on_input = Callback::new(move |value: String| $form.update(|f| f.$field.input(value)));
        let on_blur = Callback::new(move |()| $form.update(|f| f.$field.blur()));
        (value, error, on_input, on_blur)
    }};
}

/// Registration page — creates the account, then sends the user to the
/// login page after a short confirmation delay.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let (first_name_value, first_name_error, on_first_name_input, on_first_name_blur) =
        field_bindings!(form, first_name, first_name_error);
    let (last_name_value, last_name_error, on_last_name_input, on_last_name_blur) =
        field_bindings!(form, last_name, last_name_error);
    let (username_value, username_error, on_username_input, on_username_blur) =
        field_bindings!(form, username, username_error);
    let (password_value, password_error, on_password_input, on_password_blur) =
        field_bindings!(form, password, password_error);
    let (confirm_value, confirm_error, on_confirm_input, on_confirm_blur) =
        field_bindings!(form, password_confirm, password_confirm_error);

    let notice = Signal::derive(move || form.get().notice);

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
        let request = form.get_untracked().request();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::register(&request).await;
                let mut to_login = false;
                let mut generation = 0;
                form.update(|f| {
                    to_login = f.apply_outcome(outcome);
                    generation = f.notice_generation();
                });
                // The notice and the post-success redirect share one delay.
                gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
                if to_login {
                    navigate("/login", leptos_router::NavigateOptions::default());
                } else {
                    // A resubmission may have replaced the notice while we
                    // slept; only dismiss the one this task posted.
                    form.update(|f| f.dismiss_notice(generation));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Regisztráció"</h1>
            </header>
            <div class="auth-card">
                <form on:submit=on_submit>
                    <FormField
                        label="Keresztnév"
                        value=first_name_value
                        error=first_name_error
                        on_input=on_first_name_input
                        on_blur=on_first_name_blur
                    />
                    <FormField
                        label="Vezetéknév"
                        value=last_name_value
                        error=last_name_error
                        on_input=on_last_name_input
                        on_blur=on_last_name_blur
                    />
                    <FormField
                        label="Email cím"
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
                    <FormField
                        label="Jelszó megerősítése"
                        input_type="password"
                        value=confirm_value
                        error=confirm_error
                        on_input=on_confirm_input
                        on_blur=on_confirm_blur
                    />
                    <NoticeView notice=notice/>
                    <div class="auth-card__actions">
                        <button class="btn btn--primary" type="submit" disabled=submit_disabled>
                            "Regisztráció"
                        </button>
                        <button class="btn" type="button" on:click=move |_| form.update(|f| f.reset())>
                            "Mégsem"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
