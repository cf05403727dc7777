//! Labeled text input with an inline error slot.

use leptos::prelude::*;

/// A single labeled form input. The error signal should already account
/// for the touched flag; whatever it yields is rendered.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            {move || {
                error
                    .get()
                    .map(|msg| view! { <span class="form-field__error">{msg}</span> })
            }}
        </label>
    }
}

/// A read-only variant for the profile view.
#[component]
pub fn ReadOnlyField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input class="form-field__input" type=input_type prop:value=value readonly=true/>
        </label>
    }
}
