//! Transient outcome notice, the toast equivalent for form results.

use leptos::prelude::*;

use crate::state::register::{Notice, NoticeKind};

/// Renders the current notice, or nothing.
#[component]
pub fn NoticeView(notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class>
                    <strong class="notice__title">{n.title}</strong>
                    <span class="notice__description">{n.description}</span>
                </div>
            }
        })
    }
}
