//! Notification Stack Component
//!
//! Toasts raised by mutations; click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || ctx.notices.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.level.css_class()
                            on:click=move |_| ctx.dismiss(id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
