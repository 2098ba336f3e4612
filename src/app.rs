//! Marketplace Admin App
//!
//! Tab bar over the hierarchical entity pages, plus the toast stack.

use leptos::prelude::*;

use crate::components::{EntityTabBar, NotificationStack, TreePage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::EntityKind;
use crate::notifications::NoticeQueue;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_kind, set_current_kind) = signal(EntityKind::Categories);
    let notices = RwSignal::new(NoticeQueue::default());
    let direction = config.direction;

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        notices,
        StoredValue::new(config),
    ));

    view! {
        <div class="app-layout" dir=direction.as_attr()>
            <main class="main-content">
                <EntityTabBar
                    current_kind=current_kind
                    set_current_kind=set_current_kind
                />

                // Switching tabs mounts a fresh page, resetting its expanded set
                {move || {
                    let kind = current_kind.get();
                    log::info!("[APP] Showing {}", kind.title());
                    view! { <TreePage kind=kind /> }
                }}
            </main>

            <NotificationStack />
        </div>
    }
}
