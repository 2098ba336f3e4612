//! Entity Tab Bar Component
//!
//! Switches between the hierarchical entity pages.

use leptos::prelude::*;

use crate::models::EntityKind;

#[component]
pub fn EntityTabBar(
    current_kind: ReadSignal<EntityKind>,
    set_current_kind: WriteSignal<EntityKind>,
) -> impl IntoView {
    view! {
        <nav class="entity-tab-bar">
            {EntityKind::ALL.into_iter().map(|kind| {
                let is_active = move || current_kind.get() == kind;
                let tab_class = move || {
                    if is_active() { "entity-tab active" } else { "entity-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_current_kind.set(kind)
                    >
                        {kind.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
