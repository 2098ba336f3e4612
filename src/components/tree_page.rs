//! Tree Page Component
//!
//! One hierarchical entity page: stats, tree and flat table, all fed by
//! two independent fetches that rerun whenever the app invalidates.

use category_tree::{Stats, TreeViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{perform_mutation, CategoryApi, HttpCategoryApi, Mutation};
use crate::components::{CategoryTable, CategoryTreeView, StatsBar};
use crate::context::use_app_context;
use crate::debounce::{take_ticket, ticket_is_current, TicketGate};
use crate::models::EntityKind;
use crate::store::{store_apply_flat, store_apply_tree, LoadStatus, PageData, PageDataStoreFields};

#[component]
pub fn TreePage(kind: EntityKind) -> impl IntoView {
    let ctx = use_app_context();

    // Page-local state, dropped when the page unmounts
    let store = Store::new(PageData::default());
    provide_context(store);
    let view_state = RwSignal::new(TreeViewState::new());

    // One client per page; each fetch keeps only its newest response
    let api = StoredValue::new_local(HttpCategoryApi::new(&ctx.config.get_value(), kind));
    let tree_gate = StoredValue::new(TicketGate::default());
    let list_gate = StoredValue::new(TicketGate::default());

    // Tree query
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let ticket = take_ticket(tree_gate);
        let api = api.get_value();
        log::debug!("[PAGE] Loading {} tree, trigger={}", kind.resource(), trigger);
        spawn_local(async move {
            let result = api.get_tree().await;
            if ticket_is_current(tree_gate, ticket) {
                store_apply_tree(&store, result);
            } else {
                log::debug!("[PAGE] Dropped stale {} tree response", kind.resource());
            }
        });
    });

    // Flat list query
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = take_ticket(list_gate);
        let api = api.get_value();
        let page_size = ctx.config.with_value(|c| c.flat_page_size);
        spawn_local(async move {
            let result = api.get_flat_list(page_size).await;
            if ticket_is_current(list_gate, ticket) {
                store_apply_flat(&store, result);
            } else {
                log::debug!("[PAGE] Dropped stale {} list response", kind.resource());
            }
        });
    });

    // Open everything once per successful fetch of a changed tree
    Effect::new(move |_| {
        if store.tree_status().get() != LoadStatus::Ready {
            return;
        }
        store.tree().with(|tree| {
            let reset = view_state.try_update(|s| s.on_tree_loaded(tree)).unwrap_or(false);
            if reset {
                log::debug!("[PAGE] Expanded set reset to {} nodes", view_state.with_untracked(|s| s.expanded.len()));
            }
        });
    });

    // Each stat family only once its own fetch succeeded
    let stats = Memo::new(move |_| {
        let list_ready = store.list_status().get() == LoadStatus::Ready;
        let tree_ready = store.tree_status().get() == LoadStatus::Ready;
        let total_count = store.total_count().get();
        store.flat().with(|flat| {
            store.tree().with(|tree| {
                Stats::compute(
                    list_ready.then_some((flat.as_slice(), total_count)),
                    tree_ready.then_some(tree.as_slice()),
                )
            })
        })
    });

    let on_mutate = Callback::new(move |mutation: Mutation| {
        let api = api.get_value();
        spawn_local(async move {
            let outcome = perform_mutation(&api, mutation).await;
            ctx.notify(outcome.level, outcome.message);
            if outcome.invalidate {
                ctx.reload();
            }
        });
    });

    view! {
        <section class="tree-page">
            <header class="tree-page-header">
                <h1>{kind.title()}</h1>
            </header>
            <StatsBar stats=stats />
            <div class="tree-page-body">
                <CategoryTreeView view_state=view_state on_mutate=on_mutate />
                <CategoryTable on_mutate=on_mutate />
            </div>
        </section>
    }
}
