//! Stats Bar Component
//!
//! Summary cards above a tree page.

use category_tree::{Consistency, Stats};
use leptos::prelude::*;

use crate::store::{use_page_store, LoadStatus, PageDataStoreFields};

/// Card text for one stat: the value once its fetch succeeded, a
/// placeholder while pending, "failed" when the fetch errored.
fn card_text(status: &LoadStatus, value: Option<String>) -> String {
    match (status, value) {
        (LoadStatus::Ready, Some(value)) => value,
        (LoadStatus::Failed(_), _) => "failed".to_string(),
        _ => "…".to_string(),
    }
}

fn consistency_hint(consistency: Consistency) -> Option<String> {
    match consistency {
        Consistency::Consistent | Consistency::Incomplete => None,
        Consistency::Truncated { loaded, total } => Some(format!(
            "Active/inactive counts cover the first {} of {} rows",
            loaded, total
        )),
        Consistency::Diverged { flat, tree } => Some(format!(
            "List reports {} entries but the tree holds {}; data may be out of date",
            flat, tree
        )),
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

/// Totals from the flat list and the tree, with a hint when the two
/// snapshots disagree
#[component]
pub fn StatsBar(stats: Memo<Stats>) -> impl IntoView {
    let store = use_page_store();

    let flat_card = move |pick: fn(&category_tree::FlatStats) -> String| {
        Signal::derive(move || {
            let value = stats.with(|s| s.flat.as_ref().map(pick));
            store.list_status().with(|status| card_text(status, value))
        })
    };
    let tree_card = move |pick: fn(&category_tree::TreeStats) -> String| {
        Signal::derive(move || {
            let value = stats.with(|s| s.tree.as_ref().map(pick));
            store.tree_status().with(|status| card_text(status, value))
        })
    };

    let hint = move || consistency_hint(stats.get().consistency());

    view! {
        <div class="stats-bar">
            <StatCard label="Total" value=flat_card(|f| f.total.to_string()) />
            <StatCard label="Active" value=flat_card(|f| f.active.to_string()) />
            <StatCard label="Inactive" value=flat_card(|f| f.inactive.to_string()) />
            <StatCard label="Root nodes" value=tree_card(|t| t.roots.to_string()) />
            <StatCard label="In tree" value=tree_card(|t| t.total_in_tree.to_string()) />
            <StatCard label="Levels" value=tree_card(|t| t.levels.to_string()) />
        </div>
        {move || hint().map(|text| view! { <p class="stats-hint">{text}</p> })}
    }
}
