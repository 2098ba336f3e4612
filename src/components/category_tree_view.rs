//! Category Tree View Component
//!
//! Toolbar plus the recursive tree for one page.

use category_tree::{visible_rows, ConnectionPath, TreeViewState};
use leptos::ev;
use leptos::prelude::*;

use crate::api::Mutation;
use crate::components::TreeItem;
use crate::context::use_app_context;
use crate::store::{use_page_store, LoadStatus, PageDataStoreFields};

/// Expand/collapse controls and the visible row count
#[component]
fn TreeToolbar(view_state: RwSignal<TreeViewState>) -> impl IntoView {
    let store = use_page_store();

    let expand_all = move |_: ev::MouseEvent| {
        store.tree().with_untracked(|tree| {
            view_state.update(|s| s.expanded.expand_all(tree));
        });
    };
    let collapse_all = move |_: ev::MouseEvent| view_state.update(|s| s.expanded.collapse_all());

    let shown = move || {
        store.tree().with(|tree| {
            let total = category_tree::count_total_in_tree(tree);
            let visible = view_state.with(|s| visible_rows(tree, &s.expanded).len());
            format!("{} of {} shown", visible, total)
        })
    };

    view! {
        <div class="tree-toolbar">
            <button class="tree-toolbar-btn" on:click=expand_all>"Expand all"</button>
            <button class="tree-toolbar-btn" on:click=collapse_all>"Collapse all"</button>
            <span class="tree-toolbar-count">{shown}</span>
        </div>
    }
}

/// Tree panel: spinner while loading, one placeholder for failure or
/// an empty result, the tree otherwise.
#[component]
pub fn CategoryTreeView(
    view_state: RwSignal<TreeViewState>,
    #[prop(into)] on_mutate: Callback<Mutation>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();
    let (direction, indent_px) = ctx.config.with_value(|c| (c.direction, c.indent_px));

    let body = move || {
        let status = store.tree_status().get();
        let tree = store.tree().get();
        match status {
            LoadStatus::Loading => view! {
                <div class="tree-loading"><span class="spinner"></span></div>
            }.into_any(),
            LoadStatus::Ready if !tree.is_empty() => {
                let last = tree.len() - 1;
                view! {
                    <div class="tree-roots" role="tree" dir=direction.as_attr()>
                        {tree.into_iter().enumerate().map(|(index, node)| {
                            let root_is_last = index == last;
                            view! {
                                <TreeItem
                                    node=node
                                    depth=0
                                    is_last=root_is_last
                                    path=ConnectionPath::root()
                                    view_state=view_state
                                    direction=direction
                                    indent_px=indent_px
                                    on_mutate=on_mutate
                                />
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }
            _ => view! {
                <div class="tree-empty">"Nothing to show"</div>
            }.into_any(),
        }
    };

    view! {
        <div class="tree-panel">
            <TreeToolbar view_state=view_state />
            {body}
        </div>
    }
}
