//! Tree Item Component
//!
//! One node of a category tree, rendering its children recursively.

use category_tree::{connector_segments, ConnectionPath, Direction, TreeViewState};
use leptos::ev;
use leptos::prelude::*;

use crate::api::Mutation;
use crate::components::DeleteConfirmButton;
use crate::models::{NodeId, TreeNode};

/// Membership of one id. Toggling any other node leaves the memo's value
/// unchanged, so nothing downstream of it re-runs.
fn expansion_memo(view_state: RwSignal<TreeViewState>, id: NodeId) -> Memo<bool> {
    Memo::new(move |_| view_state.with(|s| s.expanded.is_expanded(id)))
}

/// A single node row plus its (expanded) subtree
///
/// * `path` - connector flags inherited from the parent
/// * `is_last` - whether this node is the last of its siblings
#[component]
pub fn TreeItem(
    node: TreeNode,
    depth: usize,
    is_last: bool,
    path: ConnectionPath,
    view_state: RwSignal<TreeViewState>,
    direction: Direction,
    indent_px: u32,
    #[prop(into)] on_mutate: Callback<Mutation>,
) -> impl IntoView {
    let TreeNode {
        id,
        name,
        is_active,
        children,
    } = node;
    let has_children = !children.is_empty();
    let child_count = children.len();
    let child_path = path.child_path(depth, is_last);
    let aria_level = (depth + 1).to_string();

    let is_expanded = expansion_memo(view_state, id);

    // Childless rows have nothing to open
    let toggle = move |_: ev::MouseEvent| {
        if has_children {
            view_state.update(|s| {
                s.expanded.toggle(id);
            });
        }
    };

    let segments = connector_segments(&path, depth, is_last)
        .into_iter()
        .map(|segment| {
            view! {
                <span
                    class=segment.kind.css_class()
                    style=direction.offset_style(segment.offset(indent_px))
                ></span>
            }
        })
        .collect_view();

    let row_class = move || {
        let mut c = String::from("tree-row");
        if !is_active { c.push_str(" inactive"); }
        if has_children && is_expanded.get() { c.push_str(" expanded"); }
        c
    };

    view! {
        <div class="tree-node" role="treeitem" attr:aria-level=aria_level>
            <div
                class=row_class
                style=direction.indent_style(depth, indent_px)
                on:click=toggle
            >
                {segments}

                // Expand toggle
                {if has_children {
                    view! {
                        <button class="tree-expand-btn">
                            {move || if is_expanded.get() { "▼" } else { "▶" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <span class="tree-expand-placeholder">"·"</span> }.into_any()
                }}

                <span class="tree-node-name">{name}</span>
                <span class="tree-node-id">"#" {id}</span>
                {has_children.then(|| view! {
                    <span class="tree-node-count">{format!("({})", child_count)}</span>
                })}

                <button
                    class=if is_active { "status-badge active" } else { "status-badge inactive" }
                    title="Toggle active"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_mutate.run(Mutation::ToggleActive(id));
                    }
                >
                    {if is_active { "Active" } else { "Inactive" }}
                </button>

                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_: ()| on_mutate.run(Mutation::Delete(id)))
                />
            </div>

            // Children (recursive)
            {move || if has_children && is_expanded.get() {
                let last = children.len() - 1;
                view! {
                    <div class="tree-children" role="group">
                        {children.iter().cloned().enumerate().map(|(index, child)| {
                            let child_is_last = index == last;
                            view! {
                                <TreeItem
                                    node=child
                                    depth=depth + 1
                                    is_last=child_is_last
                                    path=child_path.clone()
                                    view_state=view_state
                                    direction=direction
                                    indent_px=indent_px
                                    on_mutate=on_mutate
                                />
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
