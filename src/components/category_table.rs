//! Category Table Component
//!
//! Flat listing with debounced search, status filter, sortable columns
//! and pagination.

use leptos::prelude::*;

use crate::api::Mutation;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::debounce::debounced;
use crate::store::{use_page_store, LoadStatus, PageDataStoreFields};
use crate::table::{SortKey, StatusFilter, TableQuery, PAGE_SIZES};

#[component]
pub fn CategoryTable(#[prop(into)] on_mutate: Callback<Mutation>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();
    let query = RwSignal::new(TableQuery::default());

    let delay = ctx.config.with_value(|c| c.search_debounce_ms);
    let set_search = debounced(delay, move |text| query.update(|q| q.set_search(text)));

    let page = Memo::new(move |_| store.flat().with(|items| query.with(|q| q.apply(items))));

    let sort_marker = move |key: SortKey| {
        query.with(|q| match (q.sort == key, q.descending) {
            (false, _) => "",
            (true, false) => " ▲",
            (true, true) => " ▼",
        })
    };

    let rows = move || {
        page.get().rows.into_iter().map(|row| {
            let id = row.id;
            let is_active = row.is_active;
            let parent = row.parent_id.map(|p| format!("#{}", p)).unwrap_or_default();
            let created = row
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            view! {
                <tr class=if is_active { "table-row" } else { "table-row inactive" }>
                    <td>{id}</td>
                    <td>{row.name}</td>
                    <td>{parent}</td>
                    <td>{created}</td>
                    <td>
                        <button
                            class=if is_active { "status-badge active" } else { "status-badge inactive" }
                            on:click=move |_| on_mutate.run(Mutation::ToggleActive(id))
                        >
                            {if is_active { "Active" } else { "Inactive" }}
                        </button>
                    </td>
                    <td>
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            on_confirm=Callback::new(move |_: ()| on_mutate.run(Mutation::Delete(id)))
                        />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <section class="category-table">
            <div class="table-controls">
                <input
                    type="search"
                    placeholder="Search by name..."
                    on:input=move |ev| set_search(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let status = StatusFilter::parse(&event_target_value(&ev));
                    query.update(|q| q.set_status(status));
                }>
                    {StatusFilter::ALL.into_iter().map(|status| view! {
                        <option value=status.label()>{status.label()}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        query.update(|q| q.set_page_size(size));
                    }
                }>
                    {PAGE_SIZES.into_iter().map(|size| view! {
                        <option value=size.to_string()>{format!("{} / page", size)}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || match store.list_status().get() {
                LoadStatus::Loading => view! {
                    <div class="table-loading"><span class="spinner"></span></div>
                }.into_any(),
                LoadStatus::Failed(_) => view! {
                    <div class="table-empty">"Nothing to show"</div>
                }.into_any(),
                LoadStatus::Ready => view! {
                    <table>
                        <thead>
                            <tr>
                                <th class="sortable" on:click=move |_| query.update(|q| q.sort_by(SortKey::Id))>
                                    "ID" {move || sort_marker(SortKey::Id)}
                                </th>
                                <th class="sortable" on:click=move |_| query.update(|q| q.sort_by(SortKey::Name))>
                                    "Name" {move || sort_marker(SortKey::Name)}
                                </th>
                                <th>"Parent"</th>
                                <th>"Created"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }.into_any(),
            }}

            <div class="table-pagination">
                <button
                    disabled=move || page.with(|p| p.page == 0)
                    on:click=move |_| {
                        let current = page.with_untracked(|p| p.page);
                        query.update(|q| q.page = current.saturating_sub(1));
                    }
                >
                    "‹"
                </button>
                <span>
                    {move || page.with(|p| format!("Page {} of {} ({} rows)", p.page + 1, p.page_count, p.filtered))}
                </span>
                <button
                    disabled=move || page.with(|p| p.page + 1 >= p.page_count)
                    on:click=move |_| {
                        let current = page.with_untracked(|p| p.page);
                        query.update(|q| q.page = current + 1);
                    }
                >
                    "›"
                </button>
            </div>
        </section>
    }
}
