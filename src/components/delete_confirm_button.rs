//! Delete Confirm Button Component
//!
//! Inline two-step delete used by tree rows and table rows.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button first; clicking it swaps in a prompt with ✓/✗.
/// Clicks never reach the row underneath, so a tree row does not
/// expand or collapse while deleting.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `prompt` - Question shown while confirming (defaults to "Delete?")
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional, into)] prompt: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = prompt.unwrap_or_else(|| "Delete?".to_string());

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    title="Confirm delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Cancel"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
