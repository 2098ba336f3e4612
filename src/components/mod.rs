//! UI Components
//!
//! Reusable Leptos components.

mod category_table;
mod category_tree_view;
mod delete_confirm_button;
mod entity_tab_bar;
mod notification_stack;
mod stats_bar;
mod tree_item;
mod tree_page;

pub use category_table::CategoryTable;
pub use category_tree_view::CategoryTreeView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_tab_bar::EntityTabBar;
pub use notification_stack::NotificationStack;
pub use stats_bar::StatsBar;
pub use tree_item::TreeItem;
pub use tree_page::TreePage;
