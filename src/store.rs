//! Global Page State Store
//!
//! Filter and cart state owned outside the views, updated through the
//! pure functions in `menu_core`. Uses Leptos reactive_stores for
//! fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use menu_core::{Cart, CategoryId, FilterState, ItemId, MenuItem};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Selected category and search text
    pub filter: FilterState,
    /// Current cart
    pub cart: Cart,
    /// Item shown in the detail sheet
    pub selected_item: Option<ItemId>,
    /// Cart drawer visibility
    pub cart_open: bool,
    /// Category sidebar visibility
    pub sidebar_open: bool,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add one unit of an item to the cart
pub fn store_add_to_cart(store: &MenuStore, item: &MenuItem) {
    let next = store.cart().with_untracked(|cart| cart.add(item));
    web_sys::console::log_1(&format!("[CART] +{} -> {}", item.id, next.quantity_of(item.id)).into());
    *store.cart().write() = next;
}

/// Remove one unit of an item from the cart
pub fn store_remove_from_cart(store: &MenuStore, item_id: ItemId) {
    let next = store.cart().with_untracked(|cart| cart.remove(item_id));
    web_sys::console::log_1(&format!("[CART] -{} -> {}", item_id, next.quantity_of(item_id)).into());
    *store.cart().write() = next;
}

/// Pick a category and close the sidebar
pub fn store_select_category(store: &MenuStore, category: CategoryId) {
    store.filter().write().select_category(category);
    store.sidebar_open().set(false);
}

/// Replace the search text
pub fn store_set_search(store: &MenuStore, query: String) {
    store.filter().write().set_search(query);
}

/// Reset category and search
pub fn store_clear_filters(store: &MenuStore) {
    store.filter().write().clear();
}
